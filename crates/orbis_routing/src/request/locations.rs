use geo_types::Coord;

use crate::geo_input::{GeoInput, GeoInputKind, has_path};

/// Builds the `locations` path segment: `lat,lon` pairs joined by `:`.
///
/// Without paths every waypoint is listed in order. With paths only the overall
/// origin and destination are listed, interior stops travel in the POST body.
pub fn build_locations(geo_inputs: &[GeoInput], kinds: &[GeoInputKind]) -> String {
    if !has_path(kinds) {
        return geo_inputs
            .iter()
            .filter_map(format_end)
            .collect::<Vec<_>>()
            .join(":");
    }

    let origin = geo_inputs.first().and_then(format_end);
    let destination = geo_inputs.last().and_then(|input| match input {
        GeoInput::Waypoint(_) => format_end(input),
        GeoInput::Path(_) => input.last_coord().map(format_coord),
    });

    origin
        .into_iter()
        .chain(destination)
        .collect::<Vec<_>>()
        .join(":")
}

fn format_end(input: &GeoInput) -> Option<String> {
    match input {
        GeoInput::Waypoint(waypoint) => Some(match waypoint.radius_meters {
            Some(radius) => format!(
                "circle({},{},{})",
                waypoint.position.y(),
                waypoint.position.x(),
                radius
            ),
            None => format_coord(waypoint.position.0),
        }),
        GeoInput::Path(_) => input.first_coord().map(format_coord),
    }
}

fn format_coord(coord: Coord<f64>) -> String {
    format!("{},{}", coord.y, coord.x)
}
