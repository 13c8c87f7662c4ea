use orbis_routing::Waypoint;
use serde::de::DeserializeOwned;

/// Parses `lon,lat` or `lon,lat,radius` into a waypoint.
pub fn parse_position(input: &str) -> Result<Waypoint, String> {
    let values = input
        .split(',')
        .map(|value| value.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| format!("Invalid position '{input}', expected lon,lat[,radius]"))?;

    match values.as_slice() {
        [lon, lat] => Ok(Waypoint::new(*lon, *lat)),
        [lon, lat, radius] => Ok(Waypoint::new(*lon, *lat).with_radius(*radius)),
        _ => Err(format!(
            "Invalid position '{input}', expected lon,lat[,radius]"
        )),
    }
}

/// Parses any option enum from its JSON name, e.g. `historical` or `tollRoads`.
pub fn parse_option<T: DeserializeOwned>(input: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(input.to_string()))
        .map_err(|_| format!("Invalid value '{input}'"))
}
