use geo_types::{Coord, LineString};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    model::{
        bbox::BBox,
        route::{Route, RouteProperties, Routes},
        section::{Section, Sections},
    },
    request::params::CalculateRouteParams,
    response::{
        guidance::parse_guidance,
        sections::{map_section, parse_leg_sections},
        summary::parse_summary,
        types::{ApiCalculateRouteResponse, ApiRoute},
    },
};

/// Builds the domain route for the `index`-th entry of a response.
pub fn parse_route(route: &ApiRoute, index: usize, battery_capacity_in_kwh: Option<f64>) -> Route {
    let geometry: LineString<f64> = route
        .legs
        .iter()
        .flat_map(|leg| leg.points.iter().copied().map(Coord::from))
        .collect();
    let point_count = geometry.0.len();

    let legs = parse_leg_sections(&route.legs, battery_capacity_in_kwh);
    let sections: Sections = legs
        .into_iter()
        .map(Section::Leg)
        .chain(route.sections.iter().filter_map(map_section))
        .filter(|section| {
            let props = section.props();
            let in_bounds = props.start_point_index <= props.end_point_index
                && props.end_point_index < point_count;
            if !in_bounds {
                warn!(
                    start = props.start_point_index,
                    end = props.end_point_index,
                    point_count,
                    "Dropping section outside of the route geometry"
                );
            }
            in_bounds
        })
        .collect();

    let guidance = route
        .guidance
        .as_ref()
        .map(|guidance| parse_guidance(guidance, &geometry));

    Route {
        id: Uuid::new_v4().to_string(),
        index,
        bbox: BBox::from_line_string(&geometry),
        geometry,
        properties: RouteProperties {
            summary: parse_summary(&route.summary, battery_capacity_in_kwh),
            sections,
            guidance,
        },
    }
}

/// Parses every route of a response, in response order.
pub fn parse_calculate_route_response(
    response: &ApiCalculateRouteResponse,
    params: &CalculateRouteParams,
) -> Routes {
    let battery_capacity_in_kwh = params.battery_capacity_in_kwh();

    let routes: Vec<Route> = response
        .routes
        .iter()
        .enumerate()
        .map(|(index, route)| parse_route(route, index, battery_capacity_in_kwh))
        .collect();

    debug!(
        routes = routes.len(),
        format_version = response.format_version.as_deref(),
        "Parsed calculate-route response"
    );

    Routes::new(routes)
}
