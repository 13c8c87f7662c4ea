use reqwest::{Method, Url};
use serde::Serialize;
use serde_with::skip_serializing_none;
use tracing::debug;

use crate::{
    config::RoutingClientParams,
    error::RoutingError,
    geo_input::{GeoInputKind, classify, has_path},
    request::{
        locations::build_locations,
        params::{
            CalculateRouteParams, DEFAULT_GUIDANCE_VERSION, ExtendedRouteRepresentation, RouteTime,
        },
        section_type::SectionType,
        supporting_data::{PointWaypoint, SupportingPoint, build_supporting_data},
    },
    vehicle::ChargingParametersBody,
};

pub type QueryParams = Vec<(&'static str, String)>;

pub const CALCULATE_ROUTE_ENDPOINT: &str = "calculateRoute";
pub const CALCULATE_LONG_DISTANCE_EV_ROUTE_ENDPOINT: &str = "calculateLongDistanceEVRoute";
pub const API_VERSION: &str = "1";

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRouteBody {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supporting_points: Vec<SupportingPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub point_waypoints: Vec<PointWaypoint>,
    pub charging_parameters: Option<ChargingParametersBody>,
}

/// A fully assembled wire request, ready for a transport.
#[derive(Debug, Clone)]
pub struct CalculateRouteRequest {
    pub method: Method,
    /// `{base}/{endpoint}/{locations}/json`
    pub path: String,
    pub query: QueryParams,
    pub body: Option<CalculateRouteBody>,
}

impl CalculateRouteRequest {
    pub fn url(&self) -> Result<Url, RoutingError> {
        Url::parse_with_params(&self.path, &self.query)
            .map_err(|error| RoutingError::InvalidUrl(error.to_string()))
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn query_values(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

/// Assembles the wire request. Input is expected to have been validated.
pub fn build_calculate_route_request(
    params: &CalculateRouteParams,
    client_params: &RoutingClientParams,
) -> CalculateRouteRequest {
    let kinds = classify(&params.geo_inputs);
    let long_distance_ev = params.is_long_distance_ev();

    let endpoint = if long_distance_ev {
        CALCULATE_LONG_DISTANCE_EV_ROUTE_ENDPOINT
    } else {
        CALCULATE_ROUTE_ENDPOINT
    };

    let path = format!(
        "{}/{}/{}/json",
        client_params.base_url.trim_end_matches('/'),
        endpoint,
        build_locations(&params.geo_inputs, &kinds)
    );

    let body = build_body(params, &kinds, long_distance_ev);
    let method = if body.is_some() {
        Method::POST
    } else {
        Method::GET
    };

    debug!(
        "Built {} request to {} with {} supporting points",
        method,
        endpoint,
        body.as_ref()
            .map(|body| body.supporting_points.len())
            .unwrap_or(0)
    );

    CalculateRouteRequest {
        method,
        path,
        query: build_query(params, client_params),
        body,
    }
}

/// `None` when there is nothing to POST, which selects a GET request.
fn build_body(
    params: &CalculateRouteParams,
    kinds: &[GeoInputKind],
    long_distance_ev: bool,
) -> Option<CalculateRouteBody> {
    let with_paths = has_path(kinds);

    if !with_paths && !long_distance_ev {
        return None;
    }

    let mut body = CalculateRouteBody::default();

    if with_paths {
        let supporting_data = build_supporting_data(&params.geo_inputs);
        body.supporting_points = supporting_data.supporting_points;
        body.point_waypoints = supporting_data.point_waypoints;
    }

    if long_distance_ev {
        body.charging_parameters = params
            .vehicle
            .as_ref()
            .and_then(|vehicle| vehicle.charging_parameters());
    }

    Some(body)
}

fn build_query(params: &CalculateRouteParams, client_params: &RoutingClientParams) -> QueryParams {
    let mut query: QueryParams = vec![("key", client_params.api_key.clone())];

    if let Some(language) = params
        .language
        .as_ref()
        .or(client_params.default_language.as_ref())
    {
        query.push(("language", language.clone()));
    }

    for avoidable in &params.avoid {
        query.push(("avoid", avoidable.to_string()));
    }

    if let Some(traffic) = params.traffic {
        query.push(("traffic", traffic.wire_value().to_string()));
    }

    if let Some(route_type) = params.route_type {
        query.push(("routeType", route_type.to_string()));
    }

    if let Some(travel_mode) = params.travel_mode {
        query.push(("travelMode", travel_mode.to_string()));
    }

    if let Some(vehicle) = &params.vehicle {
        vehicle.append_query(&mut query);
    }

    match params.when {
        Some(RouteTime::DepartAt(timestamp)) => query.push(("departAt", timestamp.to_string())),
        Some(RouteTime::ArriveAt(timestamp)) => query.push(("arriveAt", timestamp.to_string())),
        None => {}
    }

    if let Some(heading) = params.vehicle_heading {
        query.push(("vehicleHeading", heading.to_string()));
    }

    if let Some(guidance) = &params.guidance {
        query.push(("instructionsType", guidance.instructions_type.to_string()));
        query.push((
            "guidanceVersion",
            guidance
                .version
                .unwrap_or(DEFAULT_GUIDANCE_VERSION)
                .to_string(),
        ));
        if let Some(phonetics) = guidance.phonetics {
            query.push(("instructionPhonetics", phonetics.to_string()));
        }
        if guidance.road_shield_references {
            query.push(("instructionRoadShieldReferences", "all".to_string()));
        }
    }

    if let Some(max_alternatives) = params.max_alternatives {
        query.push(("maxAlternatives", max_alternatives.to_string()));
    }

    for section_type in
        SectionType::effective(params.section_types.as_deref(), params.guidance.is_some())
    {
        query.push(("sectionType", section_type.wire_tag().to_string()));
    }

    let representations = if params.extended_route_representations.is_empty()
        && params.guidance.is_some()
    {
        ExtendedRouteRepresentation::GUIDANCE_DEFAULTS.to_vec()
    } else {
        params.extended_route_representations.clone()
    };
    for representation in representations {
        query.push(("extendedRouteRepresentation", representation.to_string()));
    }

    query.push(("apiVersion", API_VERSION.to_string()));

    query
}

#[cfg(test)]
mod tests {
    use geo_types::LineString;

    use super::*;
    use crate::{
        geo_input::{GeoInput, Waypoint},
        request::params::{GuidanceParams, TrafficPreference, TravelMode},
        vehicle::{
            ChargingPreferences, ElectricEngine, SpeedConsumption, VehicleEngine,
            VehicleParameters,
        },
    };

    fn client_params() -> RoutingClientParams {
        RoutingClientParams::new("KEY")
    }

    fn two_waypoints() -> CalculateRouteParams {
        CalculateRouteParams::new(vec![
            Waypoint::new(4.89066, 52.37317).into(),
            Waypoint::new(4.49015, 52.16109).into(),
        ])
    }

    fn long_distance_ev_vehicle() -> VehicleParameters {
        VehicleParameters {
            engine: Some(VehicleEngine::Electric(ElectricEngine {
                speed_to_consumption: vec![SpeedConsumption {
                    speed_kmh: 100.0,
                    consumption: 18.0,
                }],
                max_charge_in_kwh: 75.0,
                charging: Some(ChargingPreferences {
                    min_charge_at_destination_in_kwh: 10.0,
                    min_charge_at_charging_stops_in_kwh: 8.0,
                    ..Default::default()
                }),
                ..Default::default()
            })),
            ..Default::default()
        }
    }

    #[test]
    fn test_two_waypoints_get_request() {
        let request = build_calculate_route_request(&two_waypoints(), &client_params());

        assert_eq!(request.method, Method::GET);
        assert!(request.body.is_none());
        assert_eq!(
            request.path,
            "https://api.tomtom.com/maps/orbis/routing/calculateRoute/52.37317,4.89066:52.16109,4.49015/json"
        );
        assert_eq!(request.query.first(), Some(&("key", "KEY".to_string())));
        assert_eq!(request.query.last(), Some(&("apiVersion", "1".to_string())));
        assert_eq!(request.query_values("sectionType").len(), 14);
        assert!(request.query_value("extendedRouteRepresentation").is_none());

        let url = request.url().unwrap();
        assert!(url.as_str().starts_with(
            "https://api.tomtom.com/maps/orbis/routing/calculateRoute/52.37317,4.89066:52.16109,4.49015/json?key=KEY&sectionType=carTrain"
        ));
        assert!(url.as_str().ends_with("&apiVersion=1"));
    }

    #[test]
    fn test_path_switches_to_post() {
        let mut params = two_waypoints();
        params.geo_inputs.insert(
            1,
            LineString::from(vec![(4.8, 52.3), (4.7, 52.25), (4.6, 52.2)]).into(),
        );

        let request = build_calculate_route_request(&params, &client_params());

        assert_eq!(request.method, Method::POST);
        let body = request.body.unwrap();
        assert_eq!(body.supporting_points.len(), 3 + 2);
        assert_eq!(
            body.point_waypoints
                .iter()
                .map(|waypoint| waypoint.supporting_point_index)
                .collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert!(body.charging_parameters.is_none());
    }

    #[test]
    fn test_long_distance_ev_endpoint_without_paths() {
        let mut params = two_waypoints();
        params.vehicle = Some(long_distance_ev_vehicle());

        let request = build_calculate_route_request(&params, &client_params());

        assert_eq!(request.method, Method::POST);
        assert!(request.path.contains("/calculateLongDistanceEVRoute/"));

        let body = serde_json::to_value(request.body.as_ref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "chargingParameters": { "batteryCurve": [], "chargingConnectors": [] }
            })
        );
        assert_eq!(request.query_value("minChargeAtDestinationInkWh"), Some("10"));
    }

    #[test]
    fn test_guidance_defaults() {
        let mut params = two_waypoints();
        params.guidance = Some(GuidanceParams::default());

        let request = build_calculate_route_request(&params, &client_params());

        assert_eq!(request.query_value("instructionsType"), Some("coded"));
        assert_eq!(request.query_value("guidanceVersion"), Some("2"));
        assert_eq!(request.query_values("sectionType").len(), 18);
        assert!(request.query_values("sectionType").contains(&"roadShields"));
        assert_eq!(
            request.query_values("extendedRouteRepresentation"),
            vec!["distance", "travelTime"]
        );
    }

    #[test]
    fn test_vehicle_restricted_is_requested_as_travel_mode() {
        let mut params = two_waypoints();
        params.section_types = Some(vec![SectionType::VehicleRestricted, SectionType::Toll]);

        let request = build_calculate_route_request(&params, &client_params());

        assert_eq!(
            request.query_values("sectionType"),
            vec!["travelMode", "tollRoad"]
        );
    }

    #[test]
    fn test_query_order() {
        let mut params = two_waypoints();
        params.language = Some("nl-NL".to_string());
        params.traffic = Some(TrafficPreference::Live);
        params.travel_mode = Some(TravelMode::Truck);
        params.when = Some(RouteTime::DepartAt(
            "2025-06-10T06:00:00Z".parse().unwrap(),
        ));
        params.vehicle_heading = Some(90.0);
        params.max_alternatives = Some(2);
        params.section_types = Some(vec![SectionType::Ferry]);

        let request = build_calculate_route_request(&params, &client_params());

        let keys: Vec<&str> = request.query.iter().map(|(key, _)| *key).collect();
        assert_eq!(
            keys,
            vec![
                "key",
                "language",
                "traffic",
                "travelMode",
                "departAt",
                "vehicleHeading",
                "maxAlternatives",
                "sectionType",
                "apiVersion"
            ]
        );
        assert_eq!(request.query_value("traffic"), Some("true"));
        assert_eq!(request.query_value("departAt"), Some("2025-06-10T06:00:00Z"));
    }

    #[test]
    fn test_default_language_from_client_params() {
        let request = build_calculate_route_request(
            &two_waypoints(),
            &client_params().with_default_language("de-DE"),
        );

        assert_eq!(request.query_value("language"), Some("de-DE"));
    }

    #[test]
    fn test_soft_waypoint_in_locations() {
        let params = CalculateRouteParams::new(vec![
            GeoInput::from(Waypoint::new(4.89066, 52.37317)),
            Waypoint::new(4.6, 52.3).with_radius(100.0).into(),
            Waypoint::new(4.49015, 52.16109).into(),
        ]);

        let request = build_calculate_route_request(&params, &client_params());

        assert!(request.body.is_none());
        assert!(
            request
                .path
                .ends_with("/52.37317,4.89066:circle(52.3,4.6,100):52.16109,4.49015/json")
        );
    }
}
