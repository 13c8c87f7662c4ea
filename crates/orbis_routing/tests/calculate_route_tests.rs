use std::{cell::RefCell, sync::Mutex};

use geo_types::LineString;
use orbis_routing::{
    CalculateRouteParams, CalculateRouteRequest, CallObserver, GeoInput, OrbisRoutingClient,
    Route, RouteTransport, RoutingClientParams, RoutingError, TransportResponse, Waypoint,
    model::{summary::ChargingSpeed, traffic::{MagnitudeOfDelay, TrafficCategory}},
    request::params::GuidanceParams,
    validation::IssueCode,
    vehicle::{
        BatteryCurvePoint, ChargeLevel, ChargingConnectorSpec, ChargingPreferences, CurrentType,
        ElectricEngine, SpeedConsumption, VehicleEngine, VehicleParameters,
    },
};
use reqwest::Method;

const TWO_LEG_ROUTE: &str = include_str!("fixtures/two_leg_route.json");
const LONG_DISTANCE_EV_ROUTE: &str = include_str!("fixtures/long_distance_ev_route.json");

struct MockTransport {
    status: u16,
    body: String,
    requests: Mutex<Vec<CalculateRouteRequest>>,
}

impl MockTransport {
    fn ok(body: &str) -> Self {
        Self::with_status(200, body)
    }

    fn with_status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(vec![]),
        }
    }

    fn sent(&self) -> Vec<CalculateRouteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl RouteTransport for &MockTransport {
    async fn send(
        &self,
        request: &CalculateRouteRequest,
    ) -> Result<TransportResponse, RoutingError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

#[derive(Default)]
struct RecordingObserver {
    paths: RefCell<Vec<String>>,
    statuses: RefCell<Vec<u16>>,
}

impl CallObserver for RecordingObserver {
    fn on_request(&self, request: &CalculateRouteRequest) {
        self.paths.borrow_mut().push(request.path.clone());
    }

    fn on_response(&self, response: &TransportResponse) {
        self.statuses.borrow_mut().push(response.status);
    }
}

fn client(transport: &MockTransport) -> OrbisRoutingClient<&MockTransport> {
    OrbisRoutingClient::with_transport(RoutingClientParams::new("KEY"), transport)
}

fn amsterdam_leiden() -> CalculateRouteParams {
    CalculateRouteParams::new(vec![
        Waypoint::new(4.89066, 52.37317).into(),
        Waypoint::new(4.70002, 52.30001).into(),
        Waypoint::new(4.49015, 52.16109).into(),
    ])
}

async fn two_leg_route() -> Route {
    let transport = MockTransport::ok(TWO_LEG_ROUTE);
    let routes = client(&transport)
        .calculate_route(&amsterdam_leiden())
        .await
        .unwrap();
    routes.into_iter().next().unwrap()
}

fn electric_vehicle() -> VehicleParameters {
    VehicleParameters {
        engine: Some(VehicleEngine::Electric(ElectricEngine {
            speed_to_consumption: vec![
                SpeedConsumption {
                    speed_kmh: 50.0,
                    consumption: 8.2,
                },
                SpeedConsumption {
                    speed_kmh: 130.0,
                    consumption: 21.3,
                },
            ],
            auxiliary_power_in_kw: Some(1.7),
            current_charge: Some(ChargeLevel::InPercent(75.0)),
            max_charge_in_kwh: 80.0,
            charging: Some(ChargingPreferences {
                min_charge_at_destination_in_kwh: 10.0,
                min_charge_at_charging_stops_in_kwh: 8.0,
                battery_curve: vec![
                    BatteryCurvePoint {
                        state_of_charge_in_kwh: 40.0,
                        max_power_in_kw: 150.0,
                    },
                    BatteryCurvePoint {
                        state_of_charge_in_kwh: 72.0,
                        max_power_in_kw: 50.0,
                    },
                ],
                charging_connectors: vec![ChargingConnectorSpec {
                    current_type: CurrentType::Dc,
                    plug_types: vec!["IEC_62196_Type_2_Connector_Cable_Attached".to_string()],
                    efficiency: Some(0.9),
                    base_load_in_kw: None,
                    max_power_in_kw: Some(150.0),
                }],
                charging_time_offset_in_sec: Some(60),
            }),
        })),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_parses_two_leg_route() {
    let transport = MockTransport::ok(TWO_LEG_ROUTE);
    let mut params = amsterdam_leiden();
    params.guidance = Some(GuidanceParams::default());

    let routes = client(&transport).calculate_route(&params).await.unwrap();

    assert_eq!(routes.len(), 1);
    let route = routes.first().unwrap();
    assert_eq!(route.geometry.0.len(), 7);
    assert_eq!(route.leg_count(), 2);

    let sections = &route.properties.sections;
    let leg_ranges: Vec<(usize, usize)> = sections
        .leg
        .iter()
        .map(|leg| (leg.props.start_point_index, leg.props.end_point_index))
        .collect();
    assert_eq!(leg_ranges, vec![(0, 3), (4, 6)]);
    assert_eq!(sections.leg[0].summary.traffic_delay_in_seconds, 215);

    assert_eq!(sections.country[0].country_code_iso3.as_deref(), Some("NLD"));
    assert_eq!(sections.motorway.len(), 1);
    assert_eq!(sections.toll.len(), 1);
    assert_eq!(sections.speed_limit[0].max_speed_limit_in_kmh, 100.0);
    assert!(sections.ferry.is_empty());

    assert_eq!(sections.vehicle_restricted.len(), 1);
    assert_eq!(sections.vehicle_restricted[0].start_point_index, 4);

    assert_eq!(sections.traffic[0].categories, vec![TrafficCategory::Jam]);
    assert_eq!(sections.traffic[0].magnitude_of_delay, MagnitudeOfDelay::Minor);

    let guidance = route.properties.guidance.as_ref().unwrap();
    let indices: Vec<usize> = guidance
        .instructions
        .iter()
        .map(|instruction| instruction.path_point_index)
        .collect();
    assert_eq!(indices, vec![0, 2, 3, 3, 6]);
    assert_eq!(guidance.instruction_groups.len(), 2);

    let bbox = route.bbox.unwrap();
    assert_eq!((bbox.west(), bbox.north()), (4.49015, 52.37317));
    assert_eq!(routes.bbox, route.bbox);

    let summary = &route.properties.summary;
    assert_eq!(summary.length_in_meters, 41230);
    assert_eq!(
        summary.arrival_time,
        Some("2025-06-10T06:38:30Z".parse().unwrap())
    );
    assert!(summary.battery_consumption_in_pct.is_none());
}

#[tokio::test]
async fn test_waypoints_only_sends_get_without_body() {
    let transport = MockTransport::ok(TWO_LEG_ROUTE);

    client(&transport)
        .calculate_route(&amsterdam_leiden())
        .await
        .unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::GET);
    assert!(sent[0].body.is_none());
    assert!(sent[0].path.ends_with(
        "/calculateRoute/52.37317,4.89066:52.30001,4.70002:52.16109,4.49015/json"
    ));
}

#[tokio::test]
async fn test_observer_sees_wire_exchange() {
    let transport = MockTransport::ok(TWO_LEG_ROUTE);
    let observer = RecordingObserver::default();

    client(&transport)
        .calculate_route_observed(&amsterdam_leiden(), &observer)
        .await
        .unwrap();

    assert_eq!(observer.paths.borrow().len(), 1);
    assert_eq!(*observer.statuses.borrow(), vec![200]);
}

#[tokio::test]
async fn test_invalid_params_are_never_sent() {
    let transport = MockTransport::ok(TWO_LEG_ROUTE);
    let params = CalculateRouteParams::new(vec![Waypoint::new(4.89066, 95.0).into()]);

    let error = client(&transport).calculate_route(&params).await.unwrap_err();

    let RoutingError::Validation(issues) = error else {
        panic!("expected a validation error, got {error:?}");
    };
    let codes: Vec<IssueCode> = issues.iter().map(|issue| issue.code).collect();
    assert_eq!(codes, vec![IssueCode::TooBig, IssueCode::Custom]);
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_api_error_is_parsed() {
    let transport = MockTransport::with_status(
        400,
        r#"{"detailedError":{"code":"INVALID_REQUEST","message":"Invalid value for sectionType"}}"#,
    );

    let error = client(&transport)
        .calculate_route(&amsterdam_leiden())
        .await
        .unwrap_err();

    match error {
        RoutingError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code.as_deref(), Some("INVALID_REQUEST"));
            assert_eq!(message, "Invalid value for sectionType");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_deserialize_error() {
    let transport = MockTransport::ok("{\"routes\": 3}");

    let error = client(&transport)
        .calculate_route(&amsterdam_leiden())
        .await
        .unwrap_err();

    assert!(matches!(error, RoutingError::Deserialize(_)));
}

#[tokio::test]
async fn test_reconstruct_route() {
    let route = two_leg_route().await;
    let transport = MockTransport::ok(TWO_LEG_ROUTE);
    let params = CalculateRouteParams::new(vec![GeoInput::from(route.clone())]);

    let request = client(&transport).build_request(&params).unwrap();

    assert_eq!(request.method, Method::POST);
    assert!(request.path.ends_with(
        "/calculateRoute/52.37317,4.89066:52.16109,4.49015/json"
    ));

    let body = request.body.unwrap();
    assert_eq!(body.supporting_points.len(), route.geometry.0.len());
    assert_eq!(body.point_waypoints.len(), route.leg_count() - 1);
    assert_eq!(body.point_waypoints[0].supporting_point_index, 4);

    let reconstructed = client(&transport)
        .calculate_route(&params)
        .await
        .unwrap()
        .into_iter()
        .next()
        .unwrap();
    assert_eq!(reconstructed.geometry.0.first(), route.geometry.0.first());
    assert_eq!(reconstructed.geometry.0.last(), route.geometry.0.last());
    assert!(reconstructed.geometry.0.len().abs_diff(route.geometry.0.len()) <= 50);
}

#[tokio::test]
async fn test_embed_route_between_waypoints() {
    let route = two_leg_route().await;
    let transport = MockTransport::ok(TWO_LEG_ROUTE);
    let params = CalculateRouteParams::new(vec![
        Waypoint::new(4.95, 52.40).into(),
        route.clone().into(),
        Waypoint::new(4.40, 52.10).into(),
    ]);

    let request = client(&transport).build_request(&params).unwrap();

    assert!(request.path.ends_with("/calculateRoute/52.4,4.95:52.1,4.4/json"));

    let body = request.body.unwrap();
    assert_eq!(body.supporting_points.len(), route.geometry.0.len() + 2);
    // One stop per embedded leg start plus its end: the service answers with two more legs.
    assert_eq!(body.point_waypoints.len(), route.leg_count() + 1);
    assert_eq!(
        body.point_waypoints
            .iter()
            .map(|waypoint| waypoint.supporting_point_index)
            .collect::<Vec<_>>(),
        vec![1, 5, 7]
    );
    assert!(
        body.point_waypoints
            .iter()
            .all(|waypoint| waypoint.supporting_point_index < body.supporting_points.len())
    );
}

#[tokio::test]
async fn test_raw_path_between_waypoints() {
    let transport = MockTransport::ok(TWO_LEG_ROUTE);
    let params = CalculateRouteParams::new(vec![
        Waypoint::new(4.89066, 52.37317).into(),
        LineString::from(vec![(4.84101, 52.35012), (4.76218, 52.32554), (4.70002, 52.30001)]).into(),
        Waypoint::new(4.49015, 52.16109).into(),
    ]);

    let request = client(&transport).build_request(&params).unwrap();

    let body = serde_json::to_value(request.body.unwrap()).unwrap();
    assert_eq!(body["supportingPoints"].as_array().unwrap().len(), 5);
    assert_eq!(
        body["pointWaypoints"],
        serde_json::json!([
            { "supportingPointIndex": 1, "waypointSourceType": "USER_DEFINED" },
            { "supportingPointIndex": 3, "waypointSourceType": "USER_DEFINED" }
        ])
    );
}

#[tokio::test]
async fn test_long_distance_ev_route() {
    let transport = MockTransport::ok(LONG_DISTANCE_EV_ROUTE);
    let mut params = CalculateRouteParams::new(vec![
        Waypoint::new(4.89066, 52.37317).into(),
        Waypoint::new(4.34878, 50.85045).into(),
    ]);
    params.vehicle = Some(electric_vehicle());

    let routes = client(&transport).calculate_route(&params).await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::POST);
    assert!(sent[0].path.contains("/calculateLongDistanceEVRoute/"));
    assert_eq!(sent[0].query_value("currentChargeInkWh"), Some("60"));
    let body = serde_json::to_value(sent[0].body.as_ref().unwrap()).unwrap();
    assert_eq!(body["chargingParameters"]["chargingTimeOffsetInSec"], 60);
    assert!(body.get("supportingPoints").is_none());

    let route = routes.first().unwrap();
    let summary = &route.properties.summary;
    assert_eq!(summary.battery_consumption_in_pct, Some(60.625));
    assert_eq!(summary.remaining_charge_at_arrival_in_pct, Some(25.0));

    let first_leg = &route.properties.sections.leg[0].summary;
    assert_eq!(first_leg.battery_consumption_in_pct, Some(37.5));
    let stop = first_leg.charging_stop.as_ref().unwrap();
    assert_eq!(stop.charging_speed, Some(ChargingSpeed::Fast));
    assert_eq!(stop.target_charge_in_pct, Some(60.0));
    assert_eq!(stop.connectors.len(), 1);
    assert_eq!(stop.payment_options[0].brands, vec!["Fastned"]);
    assert_eq!(
        stop.address.as_ref().unwrap().freeform_address,
        "Rijksweg 12, 4817 AB Breda, Netherlands"
    );

    assert!(route.properties.sections.leg[1].summary.charging_stop.is_none());
    assert_eq!(route.properties.sections.country.len(), 2);
}
