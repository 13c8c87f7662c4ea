//! Wire shapes of a calculate-route response.

use geo_types::Coord;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCalculateRouteResponse {
    pub format_version: Option<String>,
    #[serde(default)]
    pub routes: Vec<ApiRoute>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRoute {
    pub summary: ApiSummary,
    #[serde(default)]
    pub legs: Vec<ApiLeg>,
    #[serde(default)]
    pub sections: Vec<ApiSection>,
    pub guidance: Option<ApiGuidance>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLeg {
    pub summary: ApiSummary,
    #[serde(default)]
    pub points: Vec<ApiLatLng>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ApiLatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<ApiLatLng> for Coord<f64> {
    fn from(value: ApiLatLng) -> Self {
        Coord {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSummary {
    pub length_in_meters: u64,
    pub travel_time_in_seconds: u64,
    #[serde(default)]
    pub traffic_delay_in_seconds: u64,
    #[serde(default)]
    pub traffic_length_in_meters: u64,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub no_traffic_travel_time_in_seconds: Option<u64>,
    pub historic_traffic_travel_time_in_seconds: Option<u64>,
    pub live_traffic_incidents_travel_time_in_seconds: Option<u64>,
    pub fuel_consumption_in_liters: Option<f64>,
    #[serde(rename = "batteryConsumptionInkWh")]
    pub battery_consumption_in_kwh: Option<f64>,
    #[serde(rename = "remainingChargeAtArrivalInkWh")]
    pub remaining_charge_at_arrival_in_kwh: Option<f64>,
    pub total_charging_time_in_seconds: Option<u64>,
    pub charging_information_at_end_of_leg: Option<ApiChargingStop>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiChargingStop {
    pub charging_park_id: Option<String>,
    pub charging_park_uuid: Option<String>,
    pub charging_park_external_id: Option<String>,
    pub charging_park_name: Option<String>,
    pub charging_park_operator_name: Option<String>,
    pub charging_park_location: Option<ApiChargingParkLocation>,
    #[serde(rename = "chargingParkPowerInkW")]
    pub charging_park_power_in_kw: Option<f64>,
    #[serde(default)]
    pub charging_park_payment_options: Vec<ApiPaymentOption>,
    #[serde(default)]
    pub charging_connections: Vec<ApiChargingConnection>,
    pub charging_time_in_seconds: Option<u64>,
    #[serde(rename = "targetChargeInkWh")]
    pub target_charge_in_kwh: Option<f64>,
    pub charging_stop_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiChargingParkLocation {
    pub coordinate: Option<ApiLatLng>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPaymentOption {
    pub method: String,
    #[serde(default)]
    pub brands: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiChargingConnection {
    pub facility_type: Option<String>,
    pub plug_type: Option<String>,
    #[serde(rename = "chargingPowerInkW")]
    pub charging_power_in_kw: Option<f64>,
    #[serde(rename = "chargingCurrentInA")]
    pub charging_current_in_a: Option<f64>,
    #[serde(rename = "chargingVoltageInV")]
    pub charging_voltage_in_v: Option<f64>,
    pub charging_current_type: Option<String>,
}

/// A response section, keyed by its `sectionType` tag. Tags this client does not
/// know deserialize to `Unknown` so new server-side kinds never fail a response.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "sectionType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiSection {
    CarTrain(ApiSectionRange),
    Country(ApiCountrySection),
    Ferry(ApiSectionRange),
    Motorway(ApiSectionRange),
    Pedestrian(ApiSectionRange),
    TollRoad(ApiSectionRange),
    TollVignette(ApiCountrySection),
    Traffic(ApiTrafficSection),
    TravelMode(ApiTravelModeSection),
    Tunnel(ApiSectionRange),
    Carpool(ApiSectionRange),
    Urban(ApiSectionRange),
    Unpaved(ApiSectionRange),
    LowEmissionZone(ApiSectionRange),
    Lanes(ApiLanesSection),
    SpeedLimit(ApiSpeedLimitSection),
    RoadShields(ApiRoadShieldsSection),
    ImportantRoadStretch(ApiImportantRoadStretchSection),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSectionRange {
    pub start_point_index: usize,
    pub end_point_index: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCountrySection {
    #[serde(flatten)]
    pub range: ApiSectionRange,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTrafficSection {
    #[serde(flatten)]
    pub range: ApiSectionRange,
    pub simple_category: Option<String>,
    pub effective_speed_in_kmh: Option<f64>,
    pub delay_in_seconds: Option<u64>,
    pub magnitude_of_delay: Option<u8>,
    pub event_id: Option<String>,
    pub tec: Option<ApiTec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTec {
    pub effect_code: Option<u32>,
    #[serde(default)]
    pub causes: Vec<ApiTecCause>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTecCause {
    pub main_cause_code: u32,
    pub sub_cause_code: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTravelModeSection {
    #[serde(flatten)]
    pub range: ApiSectionRange,
    pub travel_mode: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLanesSection {
    #[serde(flatten)]
    pub range: ApiSectionRange,
    #[serde(default)]
    pub lanes: Vec<ApiLane>,
    #[serde(default)]
    pub lane_separators: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiLane {
    #[serde(default)]
    pub directions: Vec<String>,
    pub follow: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpeedLimitSection {
    #[serde(flatten)]
    pub range: ApiSectionRange,
    pub max_speed_limit_in_kmh: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRoadShieldsSection {
    #[serde(flatten)]
    pub range: ApiSectionRange,
    #[serde(default)]
    pub road_shield_references: Vec<ApiRoadShieldReference>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRoadShieldReference {
    pub reference: String,
    pub shield_content: Option<String>,
    #[serde(default)]
    pub affixes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiImportantRoadStretchSection {
    #[serde(flatten)]
    pub range: ApiSectionRange,
    pub important_road_stretch_index: u32,
    pub street_name: Option<ApiText>,
    #[serde(default)]
    pub road_numbers: Vec<ApiText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiText {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGuidance {
    #[serde(default)]
    pub instructions: Vec<ApiInstruction>,
    #[serde(default)]
    pub instruction_groups: Vec<ApiInstructionGroup>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInstruction {
    #[serde(alias = "point")]
    pub maneuver_point: ApiLatLng,
    pub maneuver: Option<String>,
    #[serde(default)]
    pub route_offset_in_meters: u64,
    #[serde(default)]
    pub travel_time_in_seconds: u64,
    pub driving_side: Option<String>,
    pub street: Option<String>,
    #[serde(default)]
    pub road_numbers: Vec<String>,
    pub country_code: Option<String>,
    pub signpost_text: Option<String>,
    pub exit_number: Option<String>,
    pub roundabout_exit_number: Option<u32>,
    pub turn_angle_in_decimal_degrees: Option<f64>,
    pub junction_type: Option<String>,
    pub message: Option<String>,
    pub combined_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInstructionGroup {
    pub first_instruction_index: usize,
    pub last_instruction_index: usize,
    #[serde(default)]
    pub group_length_in_meters: u64,
    pub group_message: Option<String>,
}
