use std::fmt::Display;

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{geo_input::GeoInput, request::section_type::SectionType, vehicle::VehicleParameters};

/// Everything a caller supplies for one calculate-route call.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[schemars(rename = "CalculateRouteParams")]
pub struct CalculateRouteParams {
    pub geo_inputs: Vec<GeoInput>,
    /// IETF language tag for guidance messages, e.g. `en-GB`.
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid: Vec<Avoidable>,
    pub traffic: Option<TrafficPreference>,
    pub route_type: Option<RouteType>,
    pub travel_mode: Option<TravelMode>,
    pub vehicle: Option<VehicleParameters>,
    pub when: Option<RouteTime>,
    /// Initial heading in degrees, clockwise from north.
    pub vehicle_heading: Option<f64>,
    pub guidance: Option<GuidanceParams>,
    pub max_alternatives: Option<u8>,
    pub section_types: Option<Vec<SectionType>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extended_route_representations: Vec<ExtendedRouteRepresentation>,
}

impl CalculateRouteParams {
    pub fn new(geo_inputs: Vec<GeoInput>) -> Self {
        Self {
            geo_inputs,
            ..Default::default()
        }
    }

    pub fn battery_capacity_in_kwh(&self) -> Option<f64> {
        self.vehicle
            .as_ref()
            .and_then(VehicleParameters::battery_capacity_in_kwh)
    }

    pub fn is_long_distance_ev(&self) -> bool {
        self.vehicle
            .as_ref()
            .is_some_and(VehicleParameters::is_long_distance_ev)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Avoidable {
    AlreadyUsedRoads,
    BorderCrossings,
    Carpools,
    Ferries,
    LowEmissionZones,
    Motorways,
    TollRoads,
    Tunnels,
    UnpavedRoads,
}

impl Display for Avoidable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Avoidable::AlreadyUsedRoads => "alreadyUsedRoads",
                Avoidable::BorderCrossings => "borderCrossings",
                Avoidable::Carpools => "carpools",
                Avoidable::Ferries => "ferries",
                Avoidable::LowEmissionZones => "lowEmissionZones",
                Avoidable::Motorways => "motorways",
                Avoidable::TollRoads => "tollRoads",
                Avoidable::Tunnels => "tunnels",
                Avoidable::UnpavedRoads => "unpavedRoads",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum TrafficPreference {
    /// Live and historical traffic.
    Live,
    /// Historical speeds only.
    Historical,
}

impl TrafficPreference {
    pub fn wire_value(self) -> &'static str {
        match self {
            TrafficPreference::Live => "true",
            TrafficPreference::Historical => "false",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RouteType {
    Fastest,
    Shortest,
    Efficient,
    Thrilling,
}

impl Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RouteType::Fastest => "fastest",
                RouteType::Shortest => "shortest",
                RouteType::Efficient => "efficient",
                RouteType::Thrilling => "thrilling",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum TravelMode {
    Car,
    Truck,
    Taxi,
    Bus,
    Van,
    Motorcycle,
    Bicycle,
    Pedestrian,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Car => "car",
                TravelMode::Truck => "truck",
                TravelMode::Taxi => "taxi",
                TravelMode::Bus => "bus",
                TravelMode::Van => "van",
                TravelMode::Motorcycle => "motorcycle",
                TravelMode::Bicycle => "bicycle",
                TravelMode::Pedestrian => "pedestrian",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RouteTime {
    DepartAt(Timestamp),
    ArriveAt(Timestamp),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceParams {
    #[serde(default, rename = "type")]
    pub instructions_type: InstructionsType,
    /// Defaults to 2.
    pub version: Option<u8>,
    pub phonetics: Option<InstructionPhonetics>,
    #[serde(default)]
    pub road_shield_references: bool,
}

pub const DEFAULT_GUIDANCE_VERSION: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum InstructionsType {
    #[default]
    Coded,
    Text,
    Tagged,
}

impl Display for InstructionsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InstructionsType::Coded => "coded",
                InstructionsType::Text => "text",
                InstructionsType::Tagged => "tagged",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum InstructionPhonetics {
    #[serde(rename = "IPA")]
    Ipa,
    #[serde(rename = "LHP")]
    Lhp,
}

impl Display for InstructionPhonetics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InstructionPhonetics::Ipa => "IPA",
                InstructionPhonetics::Lhp => "LHP",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedRouteRepresentation {
    Distance,
    TravelTime,
}

impl ExtendedRouteRepresentation {
    pub const GUIDANCE_DEFAULTS: [ExtendedRouteRepresentation; 2] = [
        ExtendedRouteRepresentation::Distance,
        ExtendedRouteRepresentation::TravelTime,
    ];
}

impl Display for ExtendedRouteRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ExtendedRouteRepresentation::Distance => "distance",
                ExtendedRouteRepresentation::TravelTime => "travelTime",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_params() {
        let json = serde_json::json!({
            "geoInputs": [
                { "waypoint": { "position": [4.89066, 52.37317] } },
                { "waypoint": { "position": [4.49015, 52.16109] } }
            ],
            "avoid": ["tollRoads", "ferries"],
            "traffic": "historical",
            "when": { "departAt": "2025-06-10T08:00:00+02:00" },
            "guidance": { "type": "tagged", "phonetics": "IPA" },
            "sectionTypes": ["vehicleRestricted", "toll"]
        });

        let params: CalculateRouteParams = serde_json::from_value(json).unwrap();

        assert_eq!(params.geo_inputs.len(), 2);
        assert_eq!(params.avoid, vec![Avoidable::TollRoads, Avoidable::Ferries]);
        assert_eq!(params.traffic, Some(TrafficPreference::Historical));
        assert_eq!(
            params.when,
            Some(RouteTime::DepartAt(
                "2025-06-10T06:00:00Z".parse().unwrap()
            ))
        );

        let guidance = params.guidance.unwrap();
        assert_eq!(guidance.instructions_type, InstructionsType::Tagged);
        assert_eq!(guidance.phonetics, Some(InstructionPhonetics::Ipa));
        assert_eq!(
            params.section_types,
            Some(vec![SectionType::VehicleRestricted, SectionType::Toll])
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let json = serde_json::json!({ "geoInputs": [], "maxAlternative": 2 });

        assert!(serde_json::from_value::<CalculateRouteParams>(json).is_err());
    }
}
