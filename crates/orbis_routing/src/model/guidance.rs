use geo_types::Point;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::lng_lat;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidance {
    pub instructions: Vec<Instruction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instruction_groups: Vec<InstructionGroup>,
}

/// A maneuver, correlated to the route geometry through `path_point_index`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub maneuver: Option<String>,
    #[serde(with = "lng_lat::point")]
    pub maneuver_point: Point<f64>,
    pub path_point_index: usize,
    pub route_offset_in_meters: u64,
    pub travel_time_in_seconds: u64,
    pub driving_side: Option<String>,
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
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

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionGroup {
    pub first_instruction_index: usize,
    pub last_instruction_index: usize,
    pub group_length_in_meters: u64,
    pub group_message: Option<String>,
}
