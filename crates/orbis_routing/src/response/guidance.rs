use geo_types::{Coord, LineString, Point};
use tracing::trace;

use crate::{
    model::guidance::{Guidance, Instruction, InstructionGroup},
    response::types::{ApiGuidance, ApiInstruction},
};

/// Per-axis distance, in degrees, under which a maneuver point matches a path coordinate.
pub const MANEUVER_POINT_TOLERANCE_DEGREES: f64 = 1e-4;

fn is_near(a: Coord<f64>, b: Coord<f64>) -> bool {
    (a.x - b.x).abs() <= MANEUVER_POINT_TOLERANCE_DEGREES
        && (a.y - b.y).abs() <= MANEUVER_POINT_TOLERANCE_DEGREES
}

/// Assigns a path index to each maneuver point.
///
/// Scans forward from the last match. A point with no match at or after the
/// cursor reuses the previous index and leaves the cursor where it was.
pub fn match_path_point_indices(maneuver_points: &[Coord<f64>], path: &[Coord<f64>]) -> Vec<usize> {
    let mut cursor = 0;
    let mut previous = 0;

    maneuver_points
        .iter()
        .map(|point| {
            let found = path
                .get(cursor..)
                .and_then(|rest| rest.iter().position(|coord| is_near(*coord, *point)));

            match found {
                Some(offset) => {
                    cursor += offset;
                    previous = cursor;
                }
                None => trace!(
                    x = point.x,
                    y = point.y,
                    previous,
                    "No path point for maneuver, reusing previous index"
                ),
            }

            previous
        })
        .collect()
}

pub fn parse_guidance(guidance: &ApiGuidance, geometry: &LineString<f64>) -> Guidance {
    let maneuver_points: Vec<Coord<f64>> = guidance
        .instructions
        .iter()
        .map(|instruction| instruction.maneuver_point.into())
        .collect();

    let indices = match_path_point_indices(&maneuver_points, &geometry.0);

    Guidance {
        instructions: guidance
            .instructions
            .iter()
            .zip(indices)
            .map(|(instruction, path_point_index)| parse_instruction(instruction, path_point_index))
            .collect(),
        instruction_groups: guidance
            .instruction_groups
            .iter()
            .map(|group| InstructionGroup {
                first_instruction_index: group.first_instruction_index,
                last_instruction_index: group.last_instruction_index,
                group_length_in_meters: group.group_length_in_meters,
                group_message: group.group_message.clone(),
            })
            .collect(),
    }
}

fn parse_instruction(instruction: &ApiInstruction, path_point_index: usize) -> Instruction {
    Instruction {
        maneuver: instruction.maneuver.clone(),
        maneuver_point: Point::new(
            instruction.maneuver_point.longitude,
            instruction.maneuver_point.latitude,
        ),
        path_point_index,
        route_offset_in_meters: instruction.route_offset_in_meters,
        travel_time_in_seconds: instruction.travel_time_in_seconds,
        driving_side: instruction.driving_side.clone(),
        street: instruction.street.clone(),
        road_numbers: instruction.road_numbers.clone(),
        country_code: instruction.country_code.clone(),
        signpost_text: instruction.signpost_text.clone(),
        exit_number: instruction.exit_number.clone(),
        roundabout_exit_number: instruction.roundabout_exit_number,
        turn_angle_in_decimal_degrees: instruction.turn_angle_in_decimal_degrees,
        junction_type: instruction.junction_type.clone(),
        message: instruction.message.clone(),
        combined_message: instruction.combined_message.clone(),
    }
}
