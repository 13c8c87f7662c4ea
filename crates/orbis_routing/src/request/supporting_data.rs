use geo_types::Coord;
use serde::Serialize;

use crate::geo_input::{GeoInput, PathInput};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupportingPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coord<f64>> for SupportingPoint {
    fn from(coord: Coord<f64>) -> Self {
        SupportingPoint {
            latitude: coord.y,
            longitude: coord.x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaypointSourceType {
    UserDefined,
}

/// Marks an interior stop inside the supporting points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointWaypoint {
    pub supporting_point_index: usize,
    pub waypoint_source_type: WaypointSourceType,
}

impl PointWaypoint {
    pub fn user_defined(supporting_point_index: usize) -> Self {
        Self {
            supporting_point_index,
            waypoint_source_type: WaypointSourceType::UserDefined,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupportingData {
    pub supporting_points: Vec<SupportingPoint>,
    pub point_waypoints: Vec<PointWaypoint>,
}

/// Running state of the left-to-right scan over geo-inputs. `cursor` is where the
/// next geo-input's coordinates start in `points`.
#[derive(Default)]
struct Accumulator {
    points: Vec<SupportingPoint>,
    waypoints: Vec<PointWaypoint>,
    cursor: usize,
}

impl Accumulator {
    fn push(mut self, index: usize, last_index: usize, input: &GeoInput) -> Self {
        let offset = self.cursor;

        match input {
            GeoInput::Waypoint(waypoint) => {
                self.points.push(waypoint.position.0.into());

                if index != 0 && index != last_index {
                    self.waypoints.push(PointWaypoint::user_defined(offset));
                }
            }
            GeoInput::Path(path) => {
                let line = path.line_string();
                self.points
                    .extend(line.coords().copied().map(SupportingPoint::from));

                self.waypoints.extend(
                    path_boundaries(index, last_index, path)
                        .into_iter()
                        .map(|boundary| PointWaypoint::user_defined(offset + boundary)),
                );
            }
        }

        self.cursor = self.points.len();
        self
    }
}

impl From<Accumulator> for SupportingData {
    fn from(acc: Accumulator) -> Self {
        SupportingData {
            supporting_points: acc.points,
            point_waypoints: acc.waypoints,
        }
    }
}

fn path_boundaries(index: usize, last_index: usize, path: &PathInput) -> Vec<usize> {
    leg_boundaries(
        index,
        last_index,
        &path.leg_starts(),
        path.line_string().0.len(),
    )
}

/// Positions, relative to the path's own coordinates, that need a point-waypoint.
///
/// Every leg start is a boundary, except the first leg of the first geo-input
/// which is the overall origin. The path's final coordinate is a boundary unless
/// the path is the last geo-input, where it is the overall destination.
pub fn leg_boundaries(
    index: usize,
    last_index: usize,
    leg_starts: &[usize],
    path_len: usize,
) -> Vec<usize> {
    if path_len == 0 {
        return vec![];
    }

    let mut boundaries: Vec<usize> = leg_starts
        .iter()
        .enumerate()
        .filter(|(leg_index, _)| !(index == 0 && *leg_index == 0))
        .map(|(_, start)| *start)
        .filter(|start| *start < path_len)
        .collect();

    if index != last_index {
        boundaries.push(path_len - 1);
    }

    boundaries
}

/// Expands geo-inputs into the flat supporting-point list and the interior stop markers.
pub fn build_supporting_data(geo_inputs: &[GeoInput]) -> SupportingData {
    let last_index = geo_inputs.len().saturating_sub(1);

    geo_inputs
        .iter()
        .enumerate()
        .fold(Accumulator::default(), |acc, (index, input)| {
            acc.push(index, last_index, input)
        })
        .into()
}
