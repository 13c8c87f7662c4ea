use geo_types::{Coord, LineString, Point};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{lng_lat, model::route::Route};

/// A caller-supplied stop or path. The order of a geo-input list is the travel order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum GeoInput {
    Waypoint(Waypoint),
    Path(PathInput),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    /// `[lon, lat]`
    #[serde(with = "lng_lat::point")]
    #[schemars(with = "[f64; 2]")]
    pub position: Point<f64>,

    /// Makes the waypoint soft: the route may pass anywhere within this radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_meters: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PathInput {
    #[serde(with = "lng_lat::line_string")]
    #[schemars(with = "Vec<[f64; 2]>")]
    Coordinates(LineString<f64>),

    /// A route returned by an earlier call, sent back for reconstruction or embedding.
    #[schemars(with = "serde_json::Value")]
    Route(Box<Route>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoInputKind {
    Waypoint,
    Path,
}

impl Waypoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            position: Point::new(lon, lat),
            radius_meters: None,
        }
    }

    pub fn with_radius(mut self, radius_meters: f64) -> Self {
        self.radius_meters = Some(radius_meters);
        self
    }
}

impl PathInput {
    pub fn line_string(&self) -> &LineString<f64> {
        match self {
            PathInput::Coordinates(line) => line,
            PathInput::Route(route) => &route.geometry,
        }
    }

    /// Start indices of the legs making up this path. A raw coordinate path, or a
    /// route without leg sections, is a single leg starting at 0.
    pub fn leg_starts(&self) -> Vec<usize> {
        match self {
            PathInput::Route(route) if !route.properties.sections.leg.is_empty() => route
                .properties
                .sections
                .leg
                .iter()
                .map(|leg| leg.props.start_point_index)
                .collect(),
            _ => vec![0],
        }
    }
}

impl GeoInput {
    pub fn kind(&self) -> GeoInputKind {
        match self {
            GeoInput::Waypoint(_) => GeoInputKind::Waypoint,
            GeoInput::Path(_) => GeoInputKind::Path,
        }
    }

    pub fn first_coord(&self) -> Option<Coord<f64>> {
        match self {
            GeoInput::Waypoint(waypoint) => Some(waypoint.position.0),
            GeoInput::Path(path) => path.line_string().0.first().copied(),
        }
    }

    pub fn last_coord(&self) -> Option<Coord<f64>> {
        match self {
            GeoInput::Waypoint(waypoint) => Some(waypoint.position.0),
            GeoInput::Path(path) => path.line_string().0.last().copied(),
        }
    }
}

impl From<Waypoint> for GeoInput {
    fn from(value: Waypoint) -> Self {
        GeoInput::Waypoint(value)
    }
}

impl From<LineString<f64>> for GeoInput {
    fn from(value: LineString<f64>) -> Self {
        GeoInput::Path(PathInput::Coordinates(value))
    }
}

impl From<Route> for GeoInput {
    fn from(value: Route) -> Self {
        GeoInput::Path(PathInput::Route(Box::new(value)))
    }
}

pub fn classify(geo_inputs: &[GeoInput]) -> Vec<GeoInputKind> {
    geo_inputs.iter().map(GeoInput::kind).collect()
}

pub fn has_path(kinds: &[GeoInputKind]) -> bool {
    kinds.contains(&GeoInputKind::Path)
}
