use geo_types::LineString;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    lng_lat,
    model::{bbox::BBox, guidance::Guidance, section::Sections, summary::Summary},
};

/// A route parsed from one entry of a calculate-route response.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    /// Position of the route in the response.
    pub index: usize,
    #[serde(with = "lng_lat::line_string")]
    pub geometry: LineString<f64>,
    pub bbox: Option<BBox>,
    pub properties: RouteProperties,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteProperties {
    pub summary: Summary,
    pub sections: Sections,
    pub guidance: Option<Guidance>,
}

impl Route {
    pub fn leg_count(&self) -> usize {
        self.properties.sections.leg.len()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routes {
    pub routes: Vec<Route>,
    pub bbox: Option<BBox>,
}

impl Routes {
    pub fn new(routes: Vec<Route>) -> Self {
        let bbox = BBox::union(routes.iter().filter_map(|route| route.bbox.as_ref()));
        Self { routes, bbox }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn first(&self) -> Option<&Route> {
        self.routes.first()
    }
}

impl IntoIterator for Routes {
    type Item = Route;
    type IntoIter = std::vec::IntoIter<Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}
