use geo::BoundingRect;
use geo_types::{Coord, LineString};
use serde::{Deserialize, Serialize};

/// Bounds in degrees, serialized as `[west, south, east, north]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBox {
    min: Coord<f64>,
    max: Coord<f64>,
}

impl BBox {
    /// `None` for an empty geometry.
    pub fn from_line_string(line: &LineString<f64>) -> Option<Self> {
        line.bounding_rect().map(|rect| BBox {
            min: rect.min(),
            max: rect.max(),
        })
    }

    /// Smallest box around every given box, `None` when there are none.
    pub fn union<'a>(boxes: impl IntoIterator<Item = &'a BBox>) -> Option<Self> {
        boxes.into_iter().copied().reduce(|mut acc, bbox| {
            acc.merge(&bbox);
            acc
        })
    }

    pub fn extend<C>(&mut self, coord: C)
    where
        C: Into<Coord<f64>>,
    {
        let coord = coord.into();
        self.min.x = self.min.x.min(coord.x);
        self.min.y = self.min.y.min(coord.y);
        self.max.x = self.max.x.max(coord.x);
        self.max.y = self.max.y.max(coord.y);
    }

    pub fn merge(&mut self, other: &BBox) {
        self.extend(other.min);
        self.extend(other.max);
    }

    pub fn west(&self) -> f64 {
        self.min.x
    }

    pub fn south(&self) -> f64 {
        self.min.y
    }

    pub fn east(&self) -> f64 {
        self.max.x
    }

    pub fn north(&self) -> f64 {
        self.max.y
    }
}

impl From<[f64; 4]> for BBox {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        BBox {
            min: Coord { x: west, y: south },
            max: Coord { x: east, y: north },
        }
    }
}

impl From<BBox> for [f64; 4] {
    fn from(bbox: BBox) -> Self {
        [bbox.min.x, bbox.min.y, bbox.max.x, bbox.max.y]
    }
}
