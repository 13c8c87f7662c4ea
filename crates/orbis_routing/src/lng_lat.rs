//! Serde adapters writing geo-types geometry as GeoJSON ordered `[lon, lat]` arrays.

use geo_types::{Coord, LineString, Point};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod point {
    use super::*;

    pub fn serialize<S: Serializer>(point: &Point<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        [point.x(), point.y()].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point<f64>, D::Error> {
        let [lon, lat] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Point::new(lon, lat))
    }
}

pub mod optional_point {
    use super::*;

    pub fn serialize<S: Serializer>(
        point: &Option<Point<f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        point.map(|point| [point.x(), point.y()]).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Point<f64>>, D::Error> {
        let value = Option::<[f64; 2]>::deserialize(deserializer)?;
        Ok(value.map(|[lon, lat]| Point::new(lon, lat)))
    }
}

pub mod line_string {
    use super::*;

    pub fn serialize<S: Serializer>(
        line: &LineString<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(line.coords().map(|coord| [coord.x, coord.y]))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<LineString<f64>, D::Error> {
        let coords = Vec::<[f64; 2]>::deserialize(deserializer)?;
        Ok(LineString::new(
            coords
                .into_iter()
                .map(|[lon, lat]| Coord { x: lon, y: lat })
                .collect(),
        ))
    }
}
