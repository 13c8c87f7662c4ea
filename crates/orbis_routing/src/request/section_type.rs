use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Section kinds a caller can ask the service to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SectionType {
    CarTrain,
    Country,
    Ferry,
    Motorway,
    Pedestrian,
    Toll,
    TollVignette,
    Traffic,
    VehicleRestricted,
    Tunnel,
    Carpool,
    Urban,
    Unpaved,
    LowEmissionZone,
    Lanes,
    SpeedLimit,
    RoadShields,
    ImportantRoadStretch,
}

impl SectionType {
    pub const DEFAULTS: [SectionType; 14] = [
        SectionType::CarTrain,
        SectionType::Country,
        SectionType::Ferry,
        SectionType::Motorway,
        SectionType::Pedestrian,
        SectionType::Toll,
        SectionType::TollVignette,
        SectionType::Traffic,
        SectionType::VehicleRestricted,
        SectionType::Tunnel,
        SectionType::Carpool,
        SectionType::Urban,
        SectionType::Unpaved,
        SectionType::LowEmissionZone,
    ];

    /// Only reported by the service for guidance requests.
    pub const GUIDANCE_DEPENDENT: [SectionType; 4] = [
        SectionType::Lanes,
        SectionType::SpeedLimit,
        SectionType::RoadShields,
        SectionType::ImportantRoadStretch,
    ];

    /// The `sectionType` query value. The wire vocabulary differs from ours for
    /// `toll` (`tollRoad`) and `vehicleRestricted` (`travelMode`).
    pub fn wire_tag(self) -> &'static str {
        match self {
            SectionType::CarTrain => "carTrain",
            SectionType::Country => "country",
            SectionType::Ferry => "ferry",
            SectionType::Motorway => "motorway",
            SectionType::Pedestrian => "pedestrian",
            SectionType::Toll => "tollRoad",
            SectionType::TollVignette => "tollVignette",
            SectionType::Traffic => "traffic",
            SectionType::VehicleRestricted => "travelMode",
            SectionType::Tunnel => "tunnel",
            SectionType::Carpool => "carpool",
            SectionType::Urban => "urban",
            SectionType::Unpaved => "unpaved",
            SectionType::LowEmissionZone => "lowEmissionZone",
            SectionType::Lanes => "lanes",
            SectionType::SpeedLimit => "speedLimit",
            SectionType::RoadShields => "roadShields",
            SectionType::ImportantRoadStretch => "importantRoadStretch",
        }
    }

    /// Explicit types win; otherwise the defaults, plus the guidance-dependent
    /// kinds when guidance is requested.
    pub fn effective(explicit: Option<&[SectionType]>, with_guidance: bool) -> Vec<SectionType> {
        match explicit {
            Some(section_types) => section_types.to_vec(),
            None if with_guidance => SectionType::DEFAULTS
                .into_iter()
                .chain(SectionType::GUIDANCE_DEPENDENT)
                .collect(),
            None => SectionType::DEFAULTS.to_vec(),
        }
    }
}

impl Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_restricted_wire_tag() {
        assert_eq!(SectionType::VehicleRestricted.wire_tag(), "travelMode");
        assert_eq!(SectionType::Toll.wire_tag(), "tollRoad");
    }

    #[test]
    fn test_effective_section_types() {
        assert_eq!(SectionType::effective(None, false).len(), 14);

        let with_guidance = SectionType::effective(None, true);
        assert_eq!(with_guidance.len(), 18);
        assert!(with_guidance.contains(&SectionType::Lanes));

        let explicit = SectionType::effective(Some(&[SectionType::Ferry]), true);
        assert_eq!(explicit, vec![SectionType::Ferry]);
    }
}
