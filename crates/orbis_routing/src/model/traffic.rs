use serde::{Deserialize, Serialize};

/// Category of a traffic event, derived from TPEG2-TEC main cause codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrafficCategory {
    Jam,
    Accident,
    Roadworks,
    NarrowLanes,
    RoadClosed,
    SlipperyRoad,
    Aquaplaning,
    Fire,
    HazardousConditions,
    ObjectsOnRoad,
    AnimalsOnRoad,
    PeopleOnRoad,
    BrokenDownVehicle,
    VehicleOnWrongSide,
    RescueAndRecovery,
    RegulatoryMeasure,
    ExtremeWeather,
    ReducedVisibility,
    Precipitation,
    RecklessPersons,
    OverheightWarning,
    TrafficRegulationsChanged,
    MajorEvent,
    ServiceNotOperating,
    ServiceNotUsable,
    SlowMovingVehicles,
    DangerousEndOfQueue,
    FireRisk,
    TimeDelay,
    PoliceCheckpoint,
    MalfunctioningEquipment,
    TestMessage,
    Other,
}

impl TrafficCategory {
    pub fn from_tec_cause_code(code: u32) -> Self {
        match code {
            1 => TrafficCategory::Jam,
            2 => TrafficCategory::Accident,
            3 => TrafficCategory::Roadworks,
            4 => TrafficCategory::NarrowLanes,
            5 => TrafficCategory::RoadClosed,
            6 => TrafficCategory::SlipperyRoad,
            7 => TrafficCategory::Aquaplaning,
            8 => TrafficCategory::Fire,
            9 => TrafficCategory::HazardousConditions,
            10 => TrafficCategory::ObjectsOnRoad,
            11 => TrafficCategory::AnimalsOnRoad,
            12 => TrafficCategory::PeopleOnRoad,
            13 => TrafficCategory::BrokenDownVehicle,
            14 => TrafficCategory::VehicleOnWrongSide,
            15 => TrafficCategory::RescueAndRecovery,
            16 => TrafficCategory::RegulatoryMeasure,
            17 => TrafficCategory::ExtremeWeather,
            18 => TrafficCategory::ReducedVisibility,
            19 => TrafficCategory::Precipitation,
            20 => TrafficCategory::RecklessPersons,
            21 => TrafficCategory::OverheightWarning,
            22 => TrafficCategory::TrafficRegulationsChanged,
            23 => TrafficCategory::MajorEvent,
            24 => TrafficCategory::ServiceNotOperating,
            25 => TrafficCategory::ServiceNotUsable,
            26 => TrafficCategory::SlowMovingVehicles,
            27 => TrafficCategory::DangerousEndOfQueue,
            28 => TrafficCategory::FireRisk,
            29 => TrafficCategory::TimeDelay,
            30 => TrafficCategory::PoliceCheckpoint,
            31 => TrafficCategory::MalfunctioningEquipment,
            100 => TrafficCategory::TestMessage,
            _ => TrafficCategory::Other,
        }
    }

    /// Coarse fallback used when a traffic section carries no TEC causes.
    pub fn from_simple_category(category: &str) -> Self {
        match category {
            "JAM" => TrafficCategory::Jam,
            "ROAD_WORK" => TrafficCategory::Roadworks,
            "ROAD_CLOSURE" => TrafficCategory::RoadClosed,
            _ => TrafficCategory::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MagnitudeOfDelay {
    #[default]
    Unknown,
    Minor,
    Moderate,
    Major,
    Indefinite,
}

impl MagnitudeOfDelay {
    pub fn from_code(code: Option<u8>) -> Self {
        match code {
            Some(1) => MagnitudeOfDelay::Minor,
            Some(2) => MagnitudeOfDelay::Moderate,
            Some(3) => MagnitudeOfDelay::Major,
            Some(4) => MagnitudeOfDelay::Indefinite,
            _ => MagnitudeOfDelay::Unknown,
        }
    }
}
