use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

use crate::model::{
    summary::Summary,
    traffic::{MagnitudeOfDelay, TrafficCategory},
};

/// Fields shared by every section: a fresh identity and an index range into the
/// owning route's coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProps {
    pub id: String,
    pub start_point_index: usize,
    pub end_point_index: usize,
}

impl SectionProps {
    pub fn new(start_point_index: usize, end_point_index: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_point_index,
            end_point_index,
        }
    }
}

/// `end_point_index` is inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegSection {
    #[serde(flatten)]
    pub props: SectionProps,
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySection {
    #[serde(flatten)]
    pub props: SectionProps,
    #[serde(rename = "countryCodeISO3")]
    pub country_code_iso3: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSection {
    #[serde(flatten)]
    pub props: SectionProps,
    pub categories: Vec<TrafficCategory>,
    pub magnitude_of_delay: MagnitudeOfDelay,
    pub delay_in_seconds: Option<u64>,
    pub effective_speed_in_kmh: Option<f64>,
    pub event_id: Option<String>,
    pub tec: Option<Tec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tec {
    pub effect_code: Option<u32>,
    #[serde(default)]
    pub causes: Vec<TecCause>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TecCause {
    pub main_cause_code: u32,
    pub sub_cause_code: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneSection {
    #[serde(flatten)]
    pub props: SectionProps,
    pub lanes: Vec<Lane>,
    #[serde(default)]
    pub lane_separators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lane {
    pub directions: Vec<String>,
    pub follow: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedLimitSection {
    #[serde(flatten)]
    pub props: SectionProps,
    pub max_speed_limit_in_kmh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadShieldsSection {
    #[serde(flatten)]
    pub props: SectionProps,
    pub road_shield_references: Vec<RoadShieldReference>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadShieldReference {
    pub reference: String,
    pub shield_content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affixes: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantRoadStretchSection {
    #[serde(flatten)]
    pub props: SectionProps,
    pub index: u32,
    pub street_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub road_numbers: Vec<String>,
}

/// One typed annotation over a sub-range of a route.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Leg(LegSection),
    CarTrain(SectionProps),
    Country(CountrySection),
    Ferry(SectionProps),
    Motorway(SectionProps),
    Pedestrian(SectionProps),
    Toll(SectionProps),
    TollVignette(CountrySection),
    Traffic(TrafficSection),
    /// A stretch the requested travel mode cannot use.
    VehicleRestricted(SectionProps),
    Tunnel(SectionProps),
    Carpool(SectionProps),
    Urban(SectionProps),
    Unpaved(SectionProps),
    LowEmissionZone(SectionProps),
    Lanes(LaneSection),
    SpeedLimit(SpeedLimitSection),
    RoadShields(RoadShieldsSection),
    ImportantRoadStretch(ImportantRoadStretchSection),
}

impl Section {
    pub fn props(&self) -> &SectionProps {
        match self {
            Section::Leg(section) => &section.props,
            Section::Country(section) | Section::TollVignette(section) => &section.props,
            Section::Traffic(section) => &section.props,
            Section::Lanes(section) => &section.props,
            Section::SpeedLimit(section) => &section.props,
            Section::RoadShields(section) => &section.props,
            Section::ImportantRoadStretch(section) => &section.props,
            Section::CarTrain(props)
            | Section::Ferry(props)
            | Section::Motorway(props)
            | Section::Pedestrian(props)
            | Section::Toll(props)
            | Section::VehicleRestricted(props)
            | Section::Tunnel(props)
            | Section::Carpool(props)
            | Section::Urban(props)
            | Section::Unpaved(props)
            | Section::LowEmissionZone(props) => props,
        }
    }
}

/// Sections of a route grouped by kind, each group in response order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sections {
    pub leg: Vec<LegSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub car_train: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub country: Vec<CountrySection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ferry: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub motorway: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pedestrian: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub toll: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub toll_vignette: Vec<CountrySection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub traffic: Vec<TrafficSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vehicle_restricted: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tunnel: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub carpool: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urban: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unpaved: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub low_emission_zone: Vec<SectionProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lanes: Vec<LaneSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub speed_limit: Vec<SpeedLimitSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub road_shields: Vec<RoadShieldsSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub important_road_stretch: Vec<ImportantRoadStretchSection>,
}

impl Sections {
    pub fn push(&mut self, section: Section) {
        match section {
            Section::Leg(section) => self.leg.push(section),
            Section::CarTrain(section) => self.car_train.push(section),
            Section::Country(section) => self.country.push(section),
            Section::Ferry(section) => self.ferry.push(section),
            Section::Motorway(section) => self.motorway.push(section),
            Section::Pedestrian(section) => self.pedestrian.push(section),
            Section::Toll(section) => self.toll.push(section),
            Section::TollVignette(section) => self.toll_vignette.push(section),
            Section::Traffic(section) => self.traffic.push(section),
            Section::VehicleRestricted(section) => self.vehicle_restricted.push(section),
            Section::Tunnel(section) => self.tunnel.push(section),
            Section::Carpool(section) => self.carpool.push(section),
            Section::Urban(section) => self.urban.push(section),
            Section::Unpaved(section) => self.unpaved.push(section),
            Section::LowEmissionZone(section) => self.low_emission_zone.push(section),
            Section::Lanes(section) => self.lanes.push(section),
            Section::SpeedLimit(section) => self.speed_limit.push(section),
            Section::RoadShields(section) => self.road_shields.push(section),
            Section::ImportantRoadStretch(section) => self.important_road_stretch.push(section),
        }
    }
}

impl FromIterator<Section> for Sections {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        let mut sections = Sections::default();
        for section in iter {
            sections.push(section);
        }
        sections
    }
}
