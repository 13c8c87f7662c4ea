use tracing::trace;

use crate::{
    model::{
        section::{
            CountrySection, ImportantRoadStretchSection, Lane, LaneSection, LegSection,
            RoadShieldReference, RoadShieldsSection, Section, SectionProps, SpeedLimitSection, Tec,
            TecCause, TrafficSection,
        },
        traffic::{MagnitudeOfDelay, TrafficCategory},
    },
    response::{
        summary::parse_summary,
        types::{
            ApiCountrySection, ApiLanesSection, ApiLeg, ApiSection, ApiSectionRange,
            ApiTecCause, ApiTrafficSection,
        },
    },
};

/// Travel-mode value marking a stretch the requested mode cannot use.
const RESTRICTED_TRAVEL_MODE: &str = "other";

impl From<ApiSectionRange> for SectionProps {
    fn from(range: ApiSectionRange) -> Self {
        SectionProps::new(range.start_point_index, range.end_point_index)
    }
}

/// Maps one wire section onto its domain kind. Returns `None` for kinds that are
/// not emitted: unknown tags and travel-mode stretches the vehicle can use.
pub fn map_section(section: &ApiSection) -> Option<Section> {
    let mapped = match section {
        ApiSection::CarTrain(range) => Section::CarTrain((*range).into()),
        ApiSection::Country(country) => Section::Country(map_country(country)),
        ApiSection::Ferry(range) => Section::Ferry((*range).into()),
        ApiSection::Motorway(range) => Section::Motorway((*range).into()),
        ApiSection::Pedestrian(range) => Section::Pedestrian((*range).into()),
        ApiSection::TollRoad(range) => Section::Toll((*range).into()),
        ApiSection::TollVignette(country) => Section::TollVignette(map_country(country)),
        ApiSection::Traffic(traffic) => Section::Traffic(map_traffic(traffic)),
        ApiSection::TravelMode(travel_mode) => {
            if travel_mode.travel_mode != RESTRICTED_TRAVEL_MODE {
                return None;
            }
            Section::VehicleRestricted(travel_mode.range.into())
        }
        ApiSection::Tunnel(range) => Section::Tunnel((*range).into()),
        ApiSection::Carpool(range) => Section::Carpool((*range).into()),
        ApiSection::Urban(range) => Section::Urban((*range).into()),
        ApiSection::Unpaved(range) => Section::Unpaved((*range).into()),
        ApiSection::LowEmissionZone(range) => Section::LowEmissionZone((*range).into()),
        ApiSection::Lanes(lanes) => Section::Lanes(map_lanes(lanes)),
        ApiSection::SpeedLimit(speed_limit) => Section::SpeedLimit(SpeedLimitSection {
            props: speed_limit.range.into(),
            max_speed_limit_in_kmh: speed_limit.max_speed_limit_in_kmh,
        }),
        ApiSection::RoadShields(road_shields) => Section::RoadShields(RoadShieldsSection {
            props: road_shields.range.into(),
            road_shield_references: road_shields
                .road_shield_references
                .iter()
                .map(|reference| RoadShieldReference {
                    reference: reference.reference.clone(),
                    shield_content: reference.shield_content.clone(),
                    affixes: reference.affixes.clone(),
                })
                .collect(),
        }),
        ApiSection::ImportantRoadStretch(stretch) => {
            Section::ImportantRoadStretch(ImportantRoadStretchSection {
                props: stretch.range.into(),
                index: stretch.important_road_stretch_index,
                street_name: stretch.street_name.as_ref().map(|name| name.text.clone()),
                road_numbers: stretch
                    .road_numbers
                    .iter()
                    .map(|number| number.text.clone())
                    .collect(),
            })
        }
        ApiSection::Unknown => {
            trace!("Skipping unrecognized section type");
            return None;
        }
    };

    Some(mapped)
}

fn map_country(section: &ApiCountrySection) -> CountrySection {
    CountrySection {
        props: section.range.into(),
        country_code_iso3: section.country_code.clone(),
    }
}

fn map_traffic(section: &ApiTrafficSection) -> TrafficSection {
    let causes = section.tec.as_ref().map(|tec| tec.causes.as_slice());

    TrafficSection {
        props: section.range.into(),
        categories: to_traffic_categories(causes, section.simple_category.as_deref()),
        magnitude_of_delay: MagnitudeOfDelay::from_code(section.magnitude_of_delay),
        delay_in_seconds: section.delay_in_seconds,
        effective_speed_in_kmh: section.effective_speed_in_kmh,
        event_id: section.event_id.clone(),
        tec: section.tec.as_ref().map(|tec| Tec {
            effect_code: tec.effect_code,
            causes: tec
                .causes
                .iter()
                .map(|cause| TecCause {
                    main_cause_code: cause.main_cause_code,
                    sub_cause_code: cause.sub_cause_code,
                })
                .collect(),
        }),
    }
}

fn map_lanes(section: &ApiLanesSection) -> LaneSection {
    LaneSection {
        props: section.range.into(),
        lanes: section
            .lanes
            .iter()
            .map(|lane| Lane {
                directions: lane.directions.clone(),
                follow: lane.follow.clone(),
            })
            .collect(),
        lane_separators: section.lane_separators.clone(),
    }
}

/// One category per TEC cause, in order. Without causes, the coarse simple
/// category is used instead. Never empty.
pub fn to_traffic_categories(
    causes: Option<&[ApiTecCause]>,
    simple_category: Option<&str>,
) -> Vec<TrafficCategory> {
    match causes {
        Some(causes) if !causes.is_empty() => causes
            .iter()
            .map(|cause| TrafficCategory::from_tec_cause_code(cause.main_cause_code))
            .collect(),
        _ => vec![
            simple_category
                .map(TrafficCategory::from_simple_category)
                .unwrap_or(TrafficCategory::Other),
        ],
    }
}

/// Builds one leg section per wire leg over the concatenated leg geometry.
///
/// The first leg starts at 0, every later leg starts one past the previous
/// leg's end, and `end_point_index` is the leg's last point (inclusive).
pub fn parse_leg_sections(legs: &[ApiLeg], battery_capacity_in_kwh: Option<f64>) -> Vec<LegSection> {
    legs.iter()
        .filter(|leg| !leg.points.is_empty())
        .scan(0usize, |next_start, leg| {
            let start = *next_start;
            let end = start + leg.points.len() - 1;
            *next_start = end + 1;

            Some(LegSection {
                props: SectionProps::new(start, end),
                summary: parse_summary(&leg.summary, battery_capacity_in_kwh),
            })
        })
        .collect()
}
