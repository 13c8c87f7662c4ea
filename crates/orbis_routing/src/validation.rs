//! Structural and range checks run on caller input before a request is assembled.

use std::fmt::Display;

use geo_types::Coord;
use serde::Serialize;
use thiserror::Error;

use crate::{
    geo_input::{GeoInput, GeoInputKind, PathInput},
    request::params::CalculateRouteParams,
    vehicle::{ChargeLevel, VehicleParameters},
};

pub const MAX_ALTERNATIVES: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    TooSmall,
    TooBig,
    InvalidValue,
    Custom,
}

impl Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                IssueCode::TooSmall => "too_small",
                IssueCode::TooBig => "too_big",
                IssueCode::InvalidValue => "invalid_value",
                IssueCode::Custom => "custom",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Dotted field path, e.g. `geoInputs.1.position`.
    pub path: String,
    pub code: IssueCode,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", join_issues(.0))]
pub struct ValidationIssues(pub Vec<ValidationIssue>);

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{} ({}): {}", issue.path, issue.code, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationIssues {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.0.iter()
    }

    fn push(&mut self, path: impl Into<String>, code: IssueCode, message: impl Into<String>) {
        self.0.push(ValidationIssue {
            path: path.into(),
            code,
            message: message.into(),
        });
    }

    fn check_range(&mut self, path: &str, value: f64, min: f64, max: f64) {
        if value.is_nan() {
            self.push(path, IssueCode::InvalidValue, "must be a number");
        } else if value < min {
            self.push(path, IssueCode::TooSmall, format!("must be >= {min}"));
        } else if value > max {
            self.push(path, IssueCode::TooBig, format!("must be <= {max}"));
        }
    }

    fn check_positive(&mut self, path: &str, value: f64) {
        if value.is_nan() || value <= 0.0 {
            self.push(path, IssueCode::TooSmall, "must be > 0");
        }
    }

    fn check_coord(&mut self, path: &str, coord: Coord<f64>) {
        self.check_range(&format!("{path}.0"), coord.x, -180.0, 180.0);
        self.check_range(&format!("{path}.1"), coord.y, -90.0, 90.0);
    }
}

/// A set of rules for one input type.
pub trait Schema<T> {
    fn check(&self, input: &T) -> ValidationIssues;
}

/// Returns the input untouched when it satisfies `schema`, every issue otherwise.
pub fn validate<'a, T>(input: &'a T, schema: &impl Schema<T>) -> Result<&'a T, ValidationIssues> {
    let issues = schema.check(input);
    if issues.is_empty() {
        Ok(input)
    } else {
        Err(issues)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateRouteSchema;

impl Schema<CalculateRouteParams> for CalculateRouteSchema {
    fn check(&self, params: &CalculateRouteParams) -> ValidationIssues {
        let mut issues = ValidationIssues::default();

        check_geo_inputs(&mut issues, &params.geo_inputs);

        if let Some(heading) = params.vehicle_heading {
            issues.check_range("vehicleHeading", heading, 0.0, 360.0);
        }

        if params.max_alternatives.is_some_and(|count| count > MAX_ALTERNATIVES) {
            issues.push(
                "maxAlternatives",
                IssueCode::TooBig,
                format!("must be <= {MAX_ALTERNATIVES}"),
            );
        }

        if params
            .language
            .as_ref()
            .is_some_and(|language| language.trim().is_empty())
        {
            issues.push("language", IssueCode::InvalidValue, "must not be empty");
        }

        if let Some(vehicle) = &params.vehicle {
            check_vehicle(&mut issues, vehicle);
        }

        issues
    }
}

fn check_geo_inputs(issues: &mut ValidationIssues, geo_inputs: &[GeoInput]) {
    for (index, input) in geo_inputs.iter().enumerate() {
        match input {
            GeoInput::Waypoint(waypoint) => {
                let path = format!("geoInputs.{index}");
                issues.check_coord(&format!("{path}.position"), waypoint.position.0);
                if let Some(radius) = waypoint.radius_meters {
                    issues.check_positive(&format!("{path}.radiusMeters"), radius);
                }
            }
            GeoInput::Path(path_input) => {
                let path = match path_input {
                    PathInput::Coordinates(_) => format!("geoInputs.{index}.coordinates"),
                    PathInput::Route(_) => format!("geoInputs.{index}.route.geometry"),
                };
                let line = path_input.line_string();

                if line.0.is_empty() {
                    issues.push(path, IssueCode::TooSmall, "path must have at least 1 coordinate");
                    continue;
                }

                for (coord_index, coord) in line.coords().enumerate() {
                    issues.check_coord(&format!("{path}.{coord_index}"), *coord);
                }
            }
        }
    }

    let path_count = geo_inputs
        .iter()
        .filter(|input| input.kind() == GeoInputKind::Path)
        .count();
    let waypoint_count = geo_inputs.len() - path_count;

    if path_count == 0 && waypoint_count < 2 {
        issues.push(
            "geoInputs",
            IssueCode::Custom,
            "at least 2 waypoints are required when no path is given",
        );
    }
}

fn check_vehicle(issues: &mut ValidationIssues, vehicle: &VehicleParameters) {
    if let Some(dimensions) = &vehicle.dimensions {
        let lengths = [
            ("vehicle.dimensions.lengthMeters", dimensions.length_meters),
            ("vehicle.dimensions.widthMeters", dimensions.width_meters),
            ("vehicle.dimensions.heightMeters", dimensions.height_meters),
        ];
        for (path, value) in lengths {
            if let Some(value) = value {
                issues.check_positive(path, value);
            }
        }
    }

    let Some(engine) = vehicle.electric_engine() else {
        return;
    };

    issues.check_positive("vehicle.engine.maxChargeInkWh", engine.max_charge_in_kwh);

    if engine.speed_to_consumption.is_empty() {
        issues.push(
            "vehicle.engine.speedToConsumption",
            IssueCode::TooSmall,
            "at least 1 speed/consumption pair is required",
        );
    }

    match engine.current_charge {
        Some(ChargeLevel::InPercent(percent)) => {
            issues.check_range("vehicle.engine.currentCharge.inPercent", percent, 0.0, 100.0);
        }
        Some(ChargeLevel::InKwh(kwh)) => {
            issues.check_range(
                "vehicle.engine.currentCharge.inKwh",
                kwh,
                0.0,
                engine.max_charge_in_kwh,
            );
        }
        None => {}
    }

    if let Some(charging) = &engine.charging {
        if engine.current_charge.is_none() {
            issues.push(
                "vehicle.engine.currentCharge",
                IssueCode::Custom,
                "required for long-distance EV routing",
            );
        }
        if charging.charging_connectors.is_empty() {
            issues.push(
                "vehicle.engine.charging.chargingConnectors",
                IssueCode::TooSmall,
                "at least 1 charging connector is required",
            );
        }
        if charging.battery_curve.is_empty() {
            issues.push(
                "vehicle.engine.charging.batteryCurve",
                IssueCode::TooSmall,
                "at least 1 battery curve point is required",
            );
        }
        issues.check_range(
            "vehicle.engine.charging.minChargeAtDestinationInkWh",
            charging.min_charge_at_destination_in_kwh,
            0.0,
            engine.max_charge_in_kwh,
        );
        issues.check_range(
            "vehicle.engine.charging.minChargeAtChargingStopsInkWh",
            charging.min_charge_at_charging_stops_in_kwh,
            0.0,
            engine.max_charge_in_kwh,
        );
    }
}

#[cfg(test)]
mod tests {
    use geo_types::LineString;

    use super::*;
    use crate::{
        geo_input::Waypoint,
        vehicle::{
            BatteryCurvePoint, ChargingConnectorSpec, ChargingPreferences, CurrentType,
            ElectricEngine, SpeedConsumption, VehicleEngine,
        },
    };

    fn params(geo_inputs: Vec<GeoInput>) -> CalculateRouteParams {
        CalculateRouteParams::new(geo_inputs)
    }

    fn codes(issues: &ValidationIssues) -> Vec<(&str, IssueCode)> {
        issues
            .iter()
            .map(|issue| (issue.path.as_str(), issue.code))
            .collect()
    }

    #[test]
    fn test_valid_waypoints() {
        let params = params(vec![
            Waypoint::new(4.89066, 52.37317).into(),
            Waypoint::new(4.49015, 52.16109).into(),
        ]);

        assert!(validate(&params, &CalculateRouteSchema).is_ok());
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let params = params(vec![
            Waypoint::new(190.0, 52.0).into(),
            Waypoint::new(4.0, -91.0).into(),
        ]);

        let issues = validate(&params, &CalculateRouteSchema).unwrap_err();

        assert_eq!(
            codes(&issues),
            vec![
                ("geoInputs.0.position.0", IssueCode::TooBig),
                ("geoInputs.1.position.1", IssueCode::TooSmall),
            ]
        );
    }

    #[test]
    fn test_single_waypoint_without_path() {
        let params = params(vec![Waypoint::new(4.0, 52.0).into()]);

        let issues = validate(&params, &CalculateRouteSchema).unwrap_err();

        assert_eq!(codes(&issues), vec![("geoInputs", IssueCode::Custom)]);
    }

    #[test]
    fn test_lone_path_is_valid() {
        let params = params(vec![
            LineString::from(vec![(4.0, 52.0), (4.1, 52.1)]).into(),
        ]);

        assert!(validate(&params, &CalculateRouteSchema).is_ok());
    }

    #[test]
    fn test_empty_path_and_bad_radius() {
        let params = params(vec![
            Waypoint::new(4.0, 52.0).with_radius(0.0).into(),
            LineString::<f64>::new(vec![]).into(),
        ]);

        let issues = validate(&params, &CalculateRouteSchema).unwrap_err();

        assert_eq!(
            codes(&issues),
            vec![
                ("geoInputs.0.radiusMeters", IssueCode::TooSmall),
                ("geoInputs.1.coordinates", IssueCode::TooSmall),
            ]
        );
    }

    #[test]
    fn test_scalar_options() {
        let mut params = params(vec![
            Waypoint::new(4.0, 52.0).into(),
            Waypoint::new(4.1, 52.1).into(),
        ]);
        params.vehicle_heading = Some(400.0);
        params.max_alternatives = Some(6);

        let issues = validate(&params, &CalculateRouteSchema).unwrap_err();

        assert_eq!(
            codes(&issues),
            vec![
                ("vehicleHeading", IssueCode::TooBig),
                ("maxAlternatives", IssueCode::TooBig),
            ]
        );
    }

    #[test]
    fn test_long_distance_ev_requirements() {
        let mut params = params(vec![
            Waypoint::new(4.0, 52.0).into(),
            Waypoint::new(5.0, 51.0).into(),
        ]);
        params.vehicle = Some(VehicleParameters {
            engine: Some(VehicleEngine::Electric(ElectricEngine {
                speed_to_consumption: vec![SpeedConsumption {
                    speed_kmh: 100.0,
                    consumption: 18.0,
                }],
                max_charge_in_kwh: 80.0,
                charging: Some(ChargingPreferences {
                    min_charge_at_destination_in_kwh: 10.0,
                    min_charge_at_charging_stops_in_kwh: 90.0,
                    battery_curve: vec![BatteryCurvePoint {
                        state_of_charge_in_kwh: 50.0,
                        max_power_in_kw: 150.0,
                    }],
                    charging_connectors: vec![ChargingConnectorSpec {
                        current_type: CurrentType::Dc,
                        plug_types: vec!["IEC_62196_Type_2_Connector_Cable_Attached".to_string()],
                        efficiency: None,
                        base_load_in_kw: None,
                        max_power_in_kw: None,
                    }],
                    charging_time_offset_in_sec: None,
                }),
                ..Default::default()
            })),
            ..Default::default()
        });

        let issues = validate(&params, &CalculateRouteSchema).unwrap_err();

        assert_eq!(
            codes(&issues),
            vec![
                ("vehicle.engine.currentCharge", IssueCode::Custom),
                (
                    "vehicle.engine.charging.minChargeAtChargingStopsInkWh",
                    IssueCode::TooBig
                ),
            ]
        );
    }

    #[test]
    fn test_display_lists_every_issue() {
        let params = params(vec![Waypoint::new(200.0, 52.0).into()]);

        let issues = validate(&params, &CalculateRouteSchema).unwrap_err();

        assert_eq!(
            issues.to_string(),
            "geoInputs.0.position.0 (too_big): must be <= 180; geoInputs (custom): at least 2 waypoints are required when no path is given"
        );
    }
}
