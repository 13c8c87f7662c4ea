use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::request::builder::QueryParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VehicleParameters {
    pub dimensions: Option<VehicleDimensions>,
    pub max_speed_kmh: Option<u32>,
    pub commercial: Option<bool>,
    /// Hazardous load classes, e.g. `USHazmatClass1` or `otherHazmatExplosive`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_types: Vec<String>,
    pub engine: Option<VehicleEngine>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VehicleDimensions {
    pub weight_kg: Option<u32>,
    pub axle_weight_kg: Option<u32>,
    pub length_meters: Option<f64>,
    pub width_meters: Option<f64>,
    pub height_meters: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum VehicleEngine {
    Combustion(CombustionEngine),
    Electric(ElectricEngine),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpeedConsumption {
    pub speed_kmh: f64,
    /// Liters or kWh per 100 km, depending on the engine.
    pub consumption: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombustionEngine {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub speed_to_consumption: Vec<SpeedConsumption>,
    pub current_fuel_in_liters: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElectricEngine {
    pub speed_to_consumption: Vec<SpeedConsumption>,
    pub auxiliary_power_in_kw: Option<f64>,
    pub current_charge: Option<ChargeLevel>,
    /// Battery capacity.
    pub max_charge_in_kwh: f64,
    /// Present for long-distance EV routing, where the service plans charging stops.
    pub charging: Option<ChargingPreferences>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ChargeLevel {
    InKwh(f64),
    InPercent(f64),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChargingPreferences {
    pub min_charge_at_destination_in_kwh: f64,
    pub min_charge_at_charging_stops_in_kwh: f64,
    pub battery_curve: Vec<BatteryCurvePoint>,
    pub charging_connectors: Vec<ChargingConnectorSpec>,
    pub charging_time_offset_in_sec: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatteryCurvePoint {
    #[serde(rename = "stateOfChargeInkWh")]
    pub state_of_charge_in_kwh: f64,
    #[serde(rename = "maxPowerInkW")]
    pub max_power_in_kw: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChargingConnectorSpec {
    pub current_type: CurrentType,
    pub plug_types: Vec<String>,
    pub efficiency: Option<f64>,
    #[serde(rename = "baseLoadInkW")]
    pub base_load_in_kw: Option<f64>,
    #[serde(rename = "maxPowerInkW")]
    pub max_power_in_kw: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CurrentType {
    #[serde(rename = "AC1")]
    Ac1,
    #[serde(rename = "AC3")]
    Ac3,
    #[serde(rename = "DC")]
    Dc,
}

/// `chargingParameters` member of a long-distance EV request body.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingParametersBody {
    pub battery_curve: Vec<BatteryCurvePoint>,
    pub charging_connectors: Vec<ChargingConnectorSpec>,
    pub charging_time_offset_in_sec: Option<u32>,
}

impl Display for VehicleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VehicleEngine::Combustion(_) => "combustion",
                VehicleEngine::Electric(_) => "electric",
            }
        )
    }
}

impl ElectricEngine {
    pub fn current_charge_in_kwh(&self) -> Option<f64> {
        self.current_charge.map(|charge| match charge {
            ChargeLevel::InKwh(kwh) => kwh,
            ChargeLevel::InPercent(percent) => self.max_charge_in_kwh * percent / 100.0,
        })
    }
}

impl VehicleParameters {
    pub fn electric_engine(&self) -> Option<&ElectricEngine> {
        match &self.engine {
            Some(VehicleEngine::Electric(engine)) => Some(engine),
            _ => None,
        }
    }

    /// Needed to express EV energy values as battery percentages.
    pub fn battery_capacity_in_kwh(&self) -> Option<f64> {
        self.electric_engine()
            .map(|engine| engine.max_charge_in_kwh)
            .filter(|capacity| *capacity > 0.0)
    }

    pub fn is_long_distance_ev(&self) -> bool {
        self.electric_engine()
            .is_some_and(|engine| engine.charging.is_some())
    }

    pub fn charging_parameters(&self) -> Option<ChargingParametersBody> {
        let charging = self.electric_engine()?.charging.as_ref()?;
        Some(ChargingParametersBody {
            battery_curve: charging.battery_curve.clone(),
            charging_connectors: charging.charging_connectors.clone(),
            charging_time_offset_in_sec: charging.charging_time_offset_in_sec,
        })
    }

    pub fn append_query(&self, query: &mut QueryParams) {
        if let Some(max_speed) = self.max_speed_kmh {
            query.push(("vehicleMaxSpeed", max_speed.to_string()));
        }

        if let Some(dimensions) = &self.dimensions {
            dimensions.append_query(query);
        }

        if let Some(commercial) = self.commercial {
            query.push(("vehicleCommercial", commercial.to_string()));
        }

        for load_type in &self.load_types {
            query.push(("vehicleLoadType", load_type.clone()));
        }

        let Some(engine) = &self.engine else {
            return;
        };

        query.push(("vehicleEngineType", engine.to_string()));

        match engine {
            VehicleEngine::Combustion(combustion) => {
                if !combustion.speed_to_consumption.is_empty() {
                    query.push((
                        "constantSpeedConsumptionInLitersPerHundredkm",
                        format_speed_consumption(&combustion.speed_to_consumption),
                    ));
                }
                if let Some(fuel) = combustion.current_fuel_in_liters {
                    query.push(("currentFuelInLiters", fuel.to_string()));
                }
            }
            VehicleEngine::Electric(electric) => {
                if !electric.speed_to_consumption.is_empty() {
                    query.push((
                        "constantSpeedConsumptionInkWhPerHundredkm",
                        format_speed_consumption(&electric.speed_to_consumption),
                    ));
                }
                if let Some(auxiliary_power) = electric.auxiliary_power_in_kw {
                    query.push(("auxiliaryPowerInkW", auxiliary_power.to_string()));
                }
                if let Some(current_charge) = electric.current_charge_in_kwh() {
                    query.push(("currentChargeInkWh", current_charge.to_string()));
                }
                query.push(("maxChargeInkWh", electric.max_charge_in_kwh.to_string()));

                if let Some(charging) = &electric.charging {
                    query.push((
                        "minChargeAtDestinationInkWh",
                        charging.min_charge_at_destination_in_kwh.to_string(),
                    ));
                    query.push((
                        "minChargeAtChargingStopsInkWh",
                        charging.min_charge_at_charging_stops_in_kwh.to_string(),
                    ));
                }
            }
        }
    }
}

impl VehicleDimensions {
    fn append_query(&self, query: &mut QueryParams) {
        if let Some(weight) = self.weight_kg {
            query.push(("vehicleWeight", weight.to_string()));
        }
        if let Some(axle_weight) = self.axle_weight_kg {
            query.push(("vehicleAxleWeight", axle_weight.to_string()));
        }
        if let Some(length) = self.length_meters {
            query.push(("vehicleLength", length.to_string()));
        }
        if let Some(width) = self.width_meters {
            query.push(("vehicleWidth", width.to_string()));
        }
        if let Some(height) = self.height_meters {
            query.push(("vehicleHeight", height.to_string()));
        }
    }
}

/// `speed,consumption` pairs joined by `:`.
fn format_speed_consumption(table: &[SpeedConsumption]) -> String {
    table
        .iter()
        .map(|entry| format!("{},{}", entry.speed_kmh, entry.consumption))
        .collect::<Vec<_>>()
        .join(":")
}
