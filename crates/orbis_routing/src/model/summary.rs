use geo_types::Point;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::lng_lat;

/// Distance and time metrics of a route or leg. EV fields are only present for
/// electric vehicles, and the `*_in_pct` fields only when the battery capacity is known.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub departure_time: Option<Timestamp>,
    pub arrival_time: Option<Timestamp>,
    pub length_in_meters: u64,
    pub travel_time_in_seconds: u64,
    pub traffic_delay_in_seconds: u64,
    pub traffic_length_in_meters: u64,
    pub no_traffic_travel_time_in_seconds: Option<u64>,
    pub historic_traffic_travel_time_in_seconds: Option<u64>,
    pub live_traffic_incidents_travel_time_in_seconds: Option<u64>,
    pub fuel_consumption_in_liters: Option<f64>,

    #[serde(rename = "batteryConsumptionInkWh")]
    pub battery_consumption_in_kwh: Option<f64>,
    #[serde(rename = "batteryConsumptionInPCT")]
    pub battery_consumption_in_pct: Option<f64>,
    #[serde(rename = "remainingChargeAtArrivalInkWh")]
    pub remaining_charge_at_arrival_in_kwh: Option<f64>,
    #[serde(rename = "remainingChargeAtArrivalInPCT")]
    pub remaining_charge_at_arrival_in_pct: Option<f64>,

    pub total_charging_time_in_seconds: Option<u64>,

    /// Set on the leg that ends at a charging park.
    pub charging_stop: Option<ChargingStop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargingSpeed {
    Slow,
    Regular,
    Fast,
    UltraFast,
}

impl ChargingSpeed {
    pub fn from_power_kw(power_kw: f64) -> Self {
        if power_kw < 12.0 {
            ChargingSpeed::Slow
        } else if power_kw < 50.0 {
            ChargingSpeed::Regular
        } else if power_kw < 150.0 {
            ChargingSpeed::Fast
        } else {
            ChargingSpeed::UltraFast
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStop {
    pub charging_park_id: Option<String>,
    pub charging_park_uuid: Option<String>,
    pub charging_park_external_id: Option<String>,
    pub charging_park_name: Option<String>,
    pub charging_park_operator_name: Option<String>,

    #[serde(default, with = "lng_lat::optional_point")]
    pub position: Option<Point<f64>>,

    pub address: Option<Address>,

    #[serde(rename = "chargingParkPowerInkW")]
    pub charging_park_power_in_kw: Option<f64>,
    pub charging_speed: Option<ChargingSpeed>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connectors: Vec<ChargingConnector>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_options: Vec<PaymentOption>,

    pub charging_time_in_seconds: Option<u64>,

    #[serde(rename = "targetChargeInkWh")]
    pub target_charge_in_kwh: Option<f64>,
    #[serde(rename = "targetChargeInPCT")]
    pub target_charge_in_pct: Option<f64>,

    pub charging_stop_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_name: Option<String>,
    pub street_number: Option<String>,
    pub municipality: Option<String>,
    pub country_subdivision: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub freeform_address: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingConnector {
    pub connector_type: Option<String>,
    pub current_type: Option<String>,
    #[serde(rename = "ratedPowerKW")]
    pub rated_power_kw: Option<f64>,
    #[serde(rename = "voltageV")]
    pub voltage_v: Option<f64>,
    #[serde(rename = "currentA")]
    pub current_a: Option<f64>,
    pub facility_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<String>,
}
