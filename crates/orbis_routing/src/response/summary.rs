use geo_types::Point;
use jiff::Timestamp;
use tracing::warn;

use crate::{
    model::summary::{
        Address, ChargingConnector, ChargingSpeed, ChargingStop, PaymentOption, Summary,
    },
    response::types::{ApiChargingParkLocation, ApiChargingStop, ApiSummary},
};

/// Converts a wire summary. Percentage EV fields are derived from their kWh
/// counterparts only when `battery_capacity_in_kwh` is known.
pub fn parse_summary(summary: &ApiSummary, battery_capacity_in_kwh: Option<f64>) -> Summary {
    let pct = |kwh: Option<f64>| to_percentage(kwh, battery_capacity_in_kwh);

    Summary {
        departure_time: parse_timestamp(summary.departure_time.as_deref()),
        arrival_time: parse_timestamp(summary.arrival_time.as_deref()),
        length_in_meters: summary.length_in_meters,
        travel_time_in_seconds: summary.travel_time_in_seconds,
        traffic_delay_in_seconds: summary.traffic_delay_in_seconds,
        traffic_length_in_meters: summary.traffic_length_in_meters,
        no_traffic_travel_time_in_seconds: summary.no_traffic_travel_time_in_seconds,
        historic_traffic_travel_time_in_seconds: summary.historic_traffic_travel_time_in_seconds,
        live_traffic_incidents_travel_time_in_seconds: summary
            .live_traffic_incidents_travel_time_in_seconds,
        fuel_consumption_in_liters: summary.fuel_consumption_in_liters,
        battery_consumption_in_kwh: summary.battery_consumption_in_kwh,
        battery_consumption_in_pct: pct(summary.battery_consumption_in_kwh),
        remaining_charge_at_arrival_in_kwh: summary.remaining_charge_at_arrival_in_kwh,
        remaining_charge_at_arrival_in_pct: pct(summary.remaining_charge_at_arrival_in_kwh),
        total_charging_time_in_seconds: summary.total_charging_time_in_seconds,
        charging_stop: summary
            .charging_information_at_end_of_leg
            .as_ref()
            .map(|stop| parse_charging_stop(stop, battery_capacity_in_kwh)),
    }
}

fn to_percentage(kwh: Option<f64>, capacity_in_kwh: Option<f64>) -> Option<f64> {
    match (kwh, capacity_in_kwh) {
        (Some(kwh), Some(capacity)) if capacity > 0.0 => Some(kwh * 100.0 / capacity),
        _ => None,
    }
}

fn parse_timestamp(value: Option<&str>) -> Option<Timestamp> {
    let value = value?;
    match value.parse::<Timestamp>() {
        Ok(timestamp) => Some(timestamp),
        Err(err) => {
            warn!(value, %err, "Ignoring unparsable summary timestamp");
            None
        }
    }
}

pub fn parse_charging_stop(
    stop: &ApiChargingStop,
    battery_capacity_in_kwh: Option<f64>,
) -> ChargingStop {
    let location = stop.charging_park_location.as_ref();

    ChargingStop {
        charging_park_id: stop.charging_park_id.clone(),
        charging_park_uuid: stop.charging_park_uuid.clone(),
        charging_park_external_id: stop.charging_park_external_id.clone(),
        charging_park_name: stop.charging_park_name.clone(),
        charging_park_operator_name: stop.charging_park_operator_name.clone(),
        position: location
            .and_then(|location| location.coordinate)
            .map(|coordinate| Point::new(coordinate.longitude, coordinate.latitude)),
        address: location.and_then(parse_address),
        charging_park_power_in_kw: stop.charging_park_power_in_kw,
        charging_speed: stop
            .charging_park_power_in_kw
            .map(ChargingSpeed::from_power_kw),
        connectors: stop
            .charging_connections
            .iter()
            .map(|connection| ChargingConnector {
                connector_type: connection.plug_type.clone(),
                current_type: connection.charging_current_type.clone(),
                rated_power_kw: connection.charging_power_in_kw,
                voltage_v: connection.charging_voltage_in_v,
                current_a: connection.charging_current_in_a,
                facility_type: connection.facility_type.clone(),
            })
            .collect(),
        payment_options: stop
            .charging_park_payment_options
            .iter()
            .map(|option| PaymentOption {
                method: option.method.clone(),
                brands: option.brands.clone(),
            })
            .collect(),
        charging_time_in_seconds: stop.charging_time_in_seconds,
        target_charge_in_kwh: stop.target_charge_in_kwh,
        target_charge_in_pct: to_percentage(stop.target_charge_in_kwh, battery_capacity_in_kwh),
        charging_stop_type: stop.charging_stop_type.clone(),
    }
}

/// Assembles an address from whichever location fields are present. Returns
/// `None` when the location carries no address field at all.
fn parse_address(location: &ApiChargingParkLocation) -> Option<Address> {
    let street_line = match (&location.street, &location.house_number) {
        (Some(street), Some(number)) => Some(format!("{street} {number}")),
        (Some(street), None) => Some(street.clone()),
        (None, Some(number)) => Some(number.clone()),
        (None, None) => None,
    };
    let city_line = match (&location.postal_code, &location.city) {
        (Some(postal_code), Some(city)) => Some(format!("{postal_code} {city}")),
        (postal_code, city) => postal_code.clone().or_else(|| city.clone()),
    };

    let freeform_address = [
        street_line,
        city_line,
        location.region.clone(),
        location.country.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");

    if freeform_address.is_empty() {
        return None;
    }

    Some(Address {
        street_name: location.street.clone(),
        street_number: location.house_number.clone(),
        municipality: location.city.clone(),
        country_subdivision: location.region.clone(),
        postal_code: location.postal_code.clone(),
        country: location.country.clone(),
        freeform_address,
    })
}
