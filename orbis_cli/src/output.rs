use std::path::Path;

use comfy_table::{Table, presets::UTF8_FULL};
use orbis_routing::Routes;
use tracing::info;

pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{hours}h{minutes:02}m{seconds:02}s")
    } else {
        format!("{minutes}m{seconds:02}s")
    }
}

pub fn format_distance(meters: u64) -> String {
    format!("{:.1} km", meters as f64 / 1000.0)
}

pub fn summary_table(routes: &Routes) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Route",
        "Legs",
        "Distance",
        "Travel time",
        "Traffic delay",
        "Battery used",
        "Charging stops",
    ]);

    for route in &routes.routes {
        let summary = &route.properties.summary;
        let charging_stops = route
            .properties
            .sections
            .leg
            .iter()
            .filter(|leg| leg.summary.charging_stop.is_some())
            .count();

        table.add_row(vec![
            route.index.to_string(),
            route.leg_count().to_string(),
            format_distance(summary.length_in_meters),
            format_duration(summary.travel_time_in_seconds),
            format_duration(summary.traffic_delay_in_seconds),
            summary
                .battery_consumption_in_kwh
                .map(|kwh| format!("{kwh:.1} kWh"))
                .unwrap_or_else(|| "-".to_string()),
            charging_stops.to_string(),
        ]);
    }

    table
}

pub fn print_routes(routes: &Routes, out: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", summary_table(routes));

    if let Some(path) = out {
        std::fs::write(path, serde_json::to_string_pretty(routes)?)?;
        info!("Routes have been written to {:?}", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(59), "0m59s");
        assert_eq!(format_duration(2310), "38m30s");
        assert_eq!(format_duration(11020), "3h03m40s");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(41230), "41.2 km");
    }
}
