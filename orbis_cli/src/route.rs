use std::path::PathBuf;

use clap::Args;
use jiff::Timestamp;
use orbis_routing::{
    CalculateRouteParams, GeoInput, OrbisRoutingClient, Waypoint,
    request::params::{Avoidable, GuidanceParams, RouteTime, TrafficPreference, TravelMode},
};
use tracing::info;

use crate::{output, parsers};

#[derive(Args)]
pub struct RouteArgs {
    /// Origin as lon,lat[,radius]
    #[arg(long, value_parser = parsers::parse_position)]
    from: Waypoint,

    /// Destination as lon,lat[,radius]
    #[arg(long, value_parser = parsers::parse_position)]
    to: Waypoint,

    /// Intermediate stops as lon,lat[,radius], in travel order
    #[arg(long, value_parser = parsers::parse_position)]
    via: Vec<Waypoint>,

    #[arg(long, value_parser = parsers::parse_option::<TravelMode>)]
    travel_mode: Option<TravelMode>,

    /// live or historical
    #[arg(long, value_parser = parsers::parse_option::<TrafficPreference>)]
    traffic: Option<TrafficPreference>,

    #[arg(long, value_parser = parsers::parse_option::<Avoidable>)]
    avoid: Vec<Avoidable>,

    /// RFC 3339 departure time
    #[arg(long)]
    depart_at: Option<Timestamp>,

    #[arg(long)]
    alternatives: Option<u8>,

    /// Request turn-by-turn guidance
    #[arg(short, long)]
    guidance: bool,

    #[arg(long)]
    language: Option<String>,

    /// Write the full routes as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

impl RouteArgs {
    fn into_params(self) -> CalculateRouteParams {
        let geo_inputs: Vec<GeoInput> = std::iter::once(self.from)
            .chain(self.via)
            .chain(std::iter::once(self.to))
            .map(GeoInput::from)
            .collect();

        CalculateRouteParams {
            language: self.language,
            avoid: self.avoid,
            traffic: self.traffic,
            travel_mode: self.travel_mode,
            when: self.depart_at.map(RouteTime::DepartAt),
            guidance: self.guidance.then(GuidanceParams::default),
            max_alternatives: self.alternatives,
            ..CalculateRouteParams::new(geo_inputs)
        }
    }
}

pub async fn run(args: RouteArgs) -> anyhow::Result<()> {
    let out = args.out.clone();
    let params = args.into_params();
    let client = OrbisRoutingClient::from_env()?;

    info!("Calculating route through {} stops", params.geo_inputs.len());
    let routes = client.calculate_route(&params).await?;
    info!("Received {} routes", routes.len());

    output::print_routes(&routes, out.as_deref())
}
