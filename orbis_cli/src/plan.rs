use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use clap::Args;
use orbis_routing::{
    CalculateRouteParams, OrbisRoutingClient, RoutingClientParams,
    request::builder::build_calculate_route_request,
    validation::{CalculateRouteSchema, validate},
};
use tracing::info;

use crate::output;

#[derive(Args)]
pub struct PlanArgs {
    /// Request document (CalculateRouteParams JSON)
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Write the full routes as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

fn read_params(input: &Path) -> anyhow::Result<CalculateRouteParams> {
    let f = File::open(input)?;
    let params: CalculateRouteParams = serde_json::from_reader(BufReader::new(f))?;
    Ok(params)
}

pub async fn run(args: PlanArgs) -> anyhow::Result<()> {
    let params = read_params(&args.input)?;
    let client = OrbisRoutingClient::from_env()?;

    info!("Planning {:?}", args.input);
    let routes = client.calculate_route(&params).await?;

    output::print_routes(&routes, args.out.as_deref())
}

/// Prints method, URL and body of the request `input` would produce. The API key
/// is only read from the environment when set, so this works offline.
pub fn print_request(input: &Path) -> anyhow::Result<()> {
    let params = read_params(input)?;
    let params = validate(&params, &CalculateRouteSchema)?;

    let client_params = RoutingClientParams::from_env()
        .unwrap_or_else(|_| RoutingClientParams::new("{ORBIS_API_KEY}"));
    let request = build_calculate_route_request(params, &client_params);

    println!("{} {}", request.method, request.url()?);
    if let Some(body) = &request.body {
        println!("{}", serde_json::to_string_pretty(body)?);
    }

    Ok(())
}
