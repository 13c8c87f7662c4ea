use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::{plan::PlanArgs, route::RouteArgs};

mod output;
mod parsers;
mod plan;
mod route;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a route between positions given on the command line
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Calculate a route from a request document
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    /// Print the assembled wire request for a request document without sending it
    Request {
        /// Request document (CalculateRouteParams JSON)
        #[arg(short = 'i', long)]
        input: PathBuf,
    },
    /// Print the JSON Schema of request documents
    Schema {
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Route { args }) => route::run(args).await?,
        Some(Commands::Plan { args }) => plan::run(args).await?,
        Some(Commands::Request { input }) => plan::print_request(&input)?,
        Some(Commands::Schema { out }) => {
            let schema = orbis_routing::schema::generate_json_schema()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, schema)?;
                    info!("Schema has been written to {:?}", path);
                }
                None => println!("{schema}"),
            }
        }
        None => {}
    }

    Ok(())
}
