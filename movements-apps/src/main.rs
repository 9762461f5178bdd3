use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use movements_apps::{utils::init_tracing, Error, NodeConfig, RosParams};
use tracing::{debug, error};

/// Publishes the movement drawn in an image as Float64 targets.
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct Args {
    /// Path to the setting file. Falls back to the parameter store of the
    /// hosting node when absent.
    #[arg(short, long)]
    config_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    debug!("opt: {args:?}");

    movements::init(env!("CARGO_BIN_NAME"));

    let config_path = movements_apps::utils::get_node_config_path(args.config_path);
    let config = match config_path {
        Some(path) => NodeConfig::try_new(path),
        None => NodeConfig::from_params(&RosParams),
    };
    let config = match config {
        Ok(config) => config,
        Err(Error::NoImagePath) => {
            error!("no movement image is specified: set the image_path parameter");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    debug!("config: {config:?}");

    let publisher = config.create_publisher()?;
    publisher.start()?;
    Ok(())
}
