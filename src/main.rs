//! Bedrock Broker - HTTP front end for AWS Bedrock model invocation

#![allow(missing_docs)]

use bedrock_broker::config::{Config, Validate};
use bedrock_broker::server;
use bedrock_broker::utils::init_logging;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "broker", version, about = "Bedrock model request broker")]
struct Args {
    /// Bind address, overrides the configured HOST
    #[arg(long, env = "BROKER_HOST")]
    host: Option<String>,

    /// Bind port, overrides the configured PORT
    #[arg(long, env = "BROKER_PORT")]
    port: Option<u16>,

    /// Environment file to load instead of `.env`
    #[arg(long, env = "BROKER_ENV_FILE")]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.env_file {
        if let Err(e) = dotenvy::from_path(path) {
            eprintln!("Error: failed to load {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    }

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Err(e) = config.server.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    info!(
        address = %config.server.address(),
        log_level = %config.logging.level,
        json = config.logging.json,
        "Configuration loaded"
    );

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, so nested messages read as one line
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
