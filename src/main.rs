//! wg24-conf - generate a WireGuard client config
//!
//! Registers a freshly generated public key with the server and writes
//! `wg24.conf` into the output directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wg24_conf::config::{Config, Overrides};
use wg24_conf::registration::HttpPeerRegistration;
use wg24_conf::saver::DirectorySaver;
use wg24_conf::wireguard::X25519KeyGenerator;
use wg24_conf::ConfigGenerator;

/// Generate a WireGuard client config registered with a wg24 server
#[derive(Parser, Debug)]
#[command(name = "wg24-conf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the registration server
    #[arg(short, long)]
    server: Option<String>,

    /// Host written into the Endpoint line (default: server URL host)
    #[arg(long)]
    endpoint_host: Option<String>,

    /// Directory to write wg24.conf into
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Additional configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "wg24_conf=debug"
    } else {
        "wg24_conf=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match run(args).await {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!("Config generation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<PathBuf> {
    let config = Config::load(&Overrides {
        config_file: args.config,
        server_url: args.server,
        endpoint_host: args.endpoint_host,
        output_dir: args.output,
    })?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let server_url = config.server_url()?;
    let endpoint_host = config.endpoint_host()?;
    let registration = HttpPeerRegistration::new(&server_url, config.request_timeout())?;

    let generator = ConfigGenerator::new(
        Box::new(X25519KeyGenerator),
        Box::new(registration),
        Box::new(DirectorySaver::new(&config.output_dir)),
        endpoint_host,
    );

    Ok(generator.generate_config().await?)
}
