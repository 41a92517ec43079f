//! Hospital feed command-line client.
//!
//! Fetches hospitals from the backend API and prints them, mapped to the
//! frontend record format, as pretty JSON on stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use hospital_feed::config::{load_config, validate_config, ConfigError, FeedConfig};
use hospital_feed::fetcher::{BedType, HospitalFilter, NearbyQuery, DEFAULT_RADIUS_MILES};
use hospital_feed::observability::{logging, metrics};
use hospital_feed::HospitalFetcher;

#[derive(Parser)]
#[command(name = "hospital-feed")]
#[command(about = "Fetch hospitals from the backend API in frontend format", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides the config file)
    #[arg(short, long, env = "HOSPITAL_FEED_BASE_URL")]
    base_url: Option<String>,

    /// Exit with an error on fetch failure instead of printing an empty result
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all hospitals
    List,
    /// Show one hospital by backend id
    Get { id: String },
    /// Hospitals near a point, closest first
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Search radius in miles
        #[arg(long, default_value_t = DEFAULT_RADIUS_MILES)]
        radius: u32,
    },
    /// Hospitals matching bed and service criteria
    Filter {
        /// all, er, icu, pediatric, or maternity
        #[arg(long)]
        bed_type: Option<BedType>,
        /// Only hospitals with a free bed
        #[arg(long)]
        available: bool,
        /// Only hospitals offering emergency services
        #[arg(long)]
        emergency: bool,
    },
    /// Aggregate backend statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        base_url = %config.backend.base_url,
        request_timeout_secs = ?config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let fetcher = HospitalFetcher::new(&config)?;

    match cli.command {
        Commands::List => {
            let hospitals = if cli.strict {
                fetcher.try_fetch_hospitals().await?
            } else {
                fetcher.fetch_hospitals().await
            };
            print_json(&hospitals)?;
        }
        Commands::Get { id } => {
            let hospital = if cli.strict {
                fetcher.try_fetch_hospital(&id).await?
            } else {
                fetcher.fetch_hospital(&id).await
            };
            match hospital {
                Some(h) => print_json(&h)?,
                None => {
                    eprintln!("Hospital {} not found", id);
                    std::process::exit(1);
                }
            }
        }
        Commands::Nearby { lat, lng, radius } => {
            let query = NearbyQuery::new(lat, lng).with_radius(radius);
            let hospitals = if cli.strict {
                fetcher.try_fetch_nearby(query).await?
            } else {
                fetcher.fetch_nearby(query).await
            };
            print_json(&hospitals)?;
        }
        Commands::Filter { bed_type, available, emergency } => {
            let filter = HospitalFilter {
                bed_type,
                available: available.then_some(true),
                emergency: emergency.then_some(true),
            };
            let hospitals = if cli.strict {
                fetcher.try_fetch_filtered(filter).await?
            } else {
                fetcher.fetch_filtered(filter).await
            };
            print_json(&hospitals)?;
        }
        Commands::Stats => {
            let stats = if cli.strict {
                Some(fetcher.try_fetch_stats().await?)
            } else {
                fetcher.fetch_stats().await
            };
            print_json(&stats)?;
        }
    }

    Ok(())
}

/// Config file (or defaults), then the base URL override, validated once more.
fn resolve_config(cli: &Cli) -> Result<FeedConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FeedConfig::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
