//! CLI entry point for the AQI reporter.
//!
//! Provides subcommands for reporting the current AQI of a station,
//! evaluating a saved reporting-area response, classifying a bare value,
//! and polling on an interval into a CSV history.

mod infra;
mod services;

use crate::infra::airnow::client::AirNowClient;
use crate::services::reading_source::ReadingSource;
use anyhow::Result;
use aqi_reporter::config::{StationConfig, StationFilter};
use aqi_reporter::error::AqiError;
use aqi_reporter::fetch::{BasicClient, fetch_bytes};
use aqi_reporter::history::Sample;
use aqi_reporter::output::{append_record, print_json, print_pretty};
use aqi_reporter::parser::parse_readings;
use aqi_reporter::reading::Reading;
use aqi_reporter::report::{Report, evaluate};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "aqi_reporter")]
#[command(about = "Reports the current AirNow AQI for a station", long_about = None)]
struct Cli {
    /// JSON station config (falls back to $AQI_CONFIG, then built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the station's readings and print the current AQI as JSON
    Current,
    /// Evaluate a reporting-area JSON document from a file or URL
    Evaluate {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,
    },
    /// Print the category for a bare AQI value
    Classify {
        #[arg(value_name = "AQI")]
        value: u32,
    },
    /// Poll the station on an interval and append each result to a CSV file
    Watch {
        /// CSV file to append results to
        #[arg(short, long, default_value = "aqi_history.csv")]
        output: String,

        /// Sample rate: query the station every X seconds
        #[arg(short = 'r', long, default_value_t = 3600)]
        sample_rate: u64,

        /// Number of samples to collect (0 = infinite)
        #[arg(short = 'n', long, default_value_t = 0)]
        num_samples: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/aqi_reporter.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("aqi_reporter.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    match cli.command {
        Commands::Current => {
            let source = AirNowClient::new(config)?;
            let readings = source.readings().await?;
            let report = report_for(&readings, source.config());
            print_json(&report)?;
        }
        Commands::Evaluate { source } => {
            let bytes = fetcher(&source).await?;
            let readings = parse_readings(&bytes)?;
            print_pretty(&readings);
            let report = report_for(&readings, &config);
            print_json(&report)?;
        }
        Commands::Classify { value } => {
            print_json(&Report::for_value(value))?;
        }
        Commands::Watch {
            output,
            sample_rate,
            num_samples,
        } => {
            let filter = config.filter.clone();
            let source = AirNowClient::new(config)?;
            watch(&source, &filter, &output, sample_rate, num_samples).await?;
        }
    }

    Ok(())
}

/// Resolves the station config from `--config`, `$AQI_CONFIG`, or the
/// defaults, then applies `$AIRNOW_URL`.
fn load_config(path: Option<String>) -> Result<StationConfig> {
    let path = path.or_else(|| std::env::var("AQI_CONFIG").ok());
    let config = match path {
        Some(path) => StationConfig::load(&path)?,
        None => StationConfig::default(),
    };
    let config = config.with_endpoint(std::env::var("AIRNOW_URL").ok());

    debug!(
        area = %config.filter.area_name,
        pollutant = %config.filter.pollutant,
        endpoint = %config.endpoint,
        "Station config loaded"
    );
    Ok(config)
}

/// Builds the client-facing report, rendering ERROR when no reading can be
/// selected.
fn report_for(readings: &[Reading], config: &StationConfig) -> Report {
    match evaluate(readings, &config.filter) {
        Ok(assessment) => {
            info!(
                aqi = assessment.value,
                category = %assessment.category,
                issued_on = %assessment.issued_on,
                "Current reading selected"
            );
            Report::from(&assessment)
        }
        Err(e @ AqiError::NoPrimarySource { .. }) => {
            warn!(error = %e, "No reading to report");
            Report::unavailable()
        }
        Err(e @ AqiError::DateParse { .. }) => {
            error!(error = %e, "Reading batch rejected");
            Report::unavailable()
        }
    }
}

/// Loads reporting-area data from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %url))]
async fn fetcher(url: &str) -> Result<Vec<u8>> {
    let bytes = if url.starts_with("http") {
        let client = BasicClient::with_timeouts()?;
        fetch_bytes(&client, url).await?
    } else {
        std::fs::read(url)?
    };
    Ok(bytes)
}

/// Polls `source` every `sample_rate` seconds, appending one row per round.
#[tracing::instrument(skip(source, filter))]
async fn watch<S: ReadingSource>(
    source: &S,
    filter: &StationFilter,
    output: &str,
    sample_rate: u64,
    num_samples: usize,
) -> Result<()> {
    if num_samples == 0 {
        info!(sample_rate, "Sampling infinitely. Press Ctrl+C to stop.");
    } else {
        info!(num_samples, sample_rate, "Starting sample collection");
    }

    let mut sample_count = 0;

    loop {
        // Check if we've reached the sample limit (0 = infinite)
        if num_samples > 0 && sample_count >= num_samples {
            break;
        }

        sample_count += 1;

        let fetch_start = std::time::Instant::now();
        let sample = match source.readings().await {
            Ok(readings) => {
                let elapsed = fetch_start.elapsed();
                if elapsed.as_secs() > 15 {
                    warn!(elapsed_secs = elapsed.as_secs(), "Reading fetch was slow");
                }
                match evaluate(&readings, filter) {
                    Ok(assessment) => {
                        info!(
                            sample = sample_count,
                            aqi = assessment.value,
                            category = %assessment.category,
                            "Sample collected"
                        );
                        Sample::from_assessment(&assessment)
                    }
                    Err(e) => {
                        error!(error = %e, "Reading selection failed");
                        let error_type = match &e {
                            AqiError::NoPrimarySource { .. } => "no_primary_source",
                            AqiError::DateParse { .. } => "date_parse_error",
                        };
                        Sample::from_error(error_type, &e.to_string())
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "Reading fetch failed");
                Sample::from_error("fetch_error", &format!("{e:#}"))
            }
        };

        if let Err(e) = append_record(output, &sample.with_station(filter)) {
            error!(error = %e, "Failed to write sample");
        }

        // If not the last sample, wait before next iteration
        if num_samples == 0 || sample_count < num_samples {
            debug!(sample_rate, "Waiting before next sample");
            tokio::time::sleep(tokio::time::Duration::from_secs(sample_rate)).await;
        }
    }

    info!(output, "Finished sampling");
    Ok(())
}
