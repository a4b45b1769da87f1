//! Binary entry point for `pr-relay`.
//!
//! This module provides the command-line interface for pr-relay with options
//! for the environment file, configuration file, and logging verbosity. It
//! initializes the necessary components and starts the service.

use anyhow::Context;
use clap::Parser;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use pr_relay::base::{config::Config, types::Void};
use tracing_subscriber::{Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Pr-relay – posts GitHub pull requests to Discord, and cleans up after them.
///
/// Configuration comes from environment variables, loaded from a `.env` file
/// at startup, optionally layered over a TOML config file.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// The environment file to load before reading configuration.
    ///
    /// The file must exist; startup fails without it.
    #[arg(short, long, default_value = ".env")]
    env_file: std::path::PathBuf,
    /// An optional TOML config file.
    ///
    /// Environment variables override values from this file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Export spans over OTLP (HTTP) in addition to logging them.
    #[arg(long)]
    otlp: bool,
}

/// Main entry point for the pr-relay binary.
///
/// Sets up logging based on verbosity, loads configuration, and starts the relay.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    // Prepare the otlp layer, if asked for.

    let otel = if args.otlp {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("pr-relay");
        Some(tracing_opentelemetry::layer().with_tracer(tracer).boxed())
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stdout).init();

    // Load the environment file, then the config.

    dotenvy::from_path(&args.env_file).with_context(|| format!("Error loading {} file", args.env_file.display()))?;

    let config = Config::load(args.config.as_deref())?;

    pr_relay::start(config).await
}
