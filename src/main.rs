use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use electre_tri::adapters::{FileDatasetReader, FileReportWriter};
use electre_tri::application::{SortItemsCommand, SortItemsHandler};
use electre_tri::config::{AppConfig, LogFormat, LoggingConfig};

/// Sort items into ordered categories with ELECTRE TRI.
#[derive(Parser, Debug)]
#[command(name = "electre-tri")]
#[command(version)]
#[command(about = "Multicriteria sorting of items into ordered categories.", long_about = None)]
struct Cli {
    /// Profiles table (.yaml, .yml or .json)
    #[arg(long)]
    profiles_file: Option<PathBuf>,

    /// Criteria table (.yaml, .yml or .json)
    #[arg(long)]
    criteria_file: Option<PathBuf>,

    /// Items table (.yaml, .yml or .json)
    #[arg(long)]
    items_file: Option<PathBuf>,

    /// Report path (default: output.yaml next to the items file)
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Majority threshold in [0, 1]
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Category labels, comma-separated, lowest first
    #[arg(short, long)]
    categories: Option<String>,

    /// Log output format (pretty, json)
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    /// Overlay flags onto the loaded configuration
    fn apply(self, config: &mut AppConfig) -> Result<()> {
        if let Some(path) = self.profiles_file {
            config.data.profiles_file = path;
        }
        if let Some(path) = self.criteria_file {
            config.data.criteria_file = path;
        }
        if let Some(path) = self.items_file {
            config.data.items_file = path;
        }
        if let Some(path) = self.output_file {
            config.data.output_file = Some(path);
        }
        if let Some(threshold) = self.threshold {
            config.sorting.threshold = threshold;
        }
        if let Some(categories) = self.categories {
            config.sorting.categories = categories;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format.parse::<LogFormat>()?;
        }
        Ok(())
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Pretty => Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_target(true))
            .init(),
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    cli.apply(&mut config)?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging);

    let command = SortItemsCommand {
        profiles_path: config.data.profiles_file.clone(),
        criteria_path: config.data.criteria_file.clone(),
        items_path: config.data.items_file.clone(),
        output_path: config.data.resolved_output(),
        threshold: config.sorting.majority_threshold()?,
        categories: config.sorting.category_scale()?,
    };

    info!(
        items = %command.items_path.display(),
        threshold = command.threshold.value(),
        "Starting ELECTRE TRI run"
    );

    let handler = SortItemsHandler::new(
        Arc::new(FileDatasetReader::new()),
        Arc::new(FileReportWriter::new()),
    );

    match handler.handle(command) {
        Ok(result) => {
            info!(output = %result.output_path.display(), "Report written");
            Ok(())
        }
        Err(err) => {
            match err.code() {
                Some(code) => error!(code = %code, error = %err, "Sorting run failed"),
                None => error!(error = %err, "Sorting run failed"),
            }
            Err(err.into())
        }
    }
}
