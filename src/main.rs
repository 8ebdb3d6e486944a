//! Breeding Planner Binary
//!
//! Loads the kennel from a JSON document, computes the current breeding plan
//! and prints it as pretty JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! breeding-planner [DATA_PATH] [--today YYYY-MM-DD]
//! ```
//!
//! `DATA_PATH` overrides `BREEDING_PLANNER__STORAGE__DATA_PATH`. Logs go to
//! stderr, filtered by `BREEDING_PLANNER__LOGGING__FILTER` (default `info`).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use breeding_planner::adapters::JsonFileKennelStore;
use breeding_planner::application::{RefreshBreedingPlanHandler, RefreshBreedingPlanQuery};
use breeding_planner::config::{AppConfig, LoggingConfig};
use breeding_planner::domain::heat::BreedingPlanner;

#[derive(Parser)]
#[command(name = "breeding-planner", version, about = "Heat cycle prediction and breeding planning")]
struct Cli {
    /// Kennel JSON document (overrides the configured data path)
    data_path: Option<PathBuf>,

    /// Plan as of this date instead of the current UTC date
    #[arg(long)]
    today: Option<NaiveDate>,
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(path) = cli.data_path {
        config.storage.data_path = path;
    }
    config.validate().context("Invalid configuration")?;

    init_logging(&config.logging);

    let store = Arc::new(JsonFileKennelStore::new(&config.storage.data_path));
    info!(path = %store.path().display(), "Loading kennel");

    let handler = RefreshBreedingPlanHandler::new(
        store.clone(),
        store.clone(),
        store,
        BreedingPlanner::new(config.planning.to_parameters()),
        config.retry.to_policy(),
    );

    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    let outcome = handler
        .handle(RefreshBreedingPlanQuery { today })
        .await
        .context("Failed to compute breeding plan")?;

    println!("{}", serde_json::to_string_pretty(&outcome.plan)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_path_and_today_are_optional() {
        let cli = Cli::try_parse_from(["breeding-planner"]).unwrap();
        assert!(cli.data_path.is_none());
        assert!(cli.today.is_none());
    }

    #[test]
    fn parses_data_path_and_today() {
        let cli = Cli::try_parse_from(["breeding-planner", "kennel.json", "--today", "2025-06-01"])
            .unwrap();
        assert_eq!(cli.data_path, Some(PathBuf::from("kennel.json")));
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2025, 6, 1));
    }

    #[test]
    fn rejects_malformed_today() {
        assert!(Cli::try_parse_from(["breeding-planner", "--today", "June 1st"]).is_err());
    }
}
