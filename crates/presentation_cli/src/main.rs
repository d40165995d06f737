//! MealFinder CLI
//!
//! Drives the restaurant search form from the terminal: renders the
//! form state, runs a search and opens directions to the random pick.

#![allow(clippy::print_stdout)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use application::ports::{GeolocationPort, NavigatorPort};
use application::{MealFinder, MealFinderConfig, SubmitOutcome};
use clap::{Parser, Subcommand};
use domain::PriceTier;
use infrastructure::adapters::{
    AiSearchAdapter, CommandNavigator, ConfigSessionAdapter, LoggingNavigator, PlacesAdapter,
    StaticGeolocationAdapter, UnsupportedGeolocationAdapter,
};
use infrastructure::{AppConfig, init_tracing};

/// MealFinder CLI
#[derive(Parser)]
#[command(name = "mealfinder")]
#[command(author, version, about = "Find a random nearby restaurant and open directions", long_about = None)]
struct Cli {
    /// Path to a configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the form without submitting
    Form,

    /// Run one search and open directions to a random result
    Search {
        /// Search radius in kilometers (1-25)
        #[arg(short, long)]
        distance: Option<u8>,

        /// Price tier (0 = any, 1-4 = $ to $$$$)
        #[arg(short, long)]
        price: Option<u8>,

        /// AI filter text (premium sessions only)
        #[arg(short, long)]
        filter: Option<String>,

        /// Print the directions URL instead of opening a browser
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&cli, &config)?;

    match cli.command {
        Commands::Form => run_form(&config).await,
        Commands::Search {
            distance,
            price,
            filter,
            dry_run,
        } => run_search(&config, distance, price, filter, dry_run).await,
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display())),
        None => AppConfig::load().context("failed to load configuration"),
    }
}

fn init_logging(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let mut log = config.log.clone();
    match cli.verbose {
        0 => {},
        1 => log.level = "debug".to_string(),
        _ => log.level = "trace".to_string(),
    }
    init_tracing(&log).map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

/// Wire the component from configuration
fn build_finder(config: &AppConfig, dry_run: bool) -> anyhow::Result<MealFinder> {
    let origin = config
        .home
        .coordinates()
        .context("invalid home coordinates")?;
    let finder_config =
        MealFinderConfig::new(origin).with_maps_base_url(config.maps_base_url.clone());

    let geolocation: Arc<dyn GeolocationPort> = match config.geolocation {
        Some(position) => Arc::new(StaticGeolocationAdapter::from_config(&position)?),
        None => Arc::new(UnsupportedGeolocationAdapter),
    };
    let navigator: Arc<dyn NavigatorPort> = if dry_run {
        Arc::new(LoggingNavigator)
    } else {
        Arc::new(CommandNavigator::new())
    };

    Ok(MealFinder::new(
        finder_config,
        geolocation,
        Arc::new(PlacesAdapter::with_config(config.places.clone())?),
        Arc::new(AiSearchAdapter::with_config(config.ai_search.clone())?),
        navigator,
        Arc::new(ConfigSessionAdapter::from_config(&config.session)?),
    ))
}

async fn run_form(config: &AppConfig) -> anyhow::Result<()> {
    let finder = build_finder(config, true)?;
    finder.mount().await;

    println!("{}", finder.view().render());

    finder.unmount();
    Ok(())
}

async fn run_search(
    config: &AppConfig,
    distance: Option<u8>,
    price: Option<u8>,
    filter: Option<String>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let finder = build_finder(config, dry_run)?;
    finder.mount().await;

    if let Some(km) = distance {
        finder.set_distance(km);
    }
    if let Some(level) = price {
        finder.set_price(PriceTier::try_from_level(level)?);
    }
    if let Some(text) = filter {
        finder.set_mystery_filter(&text);
    }

    println!("{}", finder.view().render());

    match finder.submit().await {
        SubmitOutcome::Opened { destination, url } => {
            println!("Opened directions to {destination}");
            println!("{url}");
        },
        SubmitOutcome::NoResults => {
            println!("No restaurants found. Try a wider distance or another price tier.");
        },
        SubmitOutcome::Failed(message) => {
            println!("Search failed: {message}");
        },
        SubmitOutcome::NotReady => {
            let reason = finder
                .view()
                .error
                .unwrap_or_else(|| "location required".to_string());
            println!("Search unavailable: {reason}");
        },
    }

    finder.unmount();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_flags_parse() {
        let cli = Cli::parse_from([
            "mealfinder",
            "search",
            "--distance",
            "10",
            "--price",
            "2",
            "--filter",
            "ramen",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Search {
                distance,
                price,
                filter,
                dry_run,
            } => {
                assert_eq!(distance, Some(10));
                assert_eq!(price, Some(2));
                assert_eq!(filter.as_deref(), Some("ramen"));
                assert!(dry_run);
            },
            Commands::Form => unreachable!("expected search subcommand"),
        }
    }

    #[test]
    fn form_subcommand_parses() {
        let cli = Cli::parse_from(["mealfinder", "-v", "form"]);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Form));
    }
}
