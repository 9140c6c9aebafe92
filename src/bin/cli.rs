//! ikpec archiver CLI
//!
//! Scrapes the configured monthly decision lists and writes Markdown documents.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use ikpec::{
    error::{AppError, Result},
    models::{Config, TargetPeriod},
    pipeline::{self, Archiver},
    services::{ExtractionStrategy, SiteExtractor},
    storage::LocalStorage,
    utils::{http::HttpFetcher, text},
};

/// ikpec - Press Ethics Commission decision archiver
#[derive(Parser, Debug)]
#[command(
    name = "ikpec",
    version,
    about = "Archives press ethics adjudications as Markdown"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Override the output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape configured periods and write documents
    Scrape {
        /// Only periods of this year
        #[arg(long)]
        year: Option<i32>,

        /// Only periods of this month
        #[arg(long)]
        month: Option<u32>,
    },

    /// List configured periods
    Targets,

    /// Validate the configuration file
    Validate,

    /// Parse a saved page offline and print the result as JSON
    Inspect {
        /// Kind of page
        #[arg(value_enum)]
        kind: PageKind,

        /// Saved HTML file
        file: PathBuf,

        /// Print the visible page text instead of parsed records
        #[arg(long)]
        raw: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PageKind {
    List,
    Detail,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn select_targets(config: &Config, year: Option<i32>, month: Option<u32>) -> Vec<TargetPeriod> {
    config
        .targets
        .iter()
        .filter(|t| year.is_none_or(|y| t.year == y))
        .filter(|t| month.is_none_or(|m| t.month == m))
        .cloned()
        .collect()
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, load_error) = match Config::load(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logging(cli.verbose, &config.logging.level);
    match load_error {
        Some(e) => log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        ),
        None => log::info!("Loaded configuration from {}", cli.config.display()),
    }
    if let Some(output) = &cli.output {
        config.output.dir = output.display().to_string();
    }

    match cli.command {
        Command::Scrape { year, month } => {
            config.validate()?;

            let targets = select_targets(&config, year, month);
            if targets.is_empty() {
                log::error!("No configured period matches the given filter");
                return Err(AppError::config("No target periods selected"));
            }
            log::info!("Archiving {} period(s) into {}", targets.len(), config.output.dir);

            let archiver = Archiver::new(
                Arc::new(SiteExtractor::new(&config.selectors)?),
                Arc::new(HttpFetcher::new(&config.crawler)?),
                Arc::new(LocalStorage::new(&config.output.dir)),
                config.site.base()?,
                config.crawler.clone(),
            );
            let summary = pipeline::run_archive(&archiver, &targets).await;

            for report in &summary.reports {
                log::info!(
                    "{}: listed {}, merged {}, skipped {}, saved {}",
                    report.period,
                    report.listed,
                    report.merged,
                    report.skipped,
                    report.saved
                );
            }
        }

        Command::Targets => {
            for target in &config.targets {
                println!("{}\t{}", target.period(), target.url);
            }
            log::info!("{} period(s) configured", config.targets.len());
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Site base: {}", config.site.base_url);
            log::info!("✓ Targets: {}", config.targets.len());
            log::info!("✓ Selectors compile");
            log::info!("All validations passed!");
        }

        Command::Inspect { kind, file, raw } => {
            let html = std::fs::read_to_string(&file)?;
            if raw {
                println!("{}", text::page_text(&html));
                return Ok(());
            }

            let strategy = SiteExtractor::new(&config.selectors)?;
            let json = match kind {
                PageKind::List => {
                    let entries = strategy.extract_list(&html, &config.site.base()?);
                    log::info!("{} entries parsed from {}", entries.len(), file.display());
                    serde_json::to_string_pretty(&entries)?
                }
                PageKind::Detail => serde_json::to_string_pretty(&strategy.extract_detail(&html))?,
            };
            println!("{json}");
        }
    }

    Ok(())
}
