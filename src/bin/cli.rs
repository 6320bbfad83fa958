//! Lotto CLI
//!
//! Offline tool for inspecting saved lottery site pages.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use lotto::{
    config::Config,
    document::{SourceEncoding, StructuredDocument},
    error::Result,
    models::{EmailMessage, PurchaseDetail},
    services,
};
use serde::Serialize;

/// Lotto - saved page extractor and winning checker
#[derive(Parser, Debug)]
#[command(name = "lotto", version, about = "Lottery page extractor and winning checker")]
struct Cli {
    /// Encoding of the saved pages
    #[arg(short, long, value_enum, default_value_t = SourceEncoding::EucKr, global = true)]
    encoding: SourceEncoding,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract one saved page and print the result as JSON
    Parse {
        /// Kind of page
        #[arg(value_enum)]
        page: Page,

        /// Saved page file
        file: PathBuf,
    },

    /// Check purchased slots against a draw
    Check {
        /// Saved winning numbers page
        #[arg(long)]
        winning: PathBuf,

        /// Saved purchase detail pages
        #[arg(required = true)]
        details: Vec<PathBuf>,
    },

    /// Validate configuration from the environment
    Validate,

    /// Render the failure notification for an operation
    Failure {
        /// Name of the failed operation
        operation: String,

        /// Error text to include
        message: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Page {
    Login,
    Balance,
    Round,
    PurchaseList,
    PurchaseDetail,
    Winning,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn load(path: &Path, encoding: SourceEncoding) -> Result<StructuredDocument> {
    log::debug!("Reading {} as {}", path.display(), encoding.name());
    StructuredDocument::from_reader(File::open(path)?, encoding)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_page(page: Page, path: &Path, encoding: SourceEncoding) -> Result<()> {
    let document = load(path, encoding)?;

    match page {
        Page::Login => {
            services::parse_login(&document)?;
            log::info!("✓ Login succeeded");
        }
        Page::Balance => {
            let balance = services::parse_balance(&document)?;
            for (label, value) in balance.summary_items() {
                log::info!("{label}: {value}");
            }
            print_json(&balance)?;
        }
        Page::Round => {
            let round = services::parse_current_round(&document)?;
            log::info!("Current round: {round}");
            print_json(&round)?;
        }
        Page::PurchaseList => {
            let purchases = services::parse_purchase_list(document.source())?;
            log::info!("Found {} purchases", purchases.len());
            print_json(&purchases)?;
        }
        Page::PurchaseDetail => {
            let page = services::parse_purchase_detail(&document)?;
            log::info!("Round {}: {} slots", page.round, page.details.len());
            print_json(&page)?;
        }
        Page::Winning => {
            let draw = services::parse_winning_numbers(&document)?;
            for prize in draw.prizes().iter() {
                log::info!("{prize}");
            }
            print_json(&draw)?;
        }
    }

    Ok(())
}

fn check(winning: &Path, details: &[PathBuf], encoding: SourceEncoding) -> Result<()> {
    let draw = services::parse_winning_numbers(&load(winning, encoding)?)?;
    log::info!("Loaded draw for round {}", draw.round());

    let mut slots: Vec<PurchaseDetail> = Vec::new();
    for path in details {
        let page = services::parse_purchase_detail(&load(path, encoding)?)?;
        if page.round != draw.round() {
            log::warn!(
                "{} is for round {}, not {}; skipping",
                path.display(),
                page.round,
                draw.round()
            );
            continue;
        }
        slots.extend(page.details);
    }

    let summary = services::summarize(&draw, &slots);
    log::info!("{summary}");
    for ticket in summary.unpublished_wins() {
        log::warn!("Slot {} prize is not published yet", ticket.slot);
    }

    let message = EmailMessage::check_result(&summary);
    println!("{}\n\n{}", message.subject, message.body);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Parse { page, file } => parse_page(page, &file, cli.encoding)?,

        Command::Check { winning, details } => check(&winning, &details, cli.encoding)?,

        Command::Validate => {
            log::info!("Validating configuration...");

            let config = match Config::from_env() {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Config validation failed: {}", e);
                    return Err(e);
                }
            };
            log::info!("✓ Config OK: {:?}", config);
        }

        Command::Failure { operation, message } => {
            let mail = EmailMessage::failure(&operation, &message);
            println!("{}\n\n{}", mail.subject, mail.body);
        }
    }

    Ok(())
}
