//! # printworks-quote
//!
//! Prices a print order from the command line.
//!
//! ## Usage
//! ```bash
//! # 100-page hard cover book, 2 copies
//! cargo run -p printworks-quote -- --pages 100 --quantity 2 --cover hard_cover
//!
//! # JSON output, with pricing logged
//! PRINTWORKS_LOG_LEVEL=debug cargo run -p printworks-quote -- -p 150 -q 1 -t coated_book_paper -f json
//! ```

mod args;
mod config;
mod output;

use std::process::ExitCode;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::{Command, USAGE};
use crate::config::{OutputFormat, QuoteConfig};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let quote = match args::parse(std::env::args().skip(1))? {
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Command::Quote(quote) => quote,
    };

    let config = QuoteConfig::load(quote.config.clone())?;
    init_tracing(&config.log.level);

    match &config.source {
        Some(path) => info!(?path, "Loaded quote config"),
        None => debug!("No config file, using defaults"),
    }
    if config.rates.is_some() {
        warn!("Pricing with a custom rate card from config");
    }

    let order = quote.to_form().pricing_input()?;
    let price = config.rate_card().price(&order);

    let format = quote.format.unwrap_or(config.output.format);
    match format {
        OutputFormat::Text => print!("{}", output::render_text(&order, &price)),
        OutputFormat::Json => println!("{}", output::render_json(&order, &price)?),
    }

    Ok(())
}

/// Initializes logging to stderr so stdout stays clean for the quote.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
