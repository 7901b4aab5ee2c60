//! Command line parsing.
//!
//! Counts are kept as the raw strings the user typed and handed to
//! [`OrderForm`] so the command line and the web form are validated by the
//! same rules.

use printworks_core::OrderForm;
use std::path::PathBuf;

use crate::config::{ConfigError, OutputFormat};

pub const USAGE: &str = "\
Printworks price quote

Usage: printworks-quote --pages <N> --quantity <N> [OPTIONS]

Options:
  -p, --pages <N>        Pages per book
  -q, --quantity <N>     Number of copies
  -c, --cover <COVER>    hard_cover | soft_cover (anything else: no cover fee)
  -t, --paper <PAPER>    coated_book_paper (anything else: no paper fee)
  -f, --format <FORMAT>  text | json (overrides config)
      --config <PATH>    Config file (default: platform config dir)
  -h, --help             Show this help message
";

/// What the user asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quote(QuoteArgs),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct QuoteArgs {
    pub pages: String,
    pub quantity: String,
    pub cover: String,
    pub paper: String,
    pub format: Option<OutputFormat>,
    pub config: Option<PathBuf>,
}

impl QuoteArgs {
    /// The pricing half of an order form.
    pub fn to_form(&self) -> OrderForm {
        OrderForm {
            page_amount: self.pages.clone(),
            book_quantity: self.quantity.clone(),
            book_cover: self.cover.clone(),
            paper_type: self.paper.clone(),
            ..OrderForm::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error(transparent)]
    InvalidFormat(#[from] ConfigError),
}

/// Parses arguments (without the program name).
pub fn parse<I>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut quote = QuoteArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = || args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()));

        match arg.as_str() {
            "--pages" | "-p" => quote.pages = value()?,
            "--quantity" | "-q" => quote.quantity = value()?,
            "--cover" | "-c" => quote.cover = value()?,
            "--paper" | "-t" => quote.paper = value()?,
            "--format" | "-f" => quote.format = Some(value()?.parse()?),
            "--config" => quote.config = Some(PathBuf::from(value()?)),
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(ArgsError::UnknownArgument(arg)),
        }
    }

    Ok(Command::Quote(quote))
}
