//! Command-line arguments for the converter.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use fx_common::Currency;
use fx_rates::SourceMode;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Amount to convert, as typed by the user.
    #[clap(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Currency to convert from.
    #[clap(long, value_enum, ignore_case = true)]
    pub from: Option<Currency>,

    /// Currency to convert to.
    #[clap(long, value_enum, ignore_case = true)]
    pub to: Option<Currency>,

    /// Rate source. `auto` uses RATE_API_BASE_URL when set, the built-in table otherwise.
    #[clap(long, value_enum, default_value_t = SourceMode::Auto)]
    pub source: SourceMode,

    /// Swap the from/to currencies before converting.
    #[clap(long)]
    pub swap: bool,

    /// Repeat the conversion every N seconds until Ctrl+C.
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub live_secs: Option<u64>,
}

impl Args {
    /// Currency pair after applying `--swap`.
    pub fn pair(&self) -> (Option<Currency>, Option<Currency>) {
        if self.swap {
            (self.to, self.from)
        } else {
            (self.from, self.to)
        }
    }
}
