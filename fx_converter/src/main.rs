//! Currency converter - command-line shell around `ConversionPresenter`.
//!
//! Usage example (CLI):
//! ```bash
//! fx_converter --amount 100 --from usd --to eur
//! RATE_API_BASE_URL=https://api.exchangerate.host RATE_API_KEY=... \
//!     fx_converter --amount 250 --from gbp --to ngn --live-secs 5
//! ```
//!
//! The rate source is picked once at start-up (see `fx_rates::config`). With
//! `--live-secs`, the same request is re-run on a fixed interval until Ctrl+C, after
//! which the rate source is shut down.
#![warn(missing_docs)]
mod args;
mod console_view;

use crate::args::Args;
use crate::console_view::ConsoleView;
use clap::Parser;
use crossbeam_channel::{select, tick, unbounded};
use fx_common::{ConverterError, Currency, RateResolver, Result};
use fx_converter::ConversionPresenter;
use fx_rates::RateSourceConfig;
use log::info;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<ExitCode, ConverterError> {
    init_logger();
    let args = Args::parse();

    let source = RateSourceConfig::from_env().with_mode(args.source).build()?;
    info!("Rate source: {}", source.name());

    let view = Arc::new(ConsoleView::new());
    let resolver: Arc<dyn RateResolver> = Arc::new(source.clone());
    let mut presenter = ConversionPresenter::new(resolver);
    presenter.attach_view(view.clone());

    let (from, to) = args.pair();
    let outcome = match args.live_secs {
        Some(secs) => run_live(&presenter, args.amount.as_deref(), from, to, Duration::from_secs(secs)),
        None => {
            presenter.on_convert(args.amount.as_deref(), from, to);
            Ok(())
        }
    };

    source.shutdown()?;
    outcome?;

    if view.has_error() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Re-run the conversion every `interval` until Ctrl+C.
fn run_live(
    presenter: &ConversionPresenter,
    amount: Option<&str>,
    from: Option<Currency>,
    to: Option<Currency>,
    interval: Duration,
) -> Result<()> {
    let (stop_tx, stop_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Stopping live updates...");
        let _ = stop_tx.send(());
    })
    .map_err(|e| ConverterError::Signal(e.to_string()))?;

    info!("Live updates every {:?}. Press Ctrl+C to exit.", interval);
    let ticker = tick(interval);
    presenter.on_convert(amount, from, to);
    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(ticker) -> _ => presenter.on_convert(amount, from, to),
        }
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
