//! Conversion presenter.
//!
//! `ConversionPresenter::on_convert` runs one request end to end: it clears the view's
//! error area, validates the raw input, asks the resolver for a quote, and renders either
//! exactly one error message or a result line plus a last-updated line. The first failing
//! check wins:
//!
//! 1. amount missing or blank;
//! 2. amount not a finite number;
//! 3. amount negative (zero is allowed);
//! 4. either currency not selected;
//! 5. resolver has no rate for the pair.
//!
//! The presenter keeps no state between calls apart from the attached view, so it can be
//! driven from a UI thread and a refresh timer at the same time.

use std::sync::Arc;

use fx_common::{Currency, RateQuote, RateResolver};
use log::debug;
use thiserror::Error;

use crate::format::{DisplayZone, format_amount, format_money};
use crate::view::ConverterView;

/// User-facing reason a conversion produced no result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionFailure {
    /// Amount text absent or blank.
    #[error("Please enter an amount.")]
    MissingAmount,
    /// Amount text is not a finite number.
    #[error("Amount must be a valid number.")]
    InvalidAmount,
    /// Amount is below zero.
    #[error("Amount cannot be negative.")]
    NegativeAmount,
    /// Base or quote currency not selected.
    #[error("Please select both currencies.")]
    MissingCurrency,
    /// Resolver returned no quote for the pair.
    #[error("This currency pair is not supported yet.")]
    UnsupportedPair,
}

/// Formatted output of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// `<amount> <FROM> = <converted> <TO>`.
    pub result: String,
    /// `Last updated: <timestamp>`.
    pub last_updated: String,
}

/// Parse raw amount text: trimmed, finite, non-negative.
pub fn parse_amount(text: Option<&str>) -> Result<f64, ConversionFailure> {
    let text = text
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ConversionFailure::MissingAmount)?;
    let amount = text
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite())
        .ok_or(ConversionFailure::InvalidAmount)?;
    if amount < 0.0 {
        return Err(ConversionFailure::NegativeAmount);
    }
    Ok(amount)
}

/// Validates input, looks up a rate and renders the outcome into a `ConverterView`.
pub struct ConversionPresenter {
    resolver: Arc<dyn RateResolver>,
    view: Option<Arc<dyn ConverterView>>,
    zone: DisplayZone,
}

impl ConversionPresenter {
    /// Presenter rendering timestamps in the zone from the environment.
    pub fn new(resolver: Arc<dyn RateResolver>) -> Self {
        Self::with_zone(resolver, DisplayZone::from_env())
    }

    /// Presenter rendering timestamps in `zone`.
    pub fn with_zone(resolver: Arc<dyn RateResolver>, zone: DisplayZone) -> Self {
        Self {
            resolver,
            view: None,
            zone,
        }
    }

    /// Attach the view that receives all output.
    pub fn attach_view(&mut self, view: Arc<dyn ConverterView>) {
        self.view = Some(view);
    }

    /// Detach the current view; later requests are ignored.
    pub fn detach_view(&mut self) {
        self.view = None;
    }

    /// Handle a conversion request from the view. Without an attached view this is a no-op.
    pub fn on_convert(&self, amount_text: Option<&str>, from: Option<Currency>, to: Option<Currency>) {
        let Some(view) = &self.view else {
            return;
        };
        view.clear_error();

        match self.convert(amount_text, from, to) {
            Ok(conversion) => {
                view.show_result(&conversion.result);
                view.show_last_updated(&conversion.last_updated);
            }
            Err(failure) => {
                debug!("Conversion rejected: {:?}", failure);
                view.show_error(&failure.to_string());
            }
        }
    }

    /// Run validation, lookup and formatting without touching the view.
    pub fn convert(
        &self,
        amount_text: Option<&str>,
        from: Option<Currency>,
        to: Option<Currency>,
    ) -> Result<Conversion, ConversionFailure> {
        let amount = parse_amount(amount_text)?;
        let (Some(from), Some(to)) = (from, to) else {
            return Err(ConversionFailure::MissingCurrency);
        };
        let quote = self
            .resolver
            .resolve(from, to)
            .ok_or(ConversionFailure::UnsupportedPair)?;
        Ok(self.render(amount, &quote))
    }

    fn render(&self, amount: f64, quote: &RateQuote) -> Conversion {
        let converted = amount * quote.rate();
        Conversion {
            result: format!(
                "{} {} = {} {}",
                format_amount(amount),
                quote.base(),
                format_money(converted),
                quote.quote()
            ),
            last_updated: format!("Last updated: {}", self.zone.format(quote.timestamp())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingView {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingView {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("call log should not be poisoned").clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().expect("call log should not be poisoned").push(call);
        }
    }

    impl ConverterView for RecordingView {
        fn clear_error(&self) {
            self.record(String::from("clearError"));
        }
        fn show_error(&self, message: &str) {
            self.record(format!("showError:{message}"));
        }
        fn show_result(&self, text: &str) {
            self.record(format!("showResult:{text}"));
        }
        fn show_last_updated(&self, text: &str) {
            self.record(format!("showLastUpdated:{text}"));
        }
    }

    /// Returns the same canned outcome for every pair and counts lookups.
    struct FixedResolver {
        next: Option<RateQuote>,
        lookups: Mutex<usize>,
    }

    impl FixedResolver {
        fn new(next: Option<RateQuote>) -> Arc<Self> {
            Arc::new(Self {
                next,
                lookups: Mutex::new(0),
            })
        }

        fn lookups(&self) -> usize {
            *self.lookups.lock().expect("counter should not be poisoned")
        }
    }

    impl RateResolver for FixedResolver {
        fn resolve(&self, _base: Currency, _quote: Currency) -> Option<RateQuote> {
            *self.lookups.lock().expect("counter should not be poisoned") += 1;
            self.next.clone()
        }
    }

    fn usd_eur_quote() -> RateQuote {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 15, 30).unwrap();
        RateQuote::new(Currency::USD, Currency::EUR, 0.90, at).unwrap()
    }

    fn setup(next: Option<RateQuote>) -> (ConversionPresenter, Arc<RecordingView>, Arc<FixedResolver>) {
        let resolver = FixedResolver::new(next);
        let view = Arc::new(RecordingView::default());
        let zone = DisplayZone::parse("UTC").unwrap();
        let mut presenter = ConversionPresenter::with_zone(resolver.clone(), zone);
        presenter.attach_view(view.clone());
        (presenter, view, resolver)
    }

    fn assert_single_error(view: &RecordingView, message: &str) {
        assert_eq!(view.calls(), vec![String::from("clearError"), format!("showError:{message}")]);
    }

    #[test]
    fn missing_amount_shows_error() {
        let (presenter, view, resolver) = setup(Some(usd_eur_quote()));
        presenter.on_convert(None, Some(Currency::USD), Some(Currency::EUR));
        assert_single_error(&view, "Please enter an amount.");
        assert_eq!(resolver.lookups(), 0);
    }

    #[test]
    fn blank_amount_shows_error() {
        let (presenter, view, _) = setup(Some(usd_eur_quote()));
        presenter.on_convert(Some("   "), Some(Currency::USD), Some(Currency::EUR));
        assert_single_error(&view, "Please enter an amount.");
    }

    #[test]
    fn non_numeric_amount_shows_error() {
        for text in ["abc", "12,5", "1e", "NaN", "inf"] {
            let (presenter, view, _) = setup(Some(usd_eur_quote()));
            presenter.on_convert(Some(text), Some(Currency::USD), Some(Currency::EUR));
            assert_single_error(&view, "Amount must be a valid number.");
        }
    }

    #[test]
    fn negative_amount_shows_error() {
        let (presenter, view, _) = setup(Some(usd_eur_quote()));
        presenter.on_convert(Some("-5"), Some(Currency::USD), Some(Currency::EUR));
        assert_single_error(&view, "Amount cannot be negative.");
    }

    #[test]
    fn missing_currency_shows_error() {
        let (presenter, view, resolver) = setup(Some(usd_eur_quote()));
        presenter.on_convert(Some("10"), None, Some(Currency::EUR));
        presenter.on_convert(Some("10"), Some(Currency::USD), None);
        assert_eq!(
            view.calls(),
            vec![
                "clearError",
                "showError:Please select both currencies.",
                "clearError",
                "showError:Please select both currencies.",
            ]
        );
        assert_eq!(resolver.lookups(), 0);
    }

    #[test]
    fn amount_is_validated_before_currencies() {
        let (presenter, view, _) = setup(None);
        presenter.on_convert(Some("-1"), None, None);
        assert_single_error(&view, "Amount cannot be negative.");
    }

    #[test]
    fn unsupported_pair_shows_error() {
        let (presenter, view, resolver) = setup(None);
        presenter.on_convert(Some("10"), Some(Currency::USD), Some(Currency::EUR));
        assert_single_error(&view, "This currency pair is not supported yet.");
        assert_eq!(resolver.lookups(), 1);
    }

    #[test]
    fn happy_path_shows_result_and_last_updated() {
        let (presenter, view, resolver) = setup(Some(usd_eur_quote()));
        presenter.on_convert(Some(" 100 "), Some(Currency::USD), Some(Currency::EUR));
        assert_eq!(
            view.calls(),
            vec![
                "clearError",
                "showResult:100 USD = 90.00 EUR",
                "showLastUpdated:Last updated: 2024-01-01 10:15:30 UTC",
            ]
        );
        assert_eq!(resolver.lookups(), 1);
    }

    #[test]
    fn zero_amount_is_converted() {
        let (presenter, _, _) = setup(Some(usd_eur_quote()));
        let conversion = presenter
            .convert(Some("0"), Some(Currency::USD), Some(Currency::EUR))
            .unwrap();
        assert_eq!(conversion.result, "0 USD = 0.00 EUR");
    }

    #[test]
    fn large_amounts_are_grouped() {
        let (presenter, _, _) = setup(Some(usd_eur_quote()));
        let conversion = presenter
            .convert(Some("1234567.891"), Some(Currency::USD), Some(Currency::EUR))
            .unwrap();
        assert_eq!(conversion.result, "1,234,567.891 USD = 1,111,111.10 EUR");
    }

    #[test]
    fn overflowing_conversion_renders_infinity() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 15, 30).unwrap();
        let quote = RateQuote::new(Currency::USD, Currency::NGN, 1500.0, at).unwrap();
        let (presenter, view, _) = setup(Some(quote));
        presenter.on_convert(Some("1e308"), Some(Currency::USD), Some(Currency::NGN));
        let calls = view.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls[1].starts_with("showResult:"));
        assert!(calls[1].ends_with(" USD = ∞ NGN"), "unexpected result {}", calls[1]);
    }

    #[test]
    fn every_attempt_clears_the_previous_error_first() {
        let (presenter, view, _) = setup(Some(usd_eur_quote()));
        presenter.on_convert(Some("abc"), Some(Currency::USD), Some(Currency::EUR));
        presenter.on_convert(Some("1"), Some(Currency::USD), Some(Currency::EUR));
        let calls = view.calls();
        assert_eq!(calls[0], "clearError");
        assert_eq!(calls[2], "clearError");
        assert!(calls[3].starts_with("showResult:1 USD = 0.90 EUR"));
    }

    #[test]
    fn detached_presenter_is_a_no_op() {
        let (mut presenter, view, resolver) = setup(Some(usd_eur_quote()));
        presenter.detach_view();
        presenter.on_convert(Some("100"), Some(Currency::USD), Some(Currency::EUR));
        assert!(view.calls().is_empty());
        assert_eq!(resolver.lookups(), 0);
    }

    #[test]
    fn parse_amount_accepts_signed_and_fractional_input() {
        assert_eq!(parse_amount(Some("+2.5")), Ok(2.5));
        assert_eq!(parse_amount(Some(".5")), Ok(0.5));
        assert_eq!(parse_amount(Some("-0")), Ok(-0.0));
        assert_eq!(parse_amount(Some("")), Err(ConversionFailure::MissingAmount));
    }
}
