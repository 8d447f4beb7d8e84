//! Reference-currency rate table.
//!
//! Rates are stored as "one unit of the reference currency buys `x` units of the
//! currency", so any pair can be derived as a cross-rate:
//! `rate(base -> quote) = rate(ref -> quote) / rate(ref -> base)`.

use std::collections::HashMap;

use fx_common::{ConverterError, Currency, Result};

/// Fixed mapping from `Currency` to its rate against one reference currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    reference: Currency,
    rates: HashMap<Currency, f64>,
}

impl RateTable {
    /// Empty table whose reference currency maps to itself at 1.0.
    pub fn new(reference: Currency) -> Self {
        let mut rates = HashMap::new();
        rates.insert(reference, 1.0);
        Self { reference, rates }
    }

    /// Built-in table of indicative rates against USD.
    pub fn usd_reference() -> Self {
        let rates = [
            (Currency::USD, 1.0),
            (Currency::EUR, 0.92),
            (Currency::GBP, 0.80),
            (Currency::NGN, 1500.0),
            (Currency::JPY, 150.0),
            (Currency::CAD, 1.36),
            (Currency::AUD, 1.53),
            (Currency::CNY, 7.20),
            (Currency::ZAR, 18.50),
            (Currency::INR, 83.20),
            (Currency::GHS, 15.30),
        ];
        Self {
            reference: Currency::USD,
            rates: rates.into_iter().collect(),
        }
    }

    /// Set the rate of `currency` against the reference currency.
    pub fn insert(&mut self, currency: Currency, rate: f64) -> Result<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConverterError::InvalidQuote(format!(
                "{}->{currency} rate must be positive, got {rate}",
                self.reference
            )));
        }
        self.rates.insert(currency, rate);
        Ok(())
    }

    /// Copy of this table with `currency` removed.
    pub fn without(&self, currency: Currency) -> Self {
        let mut table = self.clone();
        table.rates.remove(&currency);
        table
    }

    /// Rate of `currency` against the reference currency, if known.
    pub fn rate_of(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    /// Cross-rate for `base -> quote`; `None` when either side is missing.
    pub fn cross_rate(&self, base: Currency, quote: Currency) -> Option<f64> {
        if base == quote {
            return Some(1.0);
        }
        let ref_to_base = self.rate_of(base)?;
        let ref_to_quote = self.rate_of(quote)?;
        Some(ref_to_quote / ref_to_base)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::usd_reference()
    }
}
