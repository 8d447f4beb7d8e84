//! Resolved exchange rate between two currencies.
//!
//! A `RateQuote` is the only thing a resolver hands back to the presenter. It is
//! immutable after construction and validated on the way in: a quote whose rate is not
//! a finite, strictly positive number is a resolver bug, so construction fails with
//! `ConverterError::InvalidQuote` instead of producing a value.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::currency::Currency;
use crate::error::ConverterError;
use crate::result::Result;

/// Exchange rate for `base -> quote` valid as of `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateQuote {
    base: Currency,
    quote: Currency,
    rate: f64,
    timestamp: DateTime<Utc>,
}

impl RateQuote {
    /// Build a quote, rejecting non-positive or non-finite rates.
    pub fn new(
        base: Currency,
        quote: Currency,
        rate: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConverterError::InvalidQuote(format!(
                "rate for {base}/{quote} must be positive, got {rate}"
            )));
        }
        Ok(Self {
            base,
            quote,
            rate,
            timestamp,
        })
    }

    /// Build a quote stamped with the current time.
    pub fn now(base: Currency, quote: Currency, rate: f64) -> Result<Self> {
        Self::new(base, quote, rate, Utc::now())
    }

    /// Currency being converted from.
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Currency being converted to.
    pub fn quote(&self) -> Currency {
        self.quote
    }

    /// Units of `quote` per one unit of `base`.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Instant the underlying data was last known to be fresh.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for RateQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {} @ {}",
            self.base,
            self.quote,
            self.rate,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}
