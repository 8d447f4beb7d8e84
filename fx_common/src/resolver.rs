//! The rate lookup capability implemented by every rate source.

use std::sync::Arc;

use crate::currency::Currency;
use crate::rate_quote::RateQuote;

/// Produces a `RateQuote` for a currency pair, or `None` when the pair is unsupported.
///
/// Implementations never fail for "no data" conditions: transport errors, parse
/// failures and unknown pairs all collapse to `None`, so callers cannot tell them
/// apart. A pair whose base equals its quote resolves to a unit rate whenever the
/// implementation can compute one. Resolvers are shared across threads and must be
/// callable concurrently without external locking.
pub trait RateResolver: Send + Sync {
    /// Look up the rate for `base -> quote`.
    fn resolve(&self, base: Currency, quote: Currency) -> Option<RateQuote>;
}

impl<R: RateResolver + ?Sized> RateResolver for Arc<R> {
    fn resolve(&self, base: Currency, quote: Currency) -> Option<RateQuote> {
        (**self).resolve(base, quote)
    }
}

impl<R: RateResolver + ?Sized> RateResolver for Box<R> {
    fn resolve(&self, base: Currency, quote: Currency) -> Option<RateQuote> {
        (**self).resolve(base, quote)
    }
}
