//! Deterministic resolver backed by a fixed rate table.

use fx_common::{Currency, RateQuote, RateResolver};
use log::debug;

use crate::table::RateTable;

/// Resolves pairs from an in-memory `RateTable`; quotes are stamped with the query time.
#[derive(Debug, Clone, Default)]
pub struct StaticRateResolver {
    table: RateTable,
}

impl StaticRateResolver {
    /// Resolver over the built-in USD reference table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver over a caller-supplied table.
    pub fn with_table(table: RateTable) -> Self {
        Self { table }
    }
}

impl RateResolver for StaticRateResolver {
    fn resolve(&self, base: Currency, quote: Currency) -> Option<RateQuote> {
        let rate = self.table.cross_rate(base, quote)?;
        match RateQuote::now(base, quote, rate) {
            Ok(quote) => Some(quote),
            Err(e) => {
                debug!("Static table produced an unusable rate: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_pairs_resolve_to_unit_rate() {
        let resolver = StaticRateResolver::new();
        for currency in Currency::all() {
            let quote = resolver.resolve(currency, currency).expect("identity pair");
            assert_eq!(quote.rate(), 1.0);
        }
    }

    #[test]
    fn reversed_pairs_are_reciprocal() {
        let resolver = StaticRateResolver::new();
        for a in Currency::all() {
            for b in Currency::all() {
                let forward = resolver.resolve(a, b).unwrap().rate();
                let backward = resolver.resolve(b, a).unwrap().rate();
                assert_relative_eq!(forward, 1.0 / backward, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn unknown_currency_is_unsupported() {
        let resolver =
            StaticRateResolver::with_table(RateTable::usd_reference().without(Currency::ZAR));
        assert!(resolver.resolve(Currency::USD, Currency::ZAR).is_none());
        assert!(resolver.resolve(Currency::ZAR, Currency::EUR).is_none());
    }
}
