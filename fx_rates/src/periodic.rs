//! Table resolver whose quotes carry the time of the last data refresh.
//!
//! The rates themselves never change; a background `FreshnessClock` advances the
//! "last refresh" instant on a fixed period, and every quote is stamped with that
//! instant rather than the query time. This separates data freshness from the moment
//! a conversion was requested.

use std::time::Duration;

use chrono::{DateTime, Utc};
use fx_common::{Currency, RateQuote, RateResolver, Result};
use log::debug;

use crate::freshness::FreshnessClock;
use crate::table::RateTable;

/// Refresh period used by `PeriodicRateResolver::new`.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(2);

/// Rate table plus a background freshness clock.
pub struct PeriodicRateResolver {
    table: RateTable,
    clock: FreshnessClock,
}

impl PeriodicRateResolver {
    /// Built-in table, refreshed every [`DEFAULT_REFRESH_PERIOD`].
    pub fn new() -> Result<Self> {
        Self::with_period(DEFAULT_REFRESH_PERIOD)
    }

    /// Built-in table, refreshed every `period`.
    pub fn with_period(period: Duration) -> Result<Self> {
        Self::with_table(RateTable::usd_reference(), period)
    }

    /// Caller-supplied table, refreshed every `period`.
    pub fn with_table(table: RateTable, period: Duration) -> Result<Self> {
        Ok(Self {
            table,
            clock: FreshnessClock::start(period)?,
        })
    }

    /// Instant stamped on quotes resolved right now.
    pub fn last_refresh(&self) -> DateTime<Utc> {
        self.clock.last_refresh()
    }

    /// `true` while the background clock is ticking.
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Stop the background clock. Resolution keeps working with a frozen timestamp.
    pub fn shutdown(&self) -> Result<()> {
        self.clock.shutdown()
    }
}

impl RateResolver for PeriodicRateResolver {
    fn resolve(&self, base: Currency, quote: Currency) -> Option<RateQuote> {
        let rate = self.table.cross_rate(base, quote)?;
        RateQuote::new(base, quote, rate, self.clock.last_refresh())
            .map_err(|e| debug!("Periodic table produced an unusable rate: {}", e))
            .ok()
    }
}
