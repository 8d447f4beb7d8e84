//! Rate source selection.
//!
//! Settings come from the process environment:
//! - `RATE_API_BASE_URL`: API root for the live resolver;
//! - `RATE_API_KEY`: optional API key;
//! - `RATE_API_KEY_NAME`: query parameter for the key (defaults to `access_key`).
//!
//! With `SourceMode::Auto`, a base URL selects the live resolver and its absence
//! selects the static table.

use std::sync::Arc;

use clap::ValueEnum;
use fx_common::{ConverterError, Currency, RateQuote, RateResolver, Result};
use log::info;

use crate::http::HttpRateResolver;
use crate::periodic::PeriodicRateResolver;
use crate::static_table::StaticRateResolver;

/// Environment variable holding the API root.
pub const BASE_URL_VAR: &str = "RATE_API_BASE_URL";
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "RATE_API_KEY";
/// Environment variable holding the API key's query parameter name.
pub const API_KEY_NAME_VAR: &str = "RATE_API_KEY_NAME";
/// Key parameter name used when none is configured.
pub const DEFAULT_API_KEY_NAME: &str = "access_key";

/// Which resolver to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum SourceMode {
    /// Live API when a base URL is configured, static table otherwise.
    #[default]
    Auto,
    /// Built-in static table.
    Static,
    /// Built-in table with a background freshness clock.
    Periodic,
    /// Live HTTP API; requires a base URL.
    Http,
}

/// Settings used to build a `RateSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSourceConfig {
    /// Requested resolver kind.
    pub mode: SourceMode,
    /// API root for the live resolver.
    pub base_url: Option<String>,
    /// API key, if the provider needs one.
    pub api_key: Option<String>,
    /// Query parameter name for the API key.
    pub api_key_name: String,
}

impl Default for RateSourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Auto,
            base_url: None,
            api_key: None,
            api_key_name: String::from(DEFAULT_API_KEY_NAME),
        }
    }
}

impl RateSourceConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, keeping only non-blank values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            mode: SourceMode::Auto,
            base_url: non_blank(BASE_URL_VAR),
            api_key: non_blank(API_KEY_VAR),
            api_key_name: non_blank(API_KEY_NAME_VAR)
                .unwrap_or_else(|| String::from(DEFAULT_API_KEY_NAME)),
        }
    }

    /// Same settings with a different mode.
    pub fn with_mode(mut self, mode: SourceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Mode after resolving `Auto`.
    pub fn effective_mode(&self) -> SourceMode {
        match self.mode {
            SourceMode::Auto if self.base_url.is_some() => SourceMode::Http,
            SourceMode::Auto => SourceMode::Static,
            mode => mode,
        }
    }

    /// Build the selected resolver.
    pub fn build(&self) -> Result<RateSource> {
        match self.effective_mode() {
            SourceMode::Http => {
                let base_url = self.base_url.as_deref().ok_or_else(|| {
                    ConverterError::Config(format!("{BASE_URL_VAR} is required for the http source"))
                })?;
                info!("Using live HTTP rates from {}", base_url);
                let resolver = HttpRateResolver::new(base_url, self.api_key.clone())?
                    .with_key_param(&self.api_key_name);
                Ok(RateSource::Http(Arc::new(resolver)))
            }
            SourceMode::Periodic => {
                info!("Using built-in rates with periodic refresh");
                Ok(RateSource::Periodic(Arc::new(PeriodicRateResolver::new()?)))
            }
            SourceMode::Static | SourceMode::Auto => {
                info!("Using built-in static rates (no {} configured)", BASE_URL_VAR);
                Ok(RateSource::Static(Arc::new(StaticRateResolver::new())))
            }
        }
    }
}

/// The resolver chosen at start-up.
#[derive(Clone)]
pub enum RateSource {
    /// Fixed in-memory table.
    Static(Arc<StaticRateResolver>),
    /// In-memory table with a freshness clock.
    Periodic(Arc<PeriodicRateResolver>),
    /// Live HTTP API.
    Http(Arc<HttpRateResolver>),
}

impl RateSource {
    /// Human-readable name of the selected variant.
    pub fn name(&self) -> &'static str {
        match self {
            RateSource::Static(_) => "static",
            RateSource::Periodic(_) => "periodic",
            RateSource::Http(_) => "http",
        }
    }

    /// Stop background work owned by the source.
    pub fn shutdown(&self) -> Result<()> {
        match self {
            RateSource::Periodic(resolver) => resolver.shutdown(),
            RateSource::Static(_) | RateSource::Http(_) => Ok(()),
        }
    }
}

impl RateResolver for RateSource {
    fn resolve(&self, base: Currency, quote: Currency) -> Option<RateQuote> {
        match self {
            RateSource::Static(resolver) => resolver.resolve(base, quote),
            RateSource::Periodic(resolver) => resolver.resolve(base, quote),
            RateSource::Http(resolver) => resolver.resolve(base, quote),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn no_base_url_selects_static_table() {
        let config = RateSourceConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.effective_mode(), SourceMode::Static);
        assert_eq!(config.api_key_name, DEFAULT_API_KEY_NAME);
        assert_eq!(config.build().unwrap().name(), "static");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = RateSourceConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "   "),
            (API_KEY_VAR, ""),
            (API_KEY_NAME_VAR, " "),
        ]));
        assert_eq!(config.base_url, None);
        assert_eq!(config.api_key, None);
        assert_eq!(config.api_key_name, DEFAULT_API_KEY_NAME);
    }

    #[test]
    fn base_url_selects_http_source() {
        let config = RateSourceConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "https://api.exchangerate.example/"),
            (API_KEY_VAR, "k-123"),
            (API_KEY_NAME_VAR, "apiKey"),
        ]));
        assert_eq!(config.effective_mode(), SourceMode::Http);

        match config.build().unwrap() {
            RateSource::Http(resolver) => {
                assert_eq!(resolver.base_url(), "https://api.exchangerate.example");
                assert_eq!(resolver.api_key(), Some("k-123"));
                assert_eq!(resolver.api_key_param(), "apiKey");
            }
            other => panic!("expected http source, got {}", other.name()),
        }
    }

    #[test]
    fn http_mode_without_base_url_is_a_config_error() {
        let config = RateSourceConfig::from_lookup(lookup_from(&[])).with_mode(SourceMode::Http);
        assert!(matches!(config.build(), Err(ConverterError::Config(_))));
    }

    #[test]
    fn periodic_source_resolves_and_shuts_down() {
        let source = RateSourceConfig::default()
            .with_mode(SourceMode::Periodic)
            .build()
            .unwrap();
        assert_eq!(source.name(), "periodic");
        assert!(source.resolve(Currency::EUR, Currency::EUR).is_some());
        source.shutdown().unwrap();
        source.shutdown().unwrap();
    }
}
