//! Live resolver backed by a `/latest` style exchange-rate API.
//!
//! Resolution is two sequential attempts:
//! - direct: `GET <base_url>/latest?base=<B>&symbols=<Q>` and read `rates.<Q>`;
//! - cross: only if the direct attempt gave no usable rate,
//!   `GET <base_url>/latest?symbols=<B>,<Q>` against the provider's default pivot and
//!   divide `rates.<Q>` by `rates.<B>`.
//!
//! A transport error at any stage ends the lookup. Every failure, whether a missing
//! pair, a non-2xx status, an unreadable body or a network error, surfaces as `None`.

use std::sync::Arc;

use fx_common::{Currency, RateQuote, RateResolver, Result};
use log::{debug, warn};

use crate::scanner::extract_rate;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Query parameter used for the API key when none is configured.
pub const DEFAULT_KEY_PARAM: &str = "apikey";

/// Exchange-rate resolver that queries an HTTP API on every call.
pub struct HttpRateResolver {
    base_url: String,
    api_key: Option<String>,
    api_key_param: String,
    transport: Arc<dyn HttpTransport>,
}

impl HttpRateResolver {
    /// Resolver for `base_url` using the default `apikey` parameter name.
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        Ok(Self::with_transport(
            base_url,
            api_key,
            Arc::new(ReqwestTransport::new()?),
        ))
    }

    /// Resolver that sends requests through `transport`.
    pub fn with_transport(
        base_url: &str,
        api_key: Option<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url).to_string();
        Self {
            base_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_key_param: String::from(DEFAULT_KEY_PARAM),
            transport,
        }
    }

    /// Override the query parameter carrying the API key. Blank names keep the default.
    pub fn with_key_param(mut self, name: &str) -> Self {
        self.api_key_param = if name.trim().is_empty() {
            String::from(DEFAULT_KEY_PARAM)
        } else {
            name.to_string()
        };
        self
    }

    /// API root without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Query parameter name the key is sent under.
    pub fn api_key_param(&self) -> &str {
        &self.api_key_param
    }

    fn direct_url(&self, base: Currency, quote: Currency) -> String {
        let url = format!(
            "{}/latest?base={}&symbols={}",
            self.base_url,
            urlencoding::encode(base.code()),
            urlencoding::encode(quote.code())
        );
        self.with_key(url)
    }

    fn cross_url(&self, base: Currency, quote: Currency) -> String {
        let url = format!(
            "{}/latest?symbols={},{}",
            self.base_url,
            urlencoding::encode(base.code()),
            urlencoding::encode(quote.code())
        );
        self.with_key(url)
    }

    fn with_key(&self, mut url: String) -> String {
        if let Some(key) = &self.api_key {
            url.push('&');
            url.push_str(&self.api_key_param);
            url.push('=');
            url.push_str(&urlencoding::encode(key));
        }
        url
    }

    fn lookup(&self, base: Currency, quote: Currency) -> Result<Option<RateQuote>> {
        let direct = self.transport.get(&self.direct_url(base, quote))?;
        if direct.is_success() {
            if let Some(rate) = extract_rate(&direct.body, quote).filter(|r| *r > 0.0) {
                return RateQuote::now(base, quote, rate).map(Some);
            }
            debug!("No direct {}/{} rate in response", base, quote);
        } else {
            debug!("Direct {}/{} lookup returned status {}", base, quote, direct.status);
        }

        let cross = self.transport.get(&self.cross_url(base, quote))?;
        if !cross.is_success() {
            debug!("Cross {}/{} lookup returned status {}", base, quote, cross.status);
            return Ok(None);
        }
        let pivot_to_quote = extract_rate(&cross.body, quote).filter(|r| *r > 0.0);
        let pivot_to_base = extract_rate(&cross.body, base).filter(|r| *r > 0.0);
        match (pivot_to_quote, pivot_to_base) {
            (Some(q), Some(b)) => RateQuote::now(base, quote, q / b).map(Some),
            _ => {
                debug!("Cross {}/{} response lacks usable rates", base, quote);
                Ok(None)
            }
        }
    }
}

impl RateResolver for HttpRateResolver {
    fn resolve(&self, base: Currency, quote: Currency) -> Option<RateQuote> {
        if base == quote {
            return RateQuote::now(base, quote, 1.0).ok();
        }
        match self.lookup(base, quote) {
            Ok(result) => result,
            Err(e) => {
                warn!("Rate lookup for {}/{} failed: {}", base, quote, e);
                None
            }
        }
    }
}
