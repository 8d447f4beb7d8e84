//! Number and timestamp formatting for presenter output.

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use log::debug;

/// Pattern for the last-updated line: `yyyy-MM-dd HH:mm:ss <zone>`.
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Format `value` with `,` thousands separators and between `min_fraction` and
/// `max_fraction` fraction digits; trailing zeros beyond `min_fraction` are dropped.
/// Non-finite values render as `∞`, `-∞` or `NaN`.
pub fn group_decimal(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value < 0.0 { "-∞" } else { "∞" });
    }
    let min_fraction = min_fraction.min(max_fraction);
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let trimmed = fraction.trim_end_matches('0');
    let fraction = if trimmed.len() < min_fraction {
        &fraction[..min_fraction]
    } else {
        trimmed
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    let is_zero = integer.bytes().chain(fraction.bytes()).all(|b| b == b'0');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// User-entered amount: grouped, up to three fraction digits.
pub fn format_amount(value: f64) -> String {
    group_decimal(value, 0, 3)
}

/// Converted amount: grouped, exactly two fraction digits.
pub fn format_money(value: f64) -> String {
    group_decimal(value, 2, 2)
}

/// Time zone used to render last-updated timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// IANA zone; `%Z` renders its abbreviation (`UTC`, `CET`, `EST`, ...).
    Named(Tz),
    /// Operating system local offset; `%Z` renders the offset. Used only when no zone
    /// name can be determined.
    SystemLocal,
}

impl DisplayZone {
    /// Zone named by the `TZ` environment variable, else the system's IANA zone, else
    /// the system local offset.
    pub fn from_env() -> Self {
        let tz_var = std::env::var("TZ").ok();
        let system_zone = iana_time_zone::get_timezone()
            .map_err(|e| debug!("System time zone unavailable: {}", e))
            .ok();
        Self::resolve(tz_var.as_deref(), system_zone.as_deref())
    }

    /// Pick the first of `tz_var` and `system_zone` that names a known zone.
    pub fn resolve(tz_var: Option<&str>, system_zone: Option<&str>) -> Self {
        tz_var
            .and_then(Self::parse)
            .or_else(|| system_zone.and_then(Self::parse))
            .unwrap_or(DisplayZone::SystemLocal)
    }

    /// Named zone for an IANA identifier such as `Africa/Lagos`.
    pub fn parse(name: &str) -> Option<Self> {
        name.trim()
            .trim_start_matches(':')
            .parse::<Tz>()
            .ok()
            .map(DisplayZone::Named)
    }

    /// Render `instant` with [`TIMESTAMP_PATTERN`] in this zone.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        match self {
            DisplayZone::Named(tz) => instant.with_timezone(tz).format(TIMESTAMP_PATTERN).to_string(),
            DisplayZone::SystemLocal => instant
                .with_timezone(&Local)
                .format(TIMESTAMP_PATTERN)
                .to_string(),
        }
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::from_env()
    }
}
