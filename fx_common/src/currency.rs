//! Currency codes supported by the converter.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Closed set of supported ISO-4217 currency codes.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    NGN,
    JPY,
    CAD,
    AUD,
    CNY,
    ZAR,
    INR,
    GHS,
}

impl Currency {
    /// Upper-case ISO code, as used in query strings and response bodies.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Every supported currency, in declaration order.
    pub fn all() -> impl Iterator<Item = Currency> {
        Currency::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("Ghs".parse::<Currency>().unwrap(), Currency::GHS);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn code_matches_display() {
        for currency in Currency::all() {
            assert_eq!(currency.code(), currency.to_string());
        }
        assert_eq!(Currency::all().count(), 11);
    }

    #[test]
    fn serializes_as_plain_code() {
        let json = serde_json::to_string(&Currency::NGN).unwrap();
        assert_eq!(json, "\"NGN\"");
    }
}
