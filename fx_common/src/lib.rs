//!
//! Common types shared by the rate sources and the converter front end.
//!
//! This crate aggregates:
//! - `error`: unified error type `ConverterError` used across the workspace.
//! - `result`: handy `Result<T, ConverterError>` alias.
//! - `currency`: the closed set of supported currency codes.
//! - `rate_quote`: the immutable `RateQuote` produced by every resolver.
//! - `resolver`: the `RateResolver` capability implemented by each rate source.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod currency;
pub mod rate_quote;
pub mod resolver;

pub use error::ConverterError;
pub use result::Result;
pub use currency::Currency;
pub use rate_quote::RateQuote;
pub use resolver::RateResolver;
