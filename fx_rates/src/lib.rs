//!
//! Rate sources for the currency converter.
//!
//! Three interchangeable `RateResolver` implementations live here:
//! - `StaticRateResolver`: fixed in-memory table, quotes stamped with the query time.
//! - `PeriodicRateResolver`: same table, quotes stamped by a background freshness clock.
//! - `HttpRateResolver`: live lookup against a `/latest` style rates API with a
//!   cross-rate fallback.
//!
//! Supporting modules:
//! - `table`: reference-currency rate table and cross-rate arithmetic.
//! - `freshness`: cancellable background clock used by the periodic resolver.
//! - `scanner`: permissive extraction of `rates.<CODE>` from a response body.
//! - `transport`: the blocking HTTP seam and its `reqwest` implementation.
//! - `config`: selection of a rate source from settings or the environment.
#![warn(missing_docs)]
pub mod config;
pub mod freshness;
pub mod http;
pub mod periodic;
pub mod scanner;
pub mod static_table;
pub mod table;
pub mod transport;

pub use config::{RateSource, RateSourceConfig, SourceMode};
pub use http::HttpRateResolver;
pub use periodic::PeriodicRateResolver;
pub use scanner::extract_rate;
pub use static_table::StaticRateResolver;
pub use table::RateTable;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
