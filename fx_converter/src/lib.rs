//!
//! Presenter side of the currency converter.
//!
//! - `view`: the passive `ConverterView` the presenter renders into.
//! - `presenter`: `ConversionPresenter`: validation, lookup and formatting.
//! - `format`: grouped number formatting and last-updated timestamps.
#![warn(missing_docs)]
pub mod format;
pub mod presenter;
pub mod view;

pub use format::DisplayZone;
pub use presenter::{ConversionFailure, ConversionPresenter};
pub use view::ConverterView;
