//! Error types shared by the rate sources and the converter.
//!
//! `ConverterError` covers contract violations (a resolver building a quote with a
//! bad rate), transport and configuration failures, and the small amount of I/O the
//! command-line shell performs. Resolvers never hand these to the presenter: they are
//! collapsed to an "unsupported" outcome at the `RateResolver` boundary.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by every crate in the workspace.
#[derive(Error, Debug)]
pub enum ConverterError {
    /// A `RateQuote` was constructed with a rate that is not strictly positive.
    #[error("Invalid rate quote: {0}")]
    InvalidQuote(String),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Rate source selection or settings are inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),

    /// Installing the interrupt handler failed.
    #[error("Signal handler error: {0}")]
    Signal(String),
}

impl<T> From<PoisonError<T>> for ConverterError {
    fn from(err: PoisonError<T>) -> Self {
        ConverterError::MutexLock(err.to_string())
    }
}
