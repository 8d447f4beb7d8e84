//! Terminal implementation of `ConverterView`.
use std::sync::atomic::{AtomicBool, Ordering};

use fx_converter::ConverterView;
use log::debug;

/// Prints results to stdout and errors to stderr.
#[derive(Default)]
pub struct ConsoleView {
    error_shown: AtomicBool,
}

impl ConsoleView {
    /// View with no error shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the last request ended with an error message.
    pub fn has_error(&self) -> bool {
        self.error_shown.load(Ordering::Acquire)
    }
}

impl ConverterView for ConsoleView {
    fn clear_error(&self) {
        if self.error_shown.swap(false, Ordering::AcqRel) {
            debug!("Previous error cleared");
        }
    }

    fn show_error(&self, message: &str) {
        self.error_shown.store(true, Ordering::Release);
        eprintln!("error: {}", message);
    }

    fn show_result(&self, text: &str) {
        println!("{}", text);
    }

    fn show_last_updated(&self, text: &str) {
        println!("{}", text);
    }
}
