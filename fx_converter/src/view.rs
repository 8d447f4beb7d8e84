//! Passive view contract.

/// Display surface driven by `ConversionPresenter`.
///
/// Implementations render what they are given and hold no conversion logic. Every call
/// is a fire-and-forget display update. Views are shared with background refresh loops,
/// so they must be `Send + Sync` and use interior mutability for any state.
pub trait ConverterView: Send + Sync {
    /// Clear any previous error display.
    fn clear_error(&self);

    /// Show a human-readable error message.
    fn show_error(&self, message: &str);

    /// Show the formatted conversion result.
    fn show_result(&self, text: &str);

    /// Show the formatted last-updated line.
    fn show_last_updated(&self, text: &str);
}
