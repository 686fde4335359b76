//! Shared helpers for command implementations.

pub mod logging;
pub mod progress;

pub use logging::initialize_logging;
pub use progress::ConversionProgress;
