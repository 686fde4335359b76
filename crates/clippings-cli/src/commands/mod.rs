//! Command implementations for the clippings CLI

mod completions;
mod convert;

pub use completions::generate;
pub use convert::execute as convert;
