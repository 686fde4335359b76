//! CLI error handling with semantic exit codes.
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments, config, or substitution file |
//! | 3 | `NotFound` | Input file not found |
//! | 4 | `InvalidInput` | Export contains a malformed clipping |
//! | 5 | `Io` | Reading or writing failed |
//!
//! ```bash
//! clippings "My Clippings.txt" out.json
//! case $? in
//!     0) echo "Success" ;;
//!     3) echo "No export at that path" ;;
//!     4) echo "Export is malformed" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;

use clippings_core::Error as CoreError;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or configuration (exit code 2).
    Usage = 2,

    /// Input file not found (exit code 3).
    NotFound = 3,

    /// Export contains a clipping that cannot be converted (exit code 4).
    InvalidInput = 4,

    /// Filesystem failure (exit code 5).
    Io = 5,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Category for an error raised by clippings-core.
    #[must_use]
    pub fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Format { .. } => Self::InvalidInput,
            CoreError::Config(_) | CoreError::Substitution(_) => Self::Usage,
            CoreError::Serialization(_) => Self::Internal,
        }
    }
}

/// A CLI error with a semantic category for exit code mapping.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    /// Create an I/O error.
    pub fn io(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Io, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

// Outermost message only; causes come from `source()`.
impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::new(ErrorCategory::from_core(&err), err)
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// A `CliError` anywhere in the chain decides; otherwise a clippings-core
/// error is categorized; anything else is internal.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.chain().find_map(|e| e.downcast_ref::<CliError>()) {
        return cli_err.exit_code();
    }

    err.chain()
        .find_map(|e| e.downcast_ref::<CoreError>())
        .map_or(ErrorCategory::Internal, ErrorCategory::from_core)
        .exit_code()
}
