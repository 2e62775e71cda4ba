//! Error types for configuration and output failures

use std::fmt;
use std::path::PathBuf;

/// Main error type for tiling generation
#[derive(Debug)]
pub enum TilingError {
    /// A numeric or textual parameter is outside its accepted domain
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Options that cannot be combined, or that must be given together
    Configuration {
        /// Description of the conflict
        reason: String,
    },

    /// Palette preset index with no matching palette
    UnknownPalette {
        /// The requested index
        index: usize,
        /// Number of available presets
        available: usize,
    },

    /// Color string that is not a 24-bit hexadecimal value
    InvalidColor {
        /// The rejected input
        value: String,
    },

    /// Repartition table that does not cover every flag exactly once
    InvalidRepartition {
        /// The rejected counts
        counts: Vec<u8>,
        /// Explanation of the mismatch
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Configuration { reason } => write!(f, "Invalid configuration: {reason}"),
            Self::UnknownPalette { index, available } => {
                write!(
                    f,
                    "Unknown color palette index {index} (expected 0..{available})"
                )
            }
            Self::InvalidColor { value } => {
                write!(f, "Invalid color '{value}': expected a hex value like FF8800")
            }
            Self::InvalidRepartition { counts, reason } => {
                write!(f, "Invalid repartition table {counts:?}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a configuration conflict error
pub fn configuration_error(reason: &impl ToString) -> TilingError {
    TilingError::Configuration {
        reason: reason.to_string(),
    }
}
