//! Typed error handling for the insights crate
//!
//! The table engine clamps almost every out-of-range input instead of
//! failing, so the error surface is small. It still follows a typed
//! hierarchy so callers can match the specific case they care about.
//!
//! # Error Categories
//!
//! - [`TableError`]: Rejected engine configuration (e.g. a zero page size)
//! - [`ConfigError`]: Errors related to table configuration parsing and validation
//! - [`ValidationError`]: Errors related to parsing caller input (sort expressions)
//! - [`ExportError`]: Errors while writing an export artifact to disk
//!
//! # Example
//!
//! ```rust,ignore
//! use insights::prelude::*;
//!
//! match engine.set_page_size(0) {
//!     Ok(()) => {}
//!     Err(InsightsError::Table(TableError::InvalidConfiguration { field, .. })) => {
//!         println!("rejected {}", field);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use std::fmt;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, InsightsError>;

/// The main error type for the insights crate
#[derive(Debug)]
pub enum InsightsError {
    /// Table engine errors
    Table(TableError),

    /// Configuration errors
    Config(ConfigError),

    /// Input validation errors
    Validation(ValidationError),

    /// Export errors
    Export(ExportError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for InsightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightsError::Table(e) => write!(f, "{}", e),
            InsightsError::Config(e) => write!(f, "{}", e),
            InsightsError::Validation(e) => write!(f, "{}", e),
            InsightsError::Export(e) => write!(f, "{}", e),
            InsightsError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for InsightsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InsightsError::Table(e) => Some(e),
            InsightsError::Config(e) => Some(e),
            InsightsError::Validation(e) => Some(e),
            InsightsError::Export(e) => Some(e),
            InsightsError::Internal(_) => None,
        }
    }
}

impl InsightsError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            InsightsError::Table(e) => e.error_code(),
            InsightsError::Config(_) => "CONFIG_ERROR",
            InsightsError::Validation(_) => "VALIDATION_ERROR",
            InsightsError::Export(_) => "EXPORT_ERROR",
            InsightsError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Table Errors
// =============================================================================

/// Errors raised by the table engine
///
/// A rejected call leaves the engine state untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// A setting has no sane clamping semantics (e.g. `page_size == 0`)
    InvalidConfiguration {
        field: String,
        value: String,
        message: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidConfiguration {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid table configuration '{}' = '{}': {}",
                    field, value, message
                )
            }
        }
    }
}

impl std::error::Error for TableError {}

impl TableError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TableError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }
}

impl From<TableError> for InsightsError {
    fn from(err: TableError) -> Self {
        InsightsError::Table(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for InsightsError {
    fn from(err: ConfigError) -> Self {
        InsightsError::Config(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A sort expression could not be parsed
    InvalidSortSpec { value: String, message: String },

    /// A required form field was left empty
    RequiredField { field: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidSortSpec { value, message } => {
                write!(f, "Invalid sort expression '{}': {}", value, message)
            }
            ValidationError::RequiredField { field } => {
                write!(f, "Required field '{}' is missing", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for InsightsError {
    fn from(err: ValidationError) -> Self {
        InsightsError::Validation(err)
    }
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while writing an export artifact
#[derive(Debug)]
pub enum ExportError {
    Io { path: String, message: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io { path, message } => {
                write!(f, "Failed to write export '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for ExportError {}

impl From<ExportError> for InsightsError {
    fn from(err: ExportError) -> Self {
        InsightsError::Export(err)
    }
}
