//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration or resolving options.
///
/// Every variant is fatal to resolution: callers must treat any error as
/// "configuration invalid, do not start the hosted process".
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required configuration section is absent.
    #[error("required configuration section not found: {section}")]
    MissingSection {
        /// Name of the missing section.
        section: String,
    },

    /// The `hostingModel` value matches neither known hosting model.
    #[error(
        "Unknown hosting model '{value}'. Please specify either hostingModel=\"inprocess\" \
         or hostingModel=\"outofprocess\" in the web.config file."
    )]
    InvalidHostingModel {
        /// The offending literal, as written in the configuration.
        value: String,
    },

    /// A required scalar is missing, empty, or malformed.
    #[error("missing required configuration field {field}: {reason}")]
    MissingField {
        /// The field name.
        field: String,
        /// Why the field could not be used.
        reason: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Failed to read configuration file.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The configuration format is neither TOML nor JSON.
    #[error("unsupported configuration format: {format}")]
    UnsupportedFormat {
        /// The format name or file path that was rejected.
        format: String,
    },

    /// A document entry has a shape the configuration model cannot hold.
    #[error("invalid configuration value for {field}: {reason}")]
    InvalidValue {
        /// The entry with the invalid value.
        field: String,
        /// Explanation of why the value is invalid.
        reason: String,
    },

    /// Environment file parsing error.
    #[error("failed to parse environment variable {var}: {reason}")]
    EnvParseError {
        /// The environment variable name, or the file when no name is known.
        var: String,
        /// Explanation of the parsing error.
        reason: String,
    },
}

impl ConfigError {
    /// Create a new missing section error.
    pub fn missing_section(section: impl Into<String>) -> Self {
        Self::MissingSection {
            section: section.into(),
        }
    }

    /// Create a new invalid hosting model error.
    pub fn invalid_hosting_model(value: impl Into<String>) -> Self {
        Self::InvalidHostingModel {
            value: value.into(),
        }
    }

    /// Create a new missing field error for an absent or empty value.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            reason: "value is missing or empty".to_string(),
        }
    }

    /// Create a new missing field error for a value that is present but unusable.
    pub fn malformed_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a new unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a new invalid value error.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new environment variable parse error.
    pub fn env_parse_error(var: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EnvParseError {
            var: var.into(),
            reason: reason.into(),
        }
    }
}
