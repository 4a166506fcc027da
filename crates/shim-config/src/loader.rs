//! Configuration loader with layered approach.
//!
//! This module provides the [`ConfigLoader`] for stacking several
//! configuration documents into one [`FileConfiguration`], the way a
//! server-wide file is overlaid by an application file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{ConfigError, FileConfiguration, Format};

/// Configuration loader with layered approach.
///
/// Layers apply in call order; later layers override earlier ones. Within a
/// section, scalar keys are replaced and key/value blocks are merged key by
/// key.
///
/// # Example
///
/// ```no_run
/// use shim_config::ConfigLoader;
///
/// # fn main() -> Result<(), shim_config::ConfigError> {
/// let config = ConfigLoader::new()
///     .with_file("applicationHost.toml")?
///     .with_optional_file("web.toml")?
///     .load();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config: FileConfiguration,
    layers: usize,
}

impl ConfigLoader {
    /// Create a new configuration loader with no layers.
    ///
    /// # Example
    ///
    /// ```
    /// use shim_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().load();
    /// assert!(config.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file.
    ///
    /// The format is determined by the file extension (`.toml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The file does not exist
    /// - The file cannot be read
    /// - The extension is not supported
    /// - The file contains invalid TOML/JSON or unsupported nesting
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Format::from_name)
            .ok_or_else(|| ConfigError::unsupported_format(path.display().to_string()))?;

        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

        let layer = FileConfiguration::parse(&content, format)?;
        debug!(path = %path.display(), layer = self.layers, "loaded configuration file");
        self.push(layer);

        Ok(self)
    }

    /// Load configuration from an optional file.
    ///
    /// If the file exists, loads it. If not, silently continues.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be loaded.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            debug!(path = %path.as_ref().display(), "optional configuration file not found");
            Ok(self)
        }
    }

    /// Load configuration from a string.
    ///
    /// # Arguments
    ///
    /// * `content` - Configuration content as a string
    /// * `format` - Format name (`toml` or `json`, any case)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the format is unknown or parsing fails.
    ///
    /// # Example
    ///
    /// ```
    /// use shim_config::{ConfigLoader, ConfigurationSource};
    ///
    /// let toml = r#"
    ///     ["system.webServer/aspNetCore"]
    ///     processPath = "dotnet"
    /// "#;
    ///
    /// let config = ConfigLoader::new()
    ///     .with_string(toml, "toml")
    ///     .unwrap()
    ///     .load();
    ///
    /// let section = config.get_required_section("system.webServer/aspNetCore").unwrap();
    /// assert_eq!(section.get_string("processPath").as_deref(), Some("dotnet"));
    /// ```
    pub fn with_string(mut self, content: &str, format: &str) -> Result<Self, ConfigError> {
        let format =
            Format::from_name(format).ok_or_else(|| ConfigError::unsupported_format(format))?;

        let layer = FileConfiguration::parse(content, format)?;
        debug!(?format, layer = self.layers, "loaded configuration string");
        self.push(layer);

        Ok(self)
    }

    /// Number of layers applied so far.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Finalize and return the merged configuration.
    #[must_use]
    pub fn load(self) -> FileConfiguration {
        self.config
    }

    fn push(&mut self, layer: FileConfiguration) {
        self.config.merge(layer);
        self.layers += 1;
    }
}
