//! File-backed configuration source.
//!
//! Documents are TOML or JSON. Top-level tables are sections; inside a
//! section, scalar entries are values and nested tables are key/value blocks.
//!
//! ```toml
//! ["system.webServer/aspNetCore"]
//! processPath = "dotnet"
//! arguments = ".\\MyApp.dll"
//! stdoutLogEnabled = false
//! stdoutLogFile = ".\\logs\\stdout"
//! disableStartupErrorPage = false
//! hostingModel = "outofprocess"
//!
//! ["system.webServer/aspNetCore".handlerSettings]
//! handlerVersion = "2.1"
//! ```

use indexmap::IndexMap;
use serde_json::Value;
use tracing::warn;

use crate::source::{ConfigurationSection, ConfigurationSource, KeyValuePairs};
use crate::ConfigError;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl Format {
    /// Match a format name (`toml` or `json`), ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// Scalars are rendered as strings (`true`, `42`, `1.5`, `dotnet`).
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigValue {
    Scalar(String),
    Block(KeyValuePairs),
}

/// A section of a [`FileConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSection {
    name: String,
    entries: IndexMap<String, ConfigValue>,
}

impl FileSection {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    // Later entries replace earlier ones; blocks merge key by key.
    fn merge(&mut self, other: FileSection) {
        for (key, value) in other.entries {
            match value {
                ConfigValue::Block(incoming) => match self.entries.get_mut(&key) {
                    Some(ConfigValue::Block(existing)) => existing.extend(incoming),
                    _ => {
                        self.entries.insert(key, ConfigValue::Block(incoming));
                    }
                },
                scalar => {
                    self.entries.insert(key, scalar);
                }
            }
        }
    }
}

impl ConfigurationSection for FileSection {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.entries.get(key)? {
            ConfigValue::Scalar(value) => Some(value.clone()),
            ConfigValue::Block(_) => {
                warn!(section = %self.name, key, "expected a scalar but found a key/value block");
                None
            }
        }
    }

    fn get_key_value_pairs(&self, block: &str) -> KeyValuePairs {
        match self.entries.get(block) {
            Some(ConfigValue::Block(pairs)) => pairs.clone(),
            Some(ConfigValue::Scalar(_)) => {
                warn!(section = %self.name, block, "expected a key/value block but found a scalar");
                KeyValuePairs::new()
            }
            None => KeyValuePairs::new(),
        }
    }
}

/// Configuration loaded from one or more TOML/JSON documents.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to layer several files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfiguration {
    sections: IndexMap<String, FileSection>,
}

impl FileConfiguration {
    /// Parse a single document.
    ///
    /// # Example
    ///
    /// ```
    /// use shim_config::{ConfigurationSource, FileConfiguration, Format};
    ///
    /// let config = FileConfiguration::parse(
    ///     r#"{"system.webServer/aspNetCore": {"processPath": "dotnet"}}"#,
    ///     Format::Json,
    /// )
    /// .unwrap();
    ///
    /// assert!(config.get_section("system.webServer/aspNetCore").is_some());
    /// ```
    pub fn parse(content: &str, format: Format) -> Result<Self, ConfigError> {
        let document: Value = match format {
            Format::Toml => toml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
        };

        Self::from_document(document)
    }

    /// Look up a section by name.
    pub fn section(&self, name: &str) -> Option<&FileSection> {
        self.sections.get(name)
    }

    /// Iterate over section names in document order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Whether no section has been loaded.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Merge `other` on top of this configuration.
    pub fn merge(&mut self, other: FileConfiguration) {
        for (name, section) in other.sections {
            match self.sections.get_mut(&name) {
                Some(existing) => existing.merge(section),
                None => {
                    self.sections.insert(name, section);
                }
            }
        }
    }

    fn from_document(document: Value) -> Result<Self, ConfigError> {
        let Value::Object(sections) = document else {
            return Err(ConfigError::invalid_value(
                "<document>",
                "top level must be a table of sections",
            ));
        };

        let mut config = Self::default();
        for (name, body) in sections {
            let Value::Object(entries) = body else {
                return Err(ConfigError::invalid_value(&name, "section must be a table"));
            };

            let mut section = FileSection::new(&name);
            for (key, value) in entries {
                let path = format!("{name}.{key}");
                let value = match value {
                    Value::Object(block) if is_toml_datetime(&block) => {
                        return Err(datetime_error(&path));
                    }
                    Value::Object(block) => {
                        let mut pairs = KeyValuePairs::new();
                        for (block_key, block_value) in block {
                            let block_path = format!("{path}.{block_key}");
                            match scalar(block_value, &block_path)? {
                                Some(rendered) => {
                                    pairs.insert(block_key, rendered);
                                }
                                None => continue,
                            }
                        }
                        ConfigValue::Block(pairs)
                    }
                    other => match scalar(other, &path)? {
                        Some(rendered) => ConfigValue::Scalar(rendered),
                        None => continue,
                    },
                };
                section.entries.insert(key, value);
            }

            config.sections.insert(name, section);
        }

        Ok(config)
    }
}

impl ConfigurationSource for FileConfiguration {
    fn get_section(&self, name: &str) -> Option<&dyn ConfigurationSection> {
        self.sections
            .get(name)
            .map(|section| section as &dyn ConfigurationSection)
    }
}

// Render a scalar; `null` reads as an absent key.
fn scalar(value: Value, path: &str) -> Result<Option<String>, ConfigError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        Value::Array(_) => Err(ConfigError::invalid_value(path, "arrays are not supported")),
        Value::Object(map) if is_toml_datetime(&map) => Err(datetime_error(path)),
        Value::Object(_) => Err(ConfigError::invalid_value(
            path,
            "key/value blocks cannot be nested",
        )),
    }
}

// TOML dates and times reach `Value` as a single-key marker table.
fn is_toml_datetime(map: &serde_json::Map<String, Value>) -> bool {
    map.len() == 1 && map.contains_key(TOML_DATETIME_FIELD)
}

fn datetime_error(path: &str) -> ConfigError {
    ConfigError::invalid_value(path, "dates and times are not supported, quote the value")
}

const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";
