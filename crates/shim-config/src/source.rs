//! Configuration source abstractions.
//!
//! The resolver only ever talks to these traits. [`FileConfiguration`] is the
//! file-backed implementation shipped with this crate; tests and embedders can
//! provide their own.
//!
//! Implementations are expected to be read-only snapshots. The resolver is
//! safe to call from several threads at once as long as the source it is given
//! tolerates concurrent reads.
//!
//! [`FileConfiguration`]: crate::FileConfiguration

use indexmap::IndexMap;

use crate::ConfigError;

/// Ordered key/value pairs of a nested configuration block.
///
/// Iteration follows document order. Lookups are case-sensitive.
pub type KeyValuePairs = IndexMap<String, String>;

/// A named, scoped block of configuration keys.
pub trait ConfigurationSection {
    /// Name of this section.
    fn name(&self) -> &str;

    /// Look up a scalar value.
    ///
    /// Returns `None` when the key is absent. A present but empty value is
    /// returned as `Some("")`.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Return the pairs of the nested block `block`.
    ///
    /// A missing block yields an empty mapping.
    fn get_key_value_pairs(&self, block: &str) -> KeyValuePairs;

    /// Look up a boolean value.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when the value is
    /// present but not a recognizable boolean.
    fn get_bool(&self, key: &str) -> Result<Option<bool>, ConfigError> {
        self.get_string(key)
            .map(|value| {
                parse_bool(&value).ok_or_else(|| {
                    ConfigError::malformed_field(key, format!("expected boolean, got '{value}'"))
                })
            })
            .transpose()
    }

    /// Look up a scalar value that must be present and non-empty.
    fn get_required_string(&self, key: &str) -> Result<String, ConfigError> {
        match self.get_string(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::missing_field(key)),
        }
    }

    /// Look up a boolean value that must be present and well-formed.
    fn get_required_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.get_bool(key)?
            .ok_or_else(|| ConfigError::missing_field(key))
    }
}

/// A hierarchical configuration source made of named sections.
pub trait ConfigurationSource {
    /// Look up a section by name.
    fn get_section(&self, name: &str) -> Option<&dyn ConfigurationSection>;

    /// Look up a section that must exist.
    fn get_required_section(&self, name: &str) -> Result<&dyn ConfigurationSection, ConfigError> {
        self.get_section(name)
            .ok_or_else(|| ConfigError::missing_section(name))
    }
}

/// Parse a boolean from a string (`true` or `false`, any case).
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
