//! Environment variable access.
//!
//! Resolution never reads the process environment directly; it goes through an
//! [`EnvironmentReader`] so callers decide where values come from.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::ConfigError;

/// Name to value lookup of environment variables.
pub trait EnvironmentReader {
    /// Value of the variable `name`, or `None` when it is not set.
    fn get_value(&self, name: &str) -> Option<String>;
}

/// Reads the environment of the current process.
///
/// Variables whose value is not valid Unicode read as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentReader for ProcessEnvironment {
    fn get_value(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment.
///
/// # Example
///
/// ```
/// use shim_config::{EnvironmentReader, MapEnvironment};
///
/// let env = MapEnvironment::new().with_var("ASPNETCORE_ENVIRONMENT", "Development");
/// assert_eq!(env.get_value("ASPNETCORE_ENVIRONMENT").as_deref(), Some("Development"));
/// assert_eq!(env.get_value("DOTNET_ENVIRONMENT"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Read variables from a `.env` file.
    ///
    /// The process environment is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file does not exist, cannot be read, or
    /// contains a malformed line.
    pub fn from_dotenv<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let iter = dotenvy::from_path_iter(path).map_err(|e| dotenv_error(path, e))?;

        let mut env = Self::new();
        for item in iter {
            let (name, value) = item.map_err(|e| dotenv_error(path, e))?;
            env.vars.insert(name, value);
        }

        debug!(path = %path.display(), vars = env.len(), "loaded environment file");
        Ok(env)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variable is set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentReader for MapEnvironment {
    fn get_value(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

fn dotenv_error(path: &Path, error: dotenvy::Error) -> ConfigError {
    match error {
        dotenvy::Error::Io(source) => ConfigError::read_error(path, source),
        other => ConfigError::env_parse_error(path.display().to_string(), other.to_string()),
    }
}
