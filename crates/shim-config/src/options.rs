//! Resolved shim options.

use std::fmt;

use serde::Serialize;

use crate::keys;

/// Where the managed application runs relative to the web server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostingModel {
    /// Separate child process behind a reverse proxy.
    #[default]
    OutOfProcess,
    /// Inside the web server's worker process.
    InProcess,
}

impl HostingModel {
    /// Match a `hostingModel` configuration value.
    ///
    /// Comparison ignores case. An empty value selects out-of-process hosting.
    /// Returns `None` for any other unrecognized value.
    ///
    /// # Example
    ///
    /// ```
    /// use shim_config::HostingModel;
    ///
    /// assert_eq!(HostingModel::from_config_value("InProcess"), Some(HostingModel::InProcess));
    /// assert_eq!(HostingModel::from_config_value(""), Some(HostingModel::OutOfProcess));
    /// assert_eq!(HostingModel::from_config_value("sideways"), None);
    /// ```
    pub fn from_config_value(value: &str) -> Option<Self> {
        if value.is_empty() || value.eq_ignore_ascii_case(keys::HOSTING_MODEL_OUT_OF_PROCESS) {
            Some(Self::OutOfProcess)
        } else if value.eq_ignore_ascii_case(keys::HOSTING_MODEL_IN_PROCESS) {
            Some(Self::InProcess)
        } else {
            None
        }
    }

    /// Configuration token for this hosting model.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OutOfProcess => keys::HOSTING_MODEL_OUT_OF_PROCESS,
            Self::InProcess => keys::HOSTING_MODEL_IN_PROCESS,
        }
    }
}

impl fmt::Display for HostingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling how the hosted process is started.
///
/// Built once by [`OptionsResolver`](crate::OptionsResolver) and never
/// modified afterwards. Discard and resolve again when configuration reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub(crate) hosting_model: HostingModel,
    pub(crate) handler_version: String,
    pub(crate) process_path: String,
    pub(crate) arguments: String,
    pub(crate) stdout_log_enabled: bool,
    pub(crate) stdout_log_file: String,
    pub(crate) disable_startup_error_page: bool,
    pub(crate) is_development_environment: bool,
}

impl ResolvedOptions {
    /// Hosting model.
    pub fn hosting_model(&self) -> HostingModel {
        self.hosting_model
    }

    /// Requested handler revision.
    ///
    /// Always empty unless the hosting model is out-of-process.
    pub fn handler_version(&self) -> &str {
        &self.handler_version
    }

    /// Executable to launch.
    pub fn process_path(&self) -> &str {
        &self.process_path
    }

    /// Arguments for the executable.
    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    /// Whether stdout of the hosted process is captured to a file.
    pub fn stdout_log_enabled(&self) -> bool {
        self.stdout_log_enabled
    }

    /// Path prefix of the stdout capture file.
    pub fn stdout_log_file(&self) -> &str {
        &self.stdout_log_file
    }

    /// Whether the startup error page is suppressed.
    pub fn disable_startup_error_page(&self) -> bool {
        self.disable_startup_error_page
    }

    /// Whether the process environment marks this as a development machine.
    pub fn is_development_environment(&self) -> bool {
        self.is_development_environment
    }
}
