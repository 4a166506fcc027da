//! Options resolution for the hosted process launcher shim.
//!
//! This crate turns a sectioned configuration snapshot and the process
//! environment into a strongly-typed [`ResolvedOptions`] record that controls:
//! - the hosting model (in-process or out-of-process)
//! - the executable path and its arguments
//! - stdout capture and the startup error page
//! - whether the machine counts as a development environment
//!
//! # Overview
//!
//! [`OptionsResolver`] only depends on two capabilities:
//!
//! - [`ConfigurationSource`] / [`ConfigurationSection`] - sectioned scalar and
//!   key/value block lookups
//! - [`EnvironmentReader`] - environment variable lookups
//!
//! [`FileConfiguration`] (built with [`ConfigLoader`]) and
//! [`ProcessEnvironment`] / [`MapEnvironment`] are the implementations shipped
//! here.
//!
//! # Example
//!
//! ```no_run
//! use shim_config::{ConfigLoader, OptionsResolver, ProcessEnvironment};
//!
//! # fn main() -> Result<(), shim_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_file("applicationHost.toml")?
//!     .with_optional_file("web.toml")?
//!     .load();
//!
//! let options = OptionsResolver::resolve(&config, &ProcessEnvironment)?;
//! println!("Launching {} {}", options.process_path(), options.arguments());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! ["system.webServer/aspNetCore"]
//! processPath = "dotnet"
//! arguments = ".\\MyApp.dll"
//! stdoutLogEnabled = true
//! stdoutLogFile = ".\\logs\\stdout"
//! disableStartupErrorPage = false
//! hostingModel = "outofprocess"
//!
//! ["system.webServer/aspNetCore".handlerSettings]
//! handlerVersion = "2.1"
//!
//! ["system.webServer/aspNetCore".environmentVariables]
//! ASPNETCORE_URLS = "http://localhost:5000"
//! ```
//!
//! # Environment Variables
//!
//! The development flag is derived only from the process environment:
//!
//! - `ASPNETCORE_DETAILEDERRORS=1` or `true`
//! - `ASPNETCORE_ENVIRONMENT=Development`
//! - `DOTNET_ENVIRONMENT=Development`
//!
//! Values in the file's `environmentVariables` block do not count.

#![warn(missing_docs)]

mod env;
mod error;
mod file;
pub mod keys;
mod loader;
mod options;
mod resolver;
mod source;

pub use env::{EnvironmentReader, MapEnvironment, ProcessEnvironment};
pub use error::ConfigError;
pub use file::{FileConfiguration, FileSection, Format};
pub use loader::ConfigLoader;
pub use options::{HostingModel, ResolvedOptions};
pub use resolver::{
    is_detailed_errors_value, is_development_environment, is_development_name, OptionsResolver,
};
pub use source::{ConfigurationSection, ConfigurationSource, KeyValuePairs};
