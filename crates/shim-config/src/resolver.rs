//! Options resolution.
//!
//! [`OptionsResolver`] turns a configuration snapshot plus the process
//! environment into [`ResolvedOptions`]. Resolution is a single synchronous
//! pass: each lookup happens once, failures propagate immediately, and no
//! partially populated record is ever returned.

use tracing::debug;

use crate::keys;
use crate::{
    ConfigError, ConfigurationSource, EnvironmentReader, HostingModel, ResolvedOptions,
};

/// Resolves [`ResolvedOptions`] from a configuration source and an environment.
///
/// # Example
///
/// ```
/// use shim_config::{ConfigLoader, HostingModel, MapEnvironment, OptionsResolver};
///
/// let toml = r#"
///     ["system.webServer/aspNetCore"]
///     processPath = "dotnet"
///     arguments = "MyApp.dll"
///     stdoutLogEnabled = false
///     stdoutLogFile = "logs/stdout"
///     disableStartupErrorPage = false
///     hostingModel = "InProcess"
/// "#;
///
/// let config = ConfigLoader::new().with_string(toml, "toml").unwrap().load();
/// let env = MapEnvironment::new().with_var("DOTNET_ENVIRONMENT", "development");
///
/// let options = OptionsResolver::resolve(&config, &env).unwrap();
/// assert_eq!(options.hosting_model(), HostingModel::InProcess);
/// assert_eq!(options.arguments(), "MyApp.dll");
/// assert!(options.is_development_environment());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionsResolver;

impl OptionsResolver {
    /// Resolve options.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingSection` if the shim section is absent
    /// - `ConfigError::InvalidHostingModel` for an unrecognized `hostingModel`
    /// - `ConfigError::MissingField` if a required value is missing, empty, or
    ///   not a boolean where one is expected
    pub fn resolve<S, E>(source: &S, environment: &E) -> Result<ResolvedOptions, ConfigError>
    where
        S: ConfigurationSource + ?Sized,
        E: EnvironmentReader + ?Sized,
    {
        let section = source.get_required_section(keys::ASPNETCORE_SECTION)?;

        let hosting_model_value = section.get_string(keys::HOSTING_MODEL).unwrap_or_default();
        let hosting_model = HostingModel::from_config_value(&hosting_model_value)
            .ok_or_else(|| ConfigError::invalid_hosting_model(&hosting_model_value))?;
        debug!(%hosting_model, "resolved hosting model");

        // Handler settings only apply out of process; never read them otherwise.
        let handler_version = if hosting_model == HostingModel::OutOfProcess {
            section
                .get_key_value_pairs(keys::HANDLER_SETTINGS)
                .get(keys::HANDLER_VERSION)
                .cloned()
                .unwrap_or_default()
        } else {
            String::new()
        };

        let process_path = section.get_required_string(keys::PROCESS_PATH)?;
        let arguments = section
            .get_string(keys::ARGUMENTS)
            .unwrap_or_else(|| keys::ARGUMENTS_DEFAULT.to_string());
        let stdout_log_enabled = section.get_required_bool(keys::STDOUT_LOG_ENABLED)?;
        let stdout_log_file = section.get_required_string(keys::STDOUT_LOG_FILE)?;
        let disable_startup_error_page =
            section.get_required_bool(keys::DISABLE_STARTUP_ERROR_PAGE)?;

        let is_development_environment = is_development_environment(environment);
        debug!(is_development_environment, "evaluated development environment");

        Ok(ResolvedOptions {
            hosting_model,
            handler_version,
            process_path,
            arguments,
            stdout_log_enabled,
            stdout_log_file,
            disable_startup_error_page,
            is_development_environment,
        })
    }
}

impl ResolvedOptions {
    /// Shorthand for [`OptionsResolver::resolve`].
    pub fn resolve<S, E>(source: &S, environment: &E) -> Result<Self, ConfigError>
    where
        S: ConfigurationSource + ?Sized,
        E: EnvironmentReader + ?Sized,
    {
        OptionsResolver::resolve(source, environment)
    }
}

/// Whether the process environment marks a development machine.
///
/// Only real environment variables count. Variables declared in the
/// configuration file's `environmentVariables` block are not consulted.
pub fn is_development_environment<E>(environment: &E) -> bool
where
    E: EnvironmentReader + ?Sized,
{
    let read = |name: &str| environment.get_value(name).unwrap_or_default();

    is_detailed_errors_value(&read(keys::ENV_DETAILED_ERRORS))
        || is_development_name(&read(keys::ENV_ASPNETCORE_ENVIRONMENT))
        || is_development_name(&read(keys::ENV_DOTNET_ENVIRONMENT))
}

/// Whether a detailed-errors value enables detailed errors (`1` or `true`, any case).
pub fn is_detailed_errors_value(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Whether an environment name is `Development`, ignoring case.
pub fn is_development_name(value: &str) -> bool {
    value.eq_ignore_ascii_case(keys::DEVELOPMENT_ENVIRONMENT_NAME)
}
