//! Well-known section, key, and environment variable names.
//!
//! Use these constants instead of string literals so the resolver, the file
//! loader, and tests agree on spelling. Key lookups are case-sensitive.

/// Section holding all shim options.
pub const ASPNETCORE_SECTION: &str = "system.webServer/aspNetCore";

/// Hosting model selector (`inprocess` or `outofprocess`).
pub const HOSTING_MODEL: &str = "hostingModel";

/// Token selecting out-of-process hosting.
pub const HOSTING_MODEL_OUT_OF_PROCESS: &str = "outofprocess";

/// Token selecting in-process hosting.
pub const HOSTING_MODEL_IN_PROCESS: &str = "inprocess";

/// Key/value block with handler tuning, read only for out-of-process hosting.
pub const HANDLER_SETTINGS: &str = "handlerSettings";

/// Handler revision inside [`HANDLER_SETTINGS`].
pub const HANDLER_VERSION: &str = "handlerVersion";

/// Executable to launch.
pub const PROCESS_PATH: &str = "processPath";

/// Arguments passed to the executable.
pub const ARGUMENTS: &str = "arguments";

/// Value of [`ARGUMENTS`] when the key is absent.
pub const ARGUMENTS_DEFAULT: &str = ".";

/// Whether the hosted process' stdout is captured to a file.
pub const STDOUT_LOG_ENABLED: &str = "stdoutLogEnabled";

/// Path prefix for captured stdout.
pub const STDOUT_LOG_FILE: &str = "stdoutLogFile";

/// Suppresses the startup error page.
pub const DISABLE_STARTUP_ERROR_PAGE: &str = "disableStartupErrorPage";

/// Key/value block of variables handed to the hosted process.
///
/// Never consulted when deciding whether this is a development environment.
pub const ENVIRONMENT_VARIABLES: &str = "environmentVariables";

/// Process environment variable enabling detailed errors.
pub const ENV_DETAILED_ERRORS: &str = "ASPNETCORE_DETAILEDERRORS";

/// Process environment variable naming the ASP.NET Core environment.
pub const ENV_ASPNETCORE_ENVIRONMENT: &str = "ASPNETCORE_ENVIRONMENT";

/// Process environment variable naming the .NET environment.
pub const ENV_DOTNET_ENVIRONMENT: &str = "DOTNET_ENVIRONMENT";

/// Environment name that marks a development environment.
pub const DEVELOPMENT_ENVIRONMENT_NAME: &str = "Development";
