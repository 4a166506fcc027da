//! Command-line argument parsing.

use std::path::PathBuf;

/// What the binary was asked to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Resolve options.
    Run(Args),
    /// Print usage.
    Help,
    /// Print the version.
    Version,
}

/// Arguments of a resolve run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    /// Configuration files, lowest precedence first.
    pub configs: Vec<PathBuf>,
    /// `.env` file used instead of the process environment.
    pub env_file: Option<PathBuf>,
    /// Human-readable debug logging.
    pub verbose: bool,
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse_from<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut parsed = Args::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--env-file" | "-e" => {
                    let path = args
                        .next()
                        .ok_or_else(|| format!("Missing value for {arg}"))?;
                    parsed.env_file = Some(PathBuf::from(path));
                }
                "--verbose" | "-v" => parsed.verbose = true,
                "--help" | "-h" => return Ok(Self::Help),
                "--version" | "-V" => return Ok(Self::Version),
                other if other.starts_with('-') => {
                    return Err(format!("Unknown argument: {other}"));
                }
                path => parsed.configs.push(PathBuf::from(path)),
            }
        }

        if parsed.configs.is_empty() {
            return Err("At least one configuration file is required".to_string());
        }

        Ok(Self::Run(parsed))
    }
}

pub fn print_help() {
    println!(
        r"Shim options resolver

Resolves the hosted process launch options from layered configuration files
and prints them as JSON.

USAGE:
    shim-resolve [OPTIONS] <CONFIG>...

ARGS:
    <CONFIG>...            Configuration files (TOML or JSON), lowest precedence first

OPTIONS:
    -e, --env-file <PATH>  Read environment variables from a .env file instead of the process
    -v, --verbose          Human-readable debug logs
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    ASPNETCORE_DETAILEDERRORS   1 or true marks a development environment
    ASPNETCORE_ENVIRONMENT      Development marks a development environment
    DOTNET_ENVIRONMENT          Development marks a development environment
    RUST_LOG                    Log filter (default: info)

EXAMPLES:
    shim-resolve applicationHost.toml web.json
    shim-resolve --env-file .env web.toml
"
    );
}
