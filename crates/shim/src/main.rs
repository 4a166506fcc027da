//! Shim options resolver - Entry point
//!
//! Loads layered configuration files, resolves the launch options, and prints
//! them as JSON. Exits non-zero when the configuration is invalid.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};

use cli::{Args, Command};
use shim_config::{ConfigLoader, MapEnvironment, OptionsResolver, ProcessEnvironment};
use shim_telemetry::{init_logging, LogConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let args = match Command::parse_from(std::env::args().skip(1)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            cli::print_help();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("shim-resolve {VERSION}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Use --help for usage information");
            return ExitCode::from(2);
        }
    };

    let log_config = if args.verbose {
        LogConfig::development()
    } else {
        LogConfig::default().with_level(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
    };
    let logging_ready = match init_logging(&log_config) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("warning: {e}");
            false
        }
    };

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            match FailureChannel::select(logging_ready) {
                FailureChannel::Log => {
                    error!("Invalid configuration, the hosted process must not start: {e:#}");
                }
                FailureChannel::Stderr => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Where a resolution failure is reported. Each failure goes to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureChannel {
    Log,
    Stderr,
}

impl FailureChannel {
    fn select(logging_ready: bool) -> Self {
        if logging_ready {
            Self::Log
        } else {
            Self::Stderr
        }
    }
}

fn run(args: &Args) -> anyhow::Result<String> {
    let mut loader = ConfigLoader::new();
    for path in &args.configs {
        info!("Loading configuration from {:?}", path);
        loader = loader
            .with_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
    }
    let config = loader.load();

    let options = match &args.env_file {
        Some(path) => {
            info!("Reading environment from {:?}", path);
            let env = MapEnvironment::from_dotenv(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            OptionsResolver::resolve(&config, &env)?
        }
        None => OptionsResolver::resolve(&config, &ProcessEnvironment)?,
    };

    info!(
        hosting_model = %options.hosting_model(),
        process_path = options.process_path(),
        is_development_environment = options.is_development_environment(),
        "Resolved launch options"
    );

    Ok(serde_json::to_string_pretty(&options)?)
}
