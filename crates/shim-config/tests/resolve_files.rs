//! End-to-end resolution tests.
//!
//! These tests load real files from disk, layer them, and resolve options
//! against injected environments:
//!
//! 1. TOML and JSON documents resolve identically
//! 2. Application files override server files
//! 3. `.env` files feed the development flag without touching the process

use std::io::Write;
use std::path::PathBuf;

use shim_config::{
    keys, ConfigError, ConfigLoader, HostingModel, MapEnvironment, OptionsResolver,
    ResolvedOptions,
};
use tempfile::TempDir;

const SERVER_TOML: &str = r#"
["system.webServer/aspNetCore"]
processPath = "dotnet"
stdoutLogEnabled = false
stdoutLogFile = ".\\logs\\stdout"
disableStartupErrorPage = false

["system.webServer/aspNetCore".handlerSettings]
handlerVersion = "2.0"
debugLevel = "FILE"
"#;

const APP_JSON: &str = r#"{
    "system.webServer/aspNetCore": {
        "arguments": ".\\MyApp.dll",
        "stdoutLogEnabled": true,
        "handlerSettings": { "handlerVersion": "2.1" },
        "environmentVariables": { "ASPNETCORE_ENVIRONMENT": "Development" }
    }
}"#;

/// Writes `content` to `name` inside `dir`.
fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_layered_files_resolve() {
    let dir = TempDir::new().unwrap();
    let server = write_file(&dir, "applicationHost.toml", SERVER_TOML);
    let app = write_file(&dir, "web.json", APP_JSON);

    let config = ConfigLoader::new()
        .with_file(&server)
        .unwrap()
        .with_file(&app)
        .unwrap()
        .load();

    let options = OptionsResolver::resolve(&config, &MapEnvironment::new()).unwrap();

    assert_eq!(options.hosting_model(), HostingModel::OutOfProcess);
    assert_eq!(options.handler_version(), "2.1");
    assert_eq!(options.process_path(), "dotnet");
    assert_eq!(options.arguments(), ".\\MyApp.dll");
    assert!(options.stdout_log_enabled());
    assert_eq!(options.stdout_log_file(), ".\\logs\\stdout");
    assert!(!options.disable_startup_error_page());
    // Declared in the file, not in the process environment.
    assert!(!options.is_development_environment());
}

#[test]
fn test_toml_and_json_resolve_identically() {
    let toml = r#"
        ["system.webServer/aspNetCore"]
        processPath = "app.exe"
        hostingModel = "InProcess"
        stdoutLogEnabled = true
        stdoutLogFile = "logs/stdout"
        disableStartupErrorPage = true
    "#;
    let json = r#"{"system.webServer/aspNetCore": {
        "processPath": "app.exe",
        "hostingModel": "InProcess",
        "stdoutLogEnabled": true,
        "stdoutLogFile": "logs/stdout",
        "disableStartupErrorPage": true
    }}"#;

    let env = MapEnvironment::new();
    let from_toml = ConfigLoader::new().with_string(toml, "toml").unwrap().load();
    let from_json = ConfigLoader::new().with_string(json, "json").unwrap().load();

    let a = OptionsResolver::resolve(&from_toml, &env).unwrap();
    let b = OptionsResolver::resolve(&from_json, &env).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.hosting_model(), HostingModel::InProcess);
    assert_eq!(a.arguments(), ".");
}

#[test]
fn test_optional_app_file_missing() {
    let dir = TempDir::new().unwrap();
    let server = write_file(&dir, "applicationHost.toml", SERVER_TOML);

    let config = ConfigLoader::new()
        .with_file(&server)
        .unwrap()
        .with_optional_file(dir.path().join("web.json"))
        .unwrap()
        .load();

    let options = ResolvedOptions::resolve(&config, &MapEnvironment::new()).unwrap();
    assert_eq!(options.handler_version(), "2.0");
    assert_eq!(options.arguments(), ".");
    assert!(!options.stdout_log_enabled());
}

#[test]
fn test_dotenv_environment() {
    let dir = TempDir::new().unwrap();
    let server = write_file(&dir, "applicationHost.toml", SERVER_TOML);
    let dotenv = write_file(&dir, ".env", "ASPNETCORE_DETAILEDERRORS=TRUE\n");

    let config = ConfigLoader::new().with_file(&server).unwrap().load();
    let env = MapEnvironment::from_dotenv(&dotenv).unwrap();

    let options = OptionsResolver::resolve(&config, &env).unwrap();
    assert!(options.is_development_environment());
}

#[test]
fn test_invalid_hosting_model_from_file() {
    let dir = TempDir::new().unwrap();
    let server = write_file(&dir, "applicationHost.toml", SERVER_TOML);
    let app = write_file(
        &dir,
        "web.json",
        r#"{"system.webServer/aspNetCore": {"hostingModel": "weird-value"}}"#,
    );

    let config = ConfigLoader::new()
        .with_file(&server)
        .unwrap()
        .with_file(&app)
        .unwrap()
        .load();

    let err = OptionsResolver::resolve(&config, &MapEnvironment::new()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHostingModel { .. }));
    assert!(err.to_string().contains("weird-value"));
}

#[test]
fn test_missing_section_in_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "web.toml", "[system]\nname = \"other\"\n");

    let config = ConfigLoader::new().with_file(&path).unwrap().load();
    let env = MapEnvironment::new().with_var(keys::ENV_DOTNET_ENVIRONMENT, "Development");

    let err = OptionsResolver::resolve(&config, &env).unwrap_err();
    assert!(
        matches!(err, ConfigError::MissingSection { ref section } if section == keys::ASPNETCORE_SECTION)
    );
}
