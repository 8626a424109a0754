//! Integration tests for the cuaca CLI

mod common;

use std::io::Write;
use std::process::{Command, Output};

use common::{API_KEY, current_body, forecast_body, mount_current, mount_forecast};
use tempfile::NamedTempFile;
use wiremock::{MockServer, ResponseTemplate};

fn cuaca(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cuaca"))
        .args(args)
        .env_remove("CUACA_WEATHER__API_KEY")
        .env_remove("CUACA_WEATHER__BASE_URL")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command")
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    write!(file, "{contents}").unwrap();
    file
}

/// Run the binary off the async runtime so the mock server keeps serving
async fn cuaca_async(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        cuaca(&args)
    })
    .await
    .unwrap()
}

#[test]
fn test_cli_help() {
    let output = cuaca(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cuaca"));
    assert!(stdout.contains("provinces"));
    assert!(stdout.contains("regencies"));
    assert!(stdout.contains("weather"));
}

#[test]
fn test_weather_requires_regency_flag() {
    let output = cuaca(&["weather"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--regency"));
}

#[test]
fn test_blank_regency_is_rejected() {
    let output = cuaca(&["weather", "--regency", "   "]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Regency"), "unexpected stderr: {stderr}");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let output = cuaca(&["--config", "/nonexistent/cuaca.toml", "provinces"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration"), "unexpected stderr: {stderr}");
}

#[test]
fn test_missing_api_key_shows_user_message() {
    let config = config_file("[logging]\nlevel = \"warn\"\n");
    let path = config.path().to_str().unwrap();

    let output = cuaca(&["--config", path, "weather", "--regency", "Kota Bandung"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Configuration error. Please check your config file and API key."),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_blank_name_is_rejected() {
    let output = cuaca(&["weather", "--regency", "Kota Bandung", "--name", " "]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Name cannot be empty"), "unexpected stderr: {stderr}");
}

#[tokio::test]
async fn test_weather_greets_user_by_name() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        "Bandung",
        ResponseTemplate::new(200).set_body_json(current_body("Bandung", -6.9222, 107.6069)),
        1,
    )
    .await;
    mount_forecast(
        &server,
        "-6.9222",
        "107.6069",
        ResponseTemplate::new(200).set_body_json(forecast_body()),
        1,
    )
    .await;

    let config = config_file(&format!(
        "[weather]\napi_key = \"{API_KEY}\"\nbase_url = \"{}\"\n",
        server.uri()
    ));
    let args = vec![
        "--config".to_string(),
        config.path().to_string_lossy().into_owned(),
        "weather".to_string(),
        "--regency".to_string(),
        "Kota Bandung".to_string(),
        "--province".to_string(),
        "Jawa Barat".to_string(),
        "--name".to_string(),
        "Ani".to_string(),
    ];

    let output = cuaca_async(args).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains(", Ani!"), "unexpected stdout: {stdout}");
    assert!(stdout.contains("Bandung, ID"));
    assert!(stdout.contains("2024-12-07"));
}
