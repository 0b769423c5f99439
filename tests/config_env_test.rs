//! Environment overrides for `AppConfig::load`
//!
//! Kept in its own test binary with a single test: environment variables are
//! process-wide, so nothing else here may read or write them concurrently.

use anomaly_detector::config::{AppConfig, DetectorMode, LogFormat};
use tempfile::TempDir;

#[test]
fn environment_overrides_file_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("service.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 7000

[logging]
format = "text"
"#,
    )
    .unwrap();

    std::env::set_var("ANOMALY_CONFIG", &path);
    std::env::set_var("ANOMALY_SERVER__PORT", "9001");
    std::env::set_var("ANOMALY_DETECTOR__MODE", "completion");
    std::env::set_var("ANOMALY_DETECTOR__COMPLETION__API_KEY", "12345");

    let config = AppConfig::load().expect("environment configuration should load");

    // file values survive where the environment is silent
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.logging.format, LogFormat::Text);

    assert_eq!(config.server.port, 9001);
    assert_eq!(config.detector.mode, DetectorMode::Completion);
    assert_eq!(config.detector.completion.api_key, "12345");

    // without the file, only the environment applies
    std::env::set_var("ANOMALY_CONFIG", dir.path().join("absent.toml"));
    let config = AppConfig::load().expect("missing file should fall back to defaults");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9001);
    assert_eq!(config.detector.completion.api_key, "12345");

    for key in [
        "ANOMALY_CONFIG",
        "ANOMALY_SERVER__PORT",
        "ANOMALY_DETECTOR__MODE",
        "ANOMALY_DETECTOR__COMPLETION__API_KEY",
    ] {
        std::env::remove_var(key);
    }
}
