use anomaly_detector::config::{
    AppConfig, CompletionSection, DetectorMode, DetectorSection, LogFormat,
};
use tempfile::TempDir;

#[test]
fn defaults_use_fixed_detector() {
    let config = AppConfig::default();

    assert_eq!(config.detector.mode, DetectorMode::Fixed);
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    assert!(config.validate().is_ok());
}

#[test]
fn fixed_mode_ignores_blank_api_key() {
    let config = AppConfig {
        detector: DetectorSection {
            mode: DetectorMode::Fixed,
            completion: CompletionSection {
                api_key: String::new(),
                url: String::new(),
                ..Default::default()
            },
        },
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn completion_mode_requires_api_key() {
    let config = AppConfig {
        detector: DetectorSection {
            mode: DetectorMode::Completion,
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(
        config.validate().is_err(),
        "Expected completion mode without api_key to fail validation"
    );
}

#[test]
fn completion_mode_requires_positive_max_tokens() {
    let config = AppConfig {
        detector: DetectorSection {
            mode: DetectorMode::Completion,
            completion: CompletionSection {
                api_key: "sk-test".into(),
                max_tokens: 0,
                ..Default::default()
            },
        },
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.detector.mode, DetectorMode::Fixed);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn toml_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 9100

[logging]
level = "debug"
format = "text"

[detector]
mode = "completion"

[detector.completion]
api_key = "sk-from-file"
model = "gpt-test"
max_tokens = 64
"#,
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:9100");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.detector.mode, DetectorMode::Completion);
    assert_eq!(config.detector.completion.api_key, "sk-from-file");
    assert_eq!(config.detector.completion.model, "gpt-test");
    assert_eq!(config.detector.completion.max_tokens, 64);
    assert_eq!(config.detector.completion.timeout_secs, 30);
}

#[test]
fn invalid_file_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[detector]\nmode = \"completion\"\n").unwrap();

    assert!(AppConfig::load_from(&path).is_err());
}

#[test]
fn completion_mode_rejects_zero_timeout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[detector]
mode = "completion"

[detector.completion]
api_key = "sk-test"
timeout_secs = 0
"#,
    )
    .unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(
        err.to_string().contains("timeout_secs"),
        "unexpected error: {err}"
    );
}
