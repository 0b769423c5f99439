use std::env;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::error::Error;

pub const DEFAULT_COMPLETION_URL: &str = "https://api.openai.com/v1/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "text-davinci-003";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub detector: DetectorSection,
}

impl AppConfig {
    /// Load configuration from `ANOMALY_CONFIG` (default `config.toml`) and
    /// `ANOMALY_*` environment variables.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("ANOMALY_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(config_path)
    }

    /// Load configuration from the given file (skipped when missing) with
    /// environment overrides layered on top.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ANOMALY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject combinations that cannot produce a working detector.
    pub fn validate(&self) -> Result<()> {
        if self.detector.mode != DetectorMode::Completion {
            return Ok(());
        }

        self.detector.completion.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DetectorSection {
    pub mode: DetectorMode,
    pub completion: CompletionSection,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DetectorMode {
    #[default]
    Fixed,
    Completion,
}

impl DetectorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorMode::Fixed => "fixed",
            DetectorMode::Completion => "completion",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompletionSection {
    pub url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for CompletionSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_COMPLETION_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            max_tokens: 100,
            timeout_secs: 30,
        }
    }
}

impl CompletionSection {
    /// Settings an upstream client needs before it can make a single call.
    pub fn validate(&self) -> crate::Result<()> {
        if self.url.trim().is_empty() {
            return Err(Error::config(
                "detector.completion.url must be specified in completion mode",
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err(Error::config(
                "detector.completion.api_key must be specified in completion mode",
            ));
        }
        if self.max_tokens == 0 {
            return Err(Error::config(
                "detector.completion.max_tokens must be greater than zero",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config(
                "detector.completion.timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }
}
