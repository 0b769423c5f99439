//! Anomaly detectors
//!
//! The HTTP layer only sees [`AnomalyDetector`]. Which implementation backs it
//! is decided once at startup by [`build_detector`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{DetectorMode, DetectorSection};
use crate::error::{Error, Result};

pub mod completion;

pub use completion::{CompletionClient, HttpCompletionClient};

/// Finding reported by [`FixedDetector`].
pub const FIXED_FINDING: &str = "Spike in sales on July 17th";

/// Result of a detection pass, serialized as `{"detected": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub detected: String,
}

impl Detection {
    pub fn new(detected: impl Into<String>) -> Self {
        Self {
            detected: detected.into(),
        }
    }
}

#[async_trait]
pub trait AnomalyDetector: Send + Sync {
    /// Inspect `payload` and describe what looks anomalous.
    async fn detect(&self, payload: &Value) -> Result<Detection>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Ignores the payload and always reports [`FIXED_FINDING`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDetector;

#[async_trait]
impl AnomalyDetector for FixedDetector {
    async fn detect(&self, _payload: &Value) -> Result<Detection> {
        Ok(Detection::new(FIXED_FINDING))
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Asks an upstream completion model to describe the anomalies.
pub struct CompletionDetector<C> {
    client: C,
}

impl<C: CompletionClient> CompletionDetector<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

/// Render the prompt sent upstream for `payload`.
pub fn build_prompt(payload: &Value) -> String {
    format!("Detect anomalies in this data: {}", payload)
}

#[async_trait]
impl<C: CompletionClient> AnomalyDetector for CompletionDetector<C> {
    async fn detect(&self, payload: &Value) -> Result<Detection> {
        let prompt = build_prompt(payload);
        let text = self.client.complete(&prompt).await?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyCompletion);
        }

        Ok(Detection::new(trimmed))
    }

    fn name(&self) -> &'static str {
        "completion"
    }
}

/// Build the detector selected by configuration.
pub fn build_detector(section: &DetectorSection) -> Result<Arc<dyn AnomalyDetector>> {
    match section.mode {
        DetectorMode::Fixed => Ok(Arc::new(FixedDetector)),
        DetectorMode::Completion => {
            let settings = &section.completion;
            settings.validate()?;

            let client = HttpCompletionClient::new(
                settings.url.clone(),
                settings.api_key.clone(),
                settings.model.clone(),
                settings.max_tokens,
                Duration::from_secs(settings.timeout_secs),
            )?;

            Ok(Arc::new(CompletionDetector::new(client)))
        }
    }
}
