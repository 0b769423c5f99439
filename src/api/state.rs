//! API server state

use std::sync::Arc;

use crate::detector::{AnomalyDetector, FixedDetector};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Detector answering `/detect-anomalies`
    pub detector: Arc<dyn AnomalyDetector>,
}

impl AppState {
    pub fn new(detector: Arc<dyn AnomalyDetector>) -> Self {
        Self { detector }
    }

    /// State backed by [`FixedDetector`]
    pub fn fixed() -> Self {
        Self::new(Arc::new(FixedDetector))
    }
}
