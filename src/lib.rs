//! anomaly-detector - HTTP service reporting anomalies in submitted data
//!
//! A single `POST /detect-anomalies` route accepts any JSON payload and
//! answers with a `{"detected": ...}` object. The answer comes from a
//! pluggable [`detector::AnomalyDetector`]:
//! - `fixed` (default): a constant finding, no I/O
//! - `completion`: prompt an upstream text-completion API

pub mod api;
pub mod config;
pub mod detector;
pub mod error;

pub use error::{Error, Result};
