//! Error types for anomaly-detector

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed completion response: {0}")]
    MalformedCompletion(String),

    #[error("Completion text was empty")]
    EmptyCompletion,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedCompletion(msg.into())
    }
}
