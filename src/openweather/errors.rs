use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The provider was unreachable, answered with a non-2xx status or sent a body that isn't JSON.
    #[error("{0}")]
    Request(String),
    /// The provider sent valid JSON that doesn't have the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl UpstreamError {
    pub fn request(err: reqwest::Error) -> Self {
        Self::Request(describe(err))
    }

    pub fn decode(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

// Request URLs carry the API key, so they are stripped before the error reaches a client.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }
    description
}
