use thiserror::Error;

/// Failures talking to the catalog API. Callers degrade these to an empty
/// listing plus a user-visible notice; nothing here is fatal.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("YouTube API error {status}: {body}")]
    Api { status: reqwest::StatusCode, body: String },
}
