//! Error type for data-access operations

/// Failure to complete a request against the storefront API.
///
/// Application-level rejections (`success: false`) are not errors; they come
/// back as ordinary replies. Everything here means the round trip itself
/// could not produce a usable answer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
