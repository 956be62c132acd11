#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("response schema mismatch at {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("backend rejected the request (code {code}): {message}")]
    Backend { code: i64, message: String },
    #[error("invalid request: {0}")]
    InvalidInput(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
