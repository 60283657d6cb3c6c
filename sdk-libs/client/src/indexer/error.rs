use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("{method} returned no result for {id}")]
    NotFound { method: String, id: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("API error {code}: {message}")]
    ApiError { code: i64, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base58 decode error in {field}: {error}")]
    Base58DecodeError { field: String, error: String },

    #[error("Invalid response data: {0}")]
    InvalidResponseData(String),
}

impl IndexerError {
    pub fn not_found(method: &str, id: impl ToString) -> Self {
        IndexerError::NotFound {
            method: method.to_string(),
            id: id.to_string(),
        }
    }

    pub fn base58_decode_error(field: &str, error: impl std::fmt::Display) -> Self {
        IndexerError::Base58DecodeError {
            field: field.to_string(),
            error: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for IndexerError {
    fn from(err: reqwest::Error) -> Self {
        IndexerError::Transport(err.to_string())
    }
}
