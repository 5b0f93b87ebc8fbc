use thiserror::Error;

pub type SwapResult<T> = Result<T, SwapError>;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Routing engine rejected request ({status}): {body}")]
    EngineRejected { status: u16, body: String },

    #[error("Routing engine error: {0}")]
    EngineError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Timeout: operation took longer than {0} seconds")]
    Timeout(u64),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for SwapError {
    fn from(err: anyhow::Error) -> Self {
        SwapError::Other(err.to_string())
    }
}

impl From<reqwest::Error> for SwapError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return SwapError::NetworkError(format!("request timed out: {}", err));
        }
        if err.is_decode() {
            return SwapError::SerializationError(err.to_string());
        }
        SwapError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for SwapError {
    fn from(err: serde_json::Error) -> Self {
        SwapError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for SwapError {
    fn from(err: std::io::Error) -> Self {
        SwapError::Other(err.to_string())
    }
}
