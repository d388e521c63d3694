use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelforgeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Service account credentials not loaded")]
    CredentialsMissing,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelforgeError>;
