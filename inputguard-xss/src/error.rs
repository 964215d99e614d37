use thiserror::Error;

#[derive(Error, Debug)]
pub enum XssError {
    #[error("Potentially malicious content detected: {0}")]
    MaliciousContent(String),

    #[error("Invalid sanitizer configuration: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, XssError>;
