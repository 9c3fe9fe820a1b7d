use thiserror::Error;

#[derive(Error, Debug)]
pub enum HormodularError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Empty topology path")]
    EmptyPath,

    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Malformed description: {0}")]
    MalformedDescription(String),

    #[error("Results file error: {0}")]
    ResultsFile(String),

    #[error("Gait table format error: {0}")]
    GaitTableFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Launch error: {0}")]
    Launch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HormodularError>;
