use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrooveError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Combo Library Error: {0}")]
    Library(String),

    #[error("Trace Error: {0}")]
    Trace(String),
}

pub type GrooveResult<T> = Result<T, GrooveError>;
