use thiserror::Error;

#[derive(Error, Debug)]
pub enum PfError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Input: {0}")]
    Input(String),

    #[error("Invalid Config: {0}")]
    Config(String),

    #[error("Invariant Violation: {0}")]
    Invariant(String),
}

pub type PfResult<T> = Result<T, PfError>;
