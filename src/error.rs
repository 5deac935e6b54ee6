use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Could not parse receipt: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid field value: {0}")]
    InvalidField(String),
    #[error("Receipt ID does not exist: {0}")]
    NotFound(String),
    #[error("Store error: {0}")]
    Store(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
