use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid key=value pair: {0}")]
    InvalidKeyValue(String),

    #[error("invalid run id: {0}")]
    InvalidRunId(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
