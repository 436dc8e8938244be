use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
