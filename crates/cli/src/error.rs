use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// Help or version was requested. Carries the text to print; not a failure.
    #[error("{0}")]
    Help(String),

    #[error("{0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            CliError::Io(err) => err.kind() == std::io::ErrorKind::BrokenPipe,
            CliError::Json(err) => err.io_error_kind() == Some(std::io::ErrorKind::BrokenPipe),
            _ => false,
        }
    }
}
