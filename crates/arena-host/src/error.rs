use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("battle script parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HostResult<T> = Result<T, HostError>;
