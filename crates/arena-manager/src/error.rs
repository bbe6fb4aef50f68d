use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManagerError {
    /// Two states registered with the same declared name would alias each
    /// other in the performance ledger.
    #[error("a state named {0:?} is already registered")]
    DuplicateState(String),
}

pub type ManagerResult<T> = Result<T, ManagerError>;
