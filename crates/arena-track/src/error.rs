use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackError {
    /// The named opponent was never sighted or has been pruned after death.
    /// Geometry against it would be stale, so the query fails instead.
    #[error("unknown or removed opponent {0:?}")]
    UnknownBot(String),
}

pub type TrackResult<T> = Result<T, TrackError>;
