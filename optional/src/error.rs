use thiserror::Error;

/// Returned by the checked accessors of an empty `Optional`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("optional is empty")]
#[non_exhaustive]
pub struct EmptyError;
