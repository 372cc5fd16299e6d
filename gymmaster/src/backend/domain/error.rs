//! Domain-level failures.
//!
//! Services return `anyhow::Result`; the failures a caller is expected to
//! recover from are raised as [`DomainError`] so they can be told apart with
//! `err.downcast_ref::<DomainError>()`. Storage failures stay plain `anyhow`
//! errors.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Missing required field, non-positive amount or malformed date
    #[error("{0}")]
    Validation(String),
    #[error("Member not found: {0}")]
    MemberNotFound(String),
    #[error("Email already in use: {0}")]
    DuplicateEmail(String),
}

impl DomainError {
    /// Find the domain error behind an `anyhow` error, if there is one
    pub fn from_anyhow(err: &anyhow::Error) -> Option<&DomainError> {
        err.downcast_ref::<DomainError>()
    }
}
