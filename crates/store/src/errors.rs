use std::fmt;
use thiserror::Error;

/// Normalized store failure: every underlying cause (transport, decode,
/// backend rejection) collapses to the failing operation plus a message.
/// The same value sits in the error slot and travels to the caller, so the
/// type is Clone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} failed: {message}")]
pub struct StoreError {
    pub operation: String,
    pub message: String,
}

impl StoreError {
    pub fn new<E: fmt::Display>(operation: &str, source: E) -> Self {
        Self {
            operation: operation.to_string(),
            message: source.to_string(),
        }
    }
}
