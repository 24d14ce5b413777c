// src/error.rs
use thiserror::Error;

/// Failures reported by a platform font renderer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    #[error("Font family not found: {0}")]
    FamilyNotFound(String),

    #[error("No italic descriptor available for family: {family}")]
    ItalicUnavailable { family: String },
}

/// Errors surfaced by scheme configuration and mapping storage
///
/// Lookup misses are not errors; they resolve to `None`.
#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("Invalid configuration: {field} = {value:?}")]
    ConfigurationError { field: String, value: String },

    #[error("Font mapping lock poisoned: {message}")]
    LockPoisoned { message: String },
}

pub type SchemeResult<T> = Result<T, SchemeError>;
