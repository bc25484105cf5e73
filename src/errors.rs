//! Unified application error type.
//! The store itself never fails; every other layer (validation, cli, export,
//! config) returns AppError to keep error handling consistent.

use crate::models::Id;
use std::fmt;
use std::io;
use thiserror::Error;

/// Key used to address a missing row: either a handle or a secondary key
/// such as a username or an email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Id(Id),
    Name(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "#{id}"),
            LookupKey::Name(name) => write!(f, "'{name}'"),
        }
    }
}

impl From<Id> for LookupKey {
    fn from(id: Id) -> Self {
        LookupKey::Id(id)
    }
}

impl From<&str> for LookupKey {
    fn from(name: &str) -> Self {
        LookupKey::Name(name.to_string())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("{kind} {key} not found")]
    NotFound { kind: &'static str, key: LookupKey },

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{kind} with {field} '{value}' already exists")]
    Duplicate {
        kind: &'static str,
        field: &'static str,
        value: String,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / shell
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Shell error: {0}")]
    Shell(String),
}

impl AppError {
    pub fn not_found(kind: &'static str, key: impl Into<LookupKey>) -> Self {
        AppError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn duplicate(kind: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        AppError::Duplicate {
            kind,
            field,
            value: value.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
