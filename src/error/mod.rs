//! Error types for the Pavilion engine.
//!
//! This module provides the error handling system for the engine, with
//! specialized error types for configuration and tournament progression
//! failures. All errors use `thiserror` for ergonomic definitions with
//! automatic `Display` and `Error` trait implementations, and every error
//! maps to a retry strategy (see [`retry`]) so service-level retry loops can
//! distinguish transient store failures from permanent ones.

pub mod config;
pub mod retry;
pub mod tournament;

use thiserror::Error;

use crate::error::{config::ConfigError, tournament::TournamentError};

/// Main error type for the Pavilion engine.
///
/// This enum aggregates the domain-specific error types and external library
/// errors into a single unified error type. It uses `thiserror`'s `#[from]`
/// attribute to enable automatic conversion from underlying error types via
/// the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing or invalid environment variables)
/// - Tournament errors (missing references, invalid progression
///   configuration, insufficient qualifiers)
/// - Database errors (query failures, connection issues, write conflicts)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Tournament progression error (missing references, invalid knockout
    /// configuration, insufficient qualifiers).
    #[error(transparent)]
    TournamentError(#[from] TournamentError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Pavilion's code.
    ///
    /// This error should never occur in normal operation and indicates a
    /// programming error that needs to be reported as a GitHub issue.
    #[error("Internal error with Pavilion's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Both arms of a failed transaction carry a database error; the
/// distinction between losing the connection and failing inside the
/// transaction body does not matter above the retry layer.
impl From<sea_orm::TransactionError<sea_orm::DbErr>> for Error {
    fn from(err: sea_orm::TransactionError<sea_orm::DbErr>) -> Self {
        match err {
            sea_orm::TransactionError::Connection(err) => Self::DbErr(err),
            sea_orm::TransactionError::Transaction(err) => Self::DbErr(err),
        }
    }
}
