use sea_orm::{DbErr, RuntimeErr};

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient store failures)
    Retry,
    /// Failed permanently (bad request or invalid configuration)
    Fail,
}

/// Whether a runtime error from the driver indicates a write conflict that a
/// fresh transaction attempt can resolve (serialization failure on postgres,
/// a locked database file on sqlite).
fn is_write_conflict(err: &RuntimeErr) -> bool {
    let message = err.to_string();

    message.contains("could not serialize")
        || message.contains("serialization failure")
        || message.contains("deadlock detected")
        || message.contains("database is locked")
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // Write conflicts between concurrent transactions on the
                    // same record - the loser re-reads and reapplies
                    DbErr::Exec(err) if is_write_conflict(err) => ErrorRetryStrategy::Retry,
                    DbErr::Query(err) if is_write_conflict(err) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // - Query errors (constraint violations, syntax errors, etc.)
                    // - Type conversion errors
                    // - Schema/migration errors
                    // - Record not found/inserted/updated
                    // These indicate programming bugs or data issues that won't resolve with retry
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Tournament progression errors - permanent failures (missing
            // references, invalid knockout configuration)
            Self::TournamentError(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within Pavilion's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
