//! Error types for the persistence gateway.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] errors and the identifier parse failure that lookups by id can
//! produce. A missing record is not an error: lookups return `Ok(None)`.

use menagerie_types::InvalidIdError;

/// Errors that can occur in the persistence gateway.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed (connection, constraint, type coercion).
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A malformed identifier reached a lookup or update.
    #[error("{0}")]
    InvalidId(#[from] InvalidIdError),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
