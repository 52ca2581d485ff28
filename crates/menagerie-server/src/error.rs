//! Error types for the HTTP layer.
//!
//! [`WebError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Server
//! side failures are logged with their cause and answered with a generic
//! message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use menagerie_db::DbError;

use crate::form::FormError;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The requested animal does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A malformed id reached a lookup or update.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// Submitted form fields could not be turned into a valid record.
    #[error("invalid form: {0}")]
    Validation(#[from] FormError),

    /// The store rejected an operation.
    #[error("persistence error: {0}")]
    Persistence(DbError),

    /// A view failed to render.
    #[error("template error: {0}")]
    Template(String),
}

impl From<DbError> for WebError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::InvalidId(e) => Self::InvalidId(e.to_string()),
            other => Self::Persistence(other),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidId(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Persistence(e) => {
                tracing::error!(error = %e, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("internal server error"),
                )
            }
            Self::Template(msg) => {
                tracing::error!(error = %msg, "View rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("internal server error"),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use menagerie_types::AnimalId;

    use super::*;

    #[test]
    fn invalid_id_maps_to_bad_request() {
        let parse_err = AnimalId::parse("bogus").unwrap_err();
        let err = WebError::from(DbError::from(parse_err));
        assert!(matches!(err, WebError::InvalidId(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn persistence_maps_to_internal_error() {
        let err = WebError::from(DbError::Config(String::from("boom")));
        assert!(matches!(err, WebError::Persistence(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = WebError::NotFound(String::from("animal"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
