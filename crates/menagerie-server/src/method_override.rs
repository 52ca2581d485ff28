//! HTTP method override for HTML forms.
//!
//! Browsers can only submit forms as `GET` or `POST`. A `POST` carrying a
//! `_method` parameter, either in the query string or as a url-encoded
//! body field, is rewritten to that method before routing so the form can
//! reach `PUT` and `DELETE` routes. The query string wins when both are
//! present. Only `PUT`, `PATCH`, and `DELETE` are accepted as overrides.
//!
//! The middleware must wrap the whole router, since route matching has
//! already happened by the time a per-route layer runs.

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Name of the override parameter.
pub const OVERRIDE_FIELD: &str = "_method";

/// Largest form body buffered while looking for the override field.
const MAX_FORM_BYTES: usize = 64 * 1024;

/// Rewrite `POST` requests that carry a `_method` override.
pub async fn method_override(req: Request, next: Next) -> Response {
    if req.method() != Method::POST {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    if let Some(method) = parts.uri.query().and_then(|q| find_override(q.as_bytes())) {
        tracing::debug!(%method, path = %parts.uri.path(), "Method override from query");
        parts.method = method;
        return next.run(Request::from_parts(parts, body)).await;
    }

    if !is_form(&parts.headers) {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let bytes = match axum::body::to_bytes(body, MAX_FORM_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Form body rejected while checking method override");
            return (StatusCode::PAYLOAD_TOO_LARGE, "form body too large").into_response();
        }
    };

    if let Some(method) = find_override(&bytes) {
        tracing::debug!(%method, path = %parts.uri.path(), "Method override from form");
        parts.method = method;
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Whether the request declares a url-encoded form body.
fn is_form(headers: &axum::http::HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Find an accepted `_method` value in url-encoded pairs.
fn find_override(encoded: &[u8]) -> Option<Method> {
    url::form_urlencoded::parse(encoded)
        .find(|(key, _)| key == OVERRIDE_FIELD)
        .and_then(|(_, value)| parse_override(&value))
}

/// Map an override value onto a method, ignoring anything but `PUT`,
/// `PATCH`, and `DELETE`.
fn parse_override(value: &str) -> Option<Method> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("PUT") {
        Some(Method::PUT)
    } else if value.eq_ignore_ascii_case("PATCH") {
        Some(Method::PATCH)
    } else if value.eq_ignore_ascii_case("DELETE") {
        Some(Method::DELETE)
    } else {
        None
    }
}
