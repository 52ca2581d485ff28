//! Shared application state for the HTTP server.
//!
//! [`AppState`] holds the persistence gateway and the view engine. It is
//! constructed once at startup and handed to the router, so handlers
//! never reach for a process-wide database handle and tests can inject
//! an in-memory store.

use menagerie_db::AnimalStore;

use crate::config::DEFAULT_PUBLIC_DIR;
use crate::error::WebError;
use crate::views::ViewEngine;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
pub struct AppState {
    /// The animal collection.
    pub store: AnimalStore,
    /// Renders the HTML views.
    pub views: ViewEngine,
    /// Directory of static assets served under `/public`.
    pub public_dir: String,
}

impl AppState {
    /// Assemble state from its parts.
    pub const fn new(store: AnimalStore, views: ViewEngine, public_dir: String) -> Self {
        Self {
            store,
            views,
            public_dir,
        }
    }

    /// State backed by an empty in-memory store and the built-in views.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Template`] if a built-in template fails to parse.
    pub fn in_memory() -> Result<Self, WebError> {
        Ok(Self::new(
            AnimalStore::in_memory(),
            ViewEngine::builtin()?,
            String::from(DEFAULT_PUBLIC_DIR),
        ))
    }
}
