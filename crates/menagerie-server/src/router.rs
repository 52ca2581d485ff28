//! Axum router construction.
//!
//! Assembles the HTML routes, the JSON API, and the static asset
//! directory into a single [`Router`]. The method-override middleware
//! sits in front of routing: the routes live in an inner router that the
//! outer router reaches through its fallback, and the override layer
//! wraps that fallback.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::handlers;
use crate::method_override::method_override;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- liveness string
/// - `GET /animals/seed` -- reset to the seed dataset (JSON)
/// - `GET|POST /animals` -- list view / create
/// - `GET /animals/new` -- creation form
/// - `GET|PUT|PATCH|DELETE /animals/{id}` -- detail view / update / delete
/// - `GET /animals/{id}/edit` -- edit form
/// - `GET /api/animals` and `GET /api/animals/{id}` -- JSON API
/// - `GET /public/*` -- static assets
///
/// CORS is open on the JSON API only.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/animals", get(api::list_animals))
        .route("/animals/{id}", get(api::get_animal))
        .layer(cors);

    let routes = Router::new()
        .route("/", get(handlers::root))
        // The literal segments must be matched before `{id}`; axum's
        // router prefers static segments over captures.
        .route("/animals/seed", get(handlers::seed))
        .route("/animals/new", get(handlers::new_form))
        .route("/animals", get(handlers::index).post(handlers::create))
        .route(
            "/animals/{id}",
            get(handlers::show)
                .put(handlers::update)
                .patch(handlers::update)
                .delete(handlers::destroy),
        )
        .route("/animals/{id}/edit", get(handlers::edit_form))
        .nest("/api", api)
        .nest_service("/public", ServeDir::new(&state.public_dir))
        .with_state(state);

    Router::new()
        .fallback_service(routes)
        .layer(axum::middleware::from_fn(method_override))
        .layer(TraceLayer::new_for_http())
}
