//! JSON API handlers.
//!
//! A read-only JSON mirror of the listing and detail views. Writes go
//! through the form-driven routes in [`crate::handlers`].
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/animals` | All animals as a JSON array |
//! | `GET` | `/api/animals/{id}` | One animal as a JSON object |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use menagerie_types::Animal;

use crate::error::WebError;
use crate::handlers::find;
use crate::state::AppState;

/// Return every animal.
pub async fn list_animals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Animal>>, WebError> {
    Ok(Json(state.store.find_all().await?))
}

/// Return one animal; 404 if absent, 400 if the id is malformed.
pub async fn get_animal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Animal>, WebError> {
    Ok(Json(find(&state, &id).await?))
}
