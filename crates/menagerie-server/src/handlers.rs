//! Web endpoint handlers: the form-driven HTML surface.
//!
//! Each handler extracts its input, makes a single call into the
//! [`AnimalStore`](menagerie_db::AnimalStore), and answers with a rendered
//! view, a redirect back to the listing, or (for seeding) JSON.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Liveness string |
//! | `GET` | `/animals/seed` | Reset the collection to the seed dataset |
//! | `GET` | `/animals` | List view |
//! | `GET` | `/animals/new` | Empty creation form |
//! | `GET` | `/animals/{id}` | Detail view |
//! | `GET` | `/animals/{id}/edit` | Pre-populated edit form |
//! | `POST` | `/animals` | Create, then redirect to `/animals` |
//! | `PUT`, `PATCH` | `/animals/{id}` | Update submitted fields, then redirect |
//! | `DELETE` | `/animals/{id}` | Delete, then redirect |

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::{Form, Json};
use menagerie_types::{Animal, AnimalInput, AnimalPatch, seed_animals};
use minijinja::context;

use crate::error::WebError;
use crate::form::AnimalForm;
use crate::state::AppState;

/// Body of `GET /`.
pub const LIVENESS_MESSAGE: &str = "your server is running... better catch it.";

/// Where every write redirects to.
const LISTING_PATH: &str = "/animals";

// ---------------------------------------------------------------------------
// GET / -- liveness
// ---------------------------------------------------------------------------

/// Return a static liveness string.
pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

// ---------------------------------------------------------------------------
// GET /animals/seed -- reset to the starter dataset
// ---------------------------------------------------------------------------

/// Delete every animal, insert the five seed records, and return them.
pub async fn seed(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Animal>>, WebError> {
    state.store.delete_all().await?;
    let created = state.store.create_many(seed_animals()).await?;
    Ok(Json(created))
}

// ---------------------------------------------------------------------------
// GET /animals -- list view
// ---------------------------------------------------------------------------

/// Render every animal.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let animals = state.store.find_all().await?;
    let html = state
        .views
        .render("index.html", context! { animals => animals })?;
    Ok(Html(html))
}

// ---------------------------------------------------------------------------
// GET /animals/new -- creation form
// ---------------------------------------------------------------------------

/// Render the empty creation form.
pub async fn new_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    Ok(Html(state.views.render("new.html", context! {})?))
}

// ---------------------------------------------------------------------------
// GET /animals/{id} and /animals/{id}/edit
// ---------------------------------------------------------------------------

/// Render one animal.
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let animal = find(&state, &id).await?;
    Ok(Html(state.views.render("show.html", context! { animal => animal })?))
}

/// Render the edit form pre-populated with one animal.
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let animal = find(&state, &id).await?;
    Ok(Html(state.views.render("edit.html", context! { animal => animal })?))
}

// ---------------------------------------------------------------------------
// POST /animals, PUT /animals/{id}, DELETE /animals/{id}
// ---------------------------------------------------------------------------

/// Create an animal from the submitted form.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AnimalForm>,
) -> Result<Redirect, WebError> {
    let input = AnimalInput::try_from(form)?;
    let animal = state.store.create(input).await?;
    tracing::info!(id = %animal.id, species = %animal.species, "Animal created");
    Ok(Redirect::to(LISTING_PATH))
}

/// Update an animal from the submitted form. Fields the form leaves out
/// keep their stored values.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<AnimalForm>,
) -> Result<Redirect, WebError> {
    let patch = AnimalPatch::try_from(form)?;
    state
        .store
        .update_by_id(&id, patch)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("animal {id}")))?;
    tracing::info!(%id, "Animal updated");
    Ok(Redirect::to(LISTING_PATH))
}

/// Delete an animal. Unknown or malformed ids still redirect.
pub async fn destroy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Redirect, WebError> {
    state.store.delete_by_id(&id).await?;
    tracing::info!(%id, "Animal deleted");
    Ok(Redirect::to(LISTING_PATH))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up an animal, turning absence into [`WebError::NotFound`].
pub(crate) async fn find(state: &AppState, id: &str) -> Result<Animal, WebError> {
    state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("animal {id}")))
}
