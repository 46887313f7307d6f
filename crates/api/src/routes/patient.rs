//! Route definitions for the `/patients` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::patient;
use crate::state::AppState;

/// Routes mounted at `/patients`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// GET    /{id}/transport  -> transport
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(patient::list).post(patient::create))
        .route("/{id}", get(patient::get_by_id))
        .route("/{id}/transport", get(patient::transport))
}
