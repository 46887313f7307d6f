pub mod health;
pub mod patient;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /patients                         list, create
/// /patients/{id}                    get
/// /patients/{id}/transport          mock transport readings + summary
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/patients", patient::router())
}
