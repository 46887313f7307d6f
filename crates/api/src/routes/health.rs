use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` while the patient database cannot be reached.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Always 200 so the transport API stays up while the database is down;
/// the body says whether patient reads and writes will currently work.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match transit_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// `/health` lives beside `/api`, not inside it.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
