use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::BoxError;
use serde_json::json;
use tower::timeout::error::Elapsed;
use transit_core::error::CoreError;

/// Message returned for every 5xx that has no more specific context.
pub const GENERIC_INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the form `{ "error": "...", "code": "..." }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `transit_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure during a named operation. The client only sees
    /// `context`; the driver error is logged.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a storage error with the operation that failed.
    pub fn storage(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Storage { context, source }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error handler for the middleware stack (`HandleErrorLayer`).
pub async fn middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Core(CoreError::Internal(format!("middleware error: {err}")))
    }
}

/// Panic handler for `CatchPanicLayer`: logs the payload and answers with
/// the internal-error envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    AppError::Core(CoreError::Internal(format!("handler panicked: {detail}"))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal(GENERIC_INTERNAL_MESSAGE)
                }
            },

            // --- Storage errors ---
            AppError::Storage { context, source } => {
                tracing::error!(error = %source, operation = *context, "Storage error");
                internal(context)
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "REQUEST_TIMEOUT",
                "Request timed out".to_string(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal(message: &str) -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        message.to_string(),
    )
}
