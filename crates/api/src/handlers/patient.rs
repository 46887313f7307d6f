//! Handlers for the `/patients` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use transit_core::error::CoreError;
use transit_core::patient::{validate_registration, PatientRegistration};
use transit_core::transport::{self, TransportSample, TransportSummary};
use transit_core::types::DbId;
use transit_db::models::patient::{CreatePatient, Patient, PatientSummary};
use transit_db::repositories::PatientRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Transport readings for one patient.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportResponse {
    pub patient_id: DbId,
    pub samples: Vec<TransportSample>,
    pub summary: TransportSummary,
}

/// POST /api/patients
///
/// Validates the registration, then inserts it. Responds 201 with the
/// created record.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<PatientRegistration>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Patient>)> {
    let Json(input) = payload.inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected patient registration body");
    })?;

    let today = chrono::Utc::now().date_naive();
    let new_patient = validate_registration(&input, today).inspect_err(|e| {
        tracing::warn!(error = %e, "Patient registration failed validation");
    })?;

    let patient = PatientRepo::create(&state.pool, &CreatePatient::from(new_patient))
        .await
        .map_err(AppError::storage("Failed to create patient"))?;

    tracing::info!(patient_id = patient.id, "Patient registered");
    Ok((StatusCode::CREATED, Json(patient)))
}

/// GET /api/patients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PatientSummary>>> {
    let patients = PatientRepo::list(&state.pool)
        .await
        .map_err(AppError::storage("Failed to retrieve patients"))?;
    Ok(Json(patients))
}

/// GET /api/patients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Patient>> {
    let Path(id) = id.inspect_err(|e| tracing::warn!(error = %e, "Rejected patient id"))?;
    let patient = ensure_patient_exists(&state.pool, id).await?;
    Ok(Json(patient))
}

/// GET /api/patients/{id}/transport
///
/// Serves the fixed mock series; there is no per-patient sensor data.
pub async fn transport(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<TransportResponse>> {
    let Path(id) = id.inspect_err(|e| tracing::warn!(error = %e, "Rejected patient id"))?;
    let patient = ensure_patient_exists(&state.pool, id).await?;

    let samples = transport::mock_samples();
    let summary = transport::summarize(&samples).ok_or_else(|| {
        AppError::Core(CoreError::Internal(
            "transport series has no samples".to_string(),
        ))
    })?;

    Ok(Json(TransportResponse {
        patient_id: patient.id,
        samples,
        summary,
    }))
}

async fn ensure_patient_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Patient> {
    PatientRepo::find_by_id(pool, id)
        .await
        .map_err(AppError::storage("Failed to retrieve patient"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id,
        }))
}
