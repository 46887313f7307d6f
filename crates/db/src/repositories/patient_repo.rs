//! Repository for the `patients` table.

use sqlx::PgPool;
use transit_core::types::DbId;

use crate::models::patient::{CreatePatient, Patient, PatientSummary};

/// Column list shared across queries returning the full row.
const COLUMNS: &str = "id, name, birthdate, patient_number, special_notes, created_at";

/// Columns of the list projection.
const SUMMARY_COLUMNS: &str = "id, name, patient_number, birthdate, special_notes";

/// Provides create and read operations for patients. Rows are never
/// updated or deleted through this service.
pub struct PatientRepo;

impl PatientRepo {
    /// Insert a new patient, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreatePatient) -> Result<Patient, sqlx::Error> {
        let query = format!(
            "INSERT INTO patients (name, birthdate, patient_number, special_notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(&input.name)
            .bind(input.birthdate)
            .bind(&input.patient_number)
            .bind(&input.special_notes)
            .fetch_one(pool)
            .await
    }

    /// Find a patient by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients WHERE id = $1");
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every patient ordered by name (database collation), ties by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<PatientSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM patients ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, PatientSummary>(&query)
            .fetch_all(pool)
            .await
    }
}
