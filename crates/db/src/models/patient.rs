//! Patient entity model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use transit_core::patient::NewPatient;
use transit_core::types::{DbId, Timestamp};

/// A full row from the `patients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: DbId,
    pub name: String,
    pub birthdate: NaiveDate,
    pub patient_number: String,
    pub special_notes: Option<String>,
    pub created_at: Timestamp,
}

/// The list projection served to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: DbId,
    pub name: String,
    pub patient_number: String,
    pub birthdate: NaiveDate,
    pub special_notes: Option<String>,
}

/// DTO for inserting a new patient. Build it from a validated registration.
#[derive(Debug, Clone)]
pub struct CreatePatient {
    pub name: String,
    pub birthdate: NaiveDate,
    pub patient_number: String,
    pub special_notes: Option<String>,
}

impl From<NewPatient> for CreatePatient {
    fn from(p: NewPatient) -> Self {
        Self {
            name: p.name,
            birthdate: p.birthdate,
            patient_number: p.patient_number,
            special_notes: p.special_notes,
        }
    }
}
