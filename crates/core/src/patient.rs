//! Patient registration rules.
//!
//! Incoming registrations arrive as loosely-typed JSON: every field is
//! optional at the wire level so that missing values are reported here with
//! a readable message instead of as an opaque deserialization failure.
//!
//! Validation runs in a fixed order (name, birthdate, patient number,
//! notes) and stops at the first failing field. Accepted values are kept
//! exactly as submitted; only the birthdate is converted to a date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Maximum length of a patient display name, in characters.
pub const MAX_NAME_LEN: u64 = 100;

/// Maximum length of an external patient number, in characters.
pub const MAX_PATIENT_NUMBER_LEN: u64 = 32;

/// Maximum length of the free-text special notes, in characters.
pub const MAX_NOTES_LEN: u64 = 1000;

/// Earliest birthdate accepted by registration.
pub const MIN_BIRTHDATE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("1900-01-01 is a valid date"),
};

/// Raw registration payload as submitted by the registration form.
///
/// The form names the external identifier `patientId`; `patientNumber` is
/// accepted as well so clients can echo back what the API returns.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegistration {
    #[validate(length(max = MAX_NAME_LEN, message = "name must be at most 100 characters"))]
    pub name: Option<String>,
    pub birthdate: Option<String>,
    #[serde(alias = "patientNumber")]
    #[validate(length(
        max = MAX_PATIENT_NUMBER_LEN,
        message = "patientId must be at most 32 characters"
    ))]
    pub patient_id: Option<String>,
    #[validate(length(
        max = MAX_NOTES_LEN,
        message = "specialNotes must be at most 1000 characters"
    ))]
    pub special_notes: Option<String>,
}

/// A registration that passed every rule and is ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub birthdate: NaiveDate,
    pub patient_number: String,
    pub special_notes: Option<String>,
}

/// Validate a raw registration against the rules in this module.
///
/// `today` bounds the birthdate from above; callers pass the current UTC
/// date.
pub fn validate_registration(
    input: &PatientRegistration,
    today: NaiveDate,
) -> Result<NewPatient, CoreError> {
    let name = required(input.name.as_deref(), "name")?;
    let birthdate_raw = required(input.birthdate.as_deref(), "birthdate")?;
    let patient_number = required(input.patient_id.as_deref(), "patientId")?;

    input.validate().map_err(|e| CoreError::Validation(describe(&e)))?;

    let birthdate = parse_birthdate(birthdate_raw)?;
    validate_birthdate_range(birthdate, today)?;
    validate_patient_number(patient_number)?;

    Ok(NewPatient {
        name: name.to_string(),
        birthdate,
        patient_number: patient_number.to_string(),
        special_notes: input.special_notes.clone(),
    })
}

/// Parse a birthdate given either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp. For timestamps the calendar date in UTC is kept.
pub fn parse_birthdate(raw: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| {
            CoreError::Validation(format!(
                "birthdate '{trimmed}' is not a valid date (expected YYYY-MM-DD)"
            ))
        })
}

/// Reject birthdates in the future or before [`MIN_BIRTHDATE`].
pub fn validate_birthdate_range(birthdate: NaiveDate, today: NaiveDate) -> Result<(), CoreError> {
    if birthdate > today {
        return Err(CoreError::Validation(
            "birthdate must not be in the future".to_string(),
        ));
    }
    if birthdate < MIN_BIRTHDATE {
        return Err(CoreError::Validation(format!(
            "birthdate must not be before {MIN_BIRTHDATE}"
        )));
    }
    Ok(())
}

/// Patient numbers are ASCII letters, digits and `-`. Length is bounded by
/// the `Validate` derive on [`PatientRegistration`].
pub fn validate_patient_number(number: &str) -> Result<(), CoreError> {
    if !number.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(CoreError::Validation(
            "patientId may only contain letters, digits and '-'".to_string(),
        ));
    }
    Ok(())
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Flatten validator errors into one deterministic message.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
