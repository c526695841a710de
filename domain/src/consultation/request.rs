//! Consultation request value object

use crate::core::error::ValidationError;
use chrono::NaiveDate;
use serde::Serialize;

/// Wire format of the visit date (`YYYY-MM-DD`).
pub const VISIT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated consultation submission (Value Object)
///
/// Can only be built through [`ConsultationRequest::new`] or
/// [`ConsultationRequest::parse`], so every instance has a non-blank patient
/// name, non-blank notes and a real calendar date. Serializes to the request
/// body the backend expects:
///
/// ```
/// use consult_domain::ConsultationRequest;
///
/// let request = ConsultationRequest::parse("Jane Doe", "2024-01-15", "BP 120/80").unwrap();
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["date_of_visit"], "2024-01-15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsultationRequest {
    patient_name: String,
    #[serde(rename = "date_of_visit")]
    visit_date: NaiveDate,
    notes: String,
}

impl ConsultationRequest {
    /// Build a request from an already-parsed visit date.
    pub fn new(
        patient_name: impl Into<String>,
        visit_date: NaiveDate,
        notes: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let patient_name = patient_name.into();
        let notes = notes.into();

        if patient_name.trim().is_empty() {
            return Err(ValidationError::MissingField("patient name"));
        }
        if notes.trim().is_empty() {
            return Err(ValidationError::MissingField("notes"));
        }

        Ok(Self {
            patient_name,
            visit_date,
            notes,
        })
    }

    /// Build a request from raw form values, parsing the visit date.
    pub fn parse(
        patient_name: impl Into<String>,
        visit_date: &str,
        notes: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let patient_name = patient_name.into();
        let notes = notes.into();

        if patient_name.trim().is_empty() {
            return Err(ValidationError::MissingField("patient name"));
        }
        let visit_date = parse_visit_date(visit_date)?;

        Self::new(patient_name, visit_date, notes)
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn visit_date(&self) -> NaiveDate {
        self.visit_date
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Parse a `YYYY-MM-DD` visit date.
pub fn parse_visit_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("visit date"));
    }
    NaiveDate::parse_from_str(trimmed, VISIT_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}
