//! Editable consultation form state.

use super::request::{ConsultationRequest, VISIT_DATE_FORMAT, parse_visit_date};
use crate::core::error::ValidationError;
use chrono::{Local, NaiveDate};

/// Draft field values as the user typed them.
///
/// Nothing is validated until [`to_request`](Self::to_request) is called.
/// The visit date starts out as today's local date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationForm {
    pub patient_name: String,
    pub visit_date: String,
    pub notes: String,
}

impl ConsultationForm {
    pub fn new() -> Self {
        Self::dated(Local::now().date_naive())
    }

    /// An empty form with the visit date preset to `date`.
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            patient_name: String::new(),
            visit_date: date.format(VISIT_DATE_FORMAT).to_string(),
            notes: String::new(),
        }
    }

    pub fn with_patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = name.into();
        self
    }

    pub fn with_visit_date(mut self, date: impl Into<String>) -> Self {
        self.visit_date = date.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Validate the draft into an immutable request.
    pub fn to_request(&self) -> Result<ConsultationRequest, ValidationError> {
        let visit_date = parse_visit_date(&self.visit_date)?;
        ConsultationRequest::new(self.patient_name.clone(), visit_date, self.notes.clone())
    }
}

impl Default for ConsultationForm {
    fn default() -> Self {
        Self::new()
    }
}
