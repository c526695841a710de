//! Text formatting for session status and errors

use colored::Colorize;
use consult_application::{SessionOutcome, SubmitError};
use consult_domain::{ConsultationRequest, SessionStatus, VISIT_DATE_FORMAT};

/// Message shown while waiting for the first fragment.
pub const WAITING_MESSAGE: &str = "Analyzing consultation notes...";

/// Formats session state for the terminal
pub struct OutcomeFormatter;

impl OutcomeFormatter {
    /// Heading printed above the streamed document.
    pub fn header(request: &ConsultationRequest) -> String {
        format!(
            "{}\n{} {}   {} {}\n\n",
            "=== AI-Generated Summary ===".cyan().bold(),
            "Patient:".bold(),
            request.patient_name(),
            "Visit date:".bold(),
            request.visit_date().format(VISIT_DATE_FORMAT),
        )
    }

    /// Closing line for a terminal status, `None` while the session is live.
    pub fn status_line(status: SessionStatus, failure: Option<&str>) -> Option<String> {
        match status {
            SessionStatus::Requesting | SessionStatus::Streaming => None,
            SessionStatus::Complete => Some(format!("{}", "[done] Summary complete".green().bold())),
            SessionStatus::Failed => Some(format!(
                "{} {}",
                "[failed]".red().bold(),
                failure.unwrap_or("The summary could not be generated")
            )),
            SessionStatus::Cancelled => Some(format!(
                "{}",
                "[cancelled] Summary stopped; partial output kept above".yellow()
            )),
        }
    }

    /// One-line digest of a finished session, used for `--verbose` runs.
    pub fn outcome_summary(outcome: &SessionOutcome) -> String {
        format!(
            "{}: {} fragment(s), {} character(s)",
            outcome.status,
            outcome.fragments,
            outcome.document.chars().count()
        )
    }

    /// User-facing message for a rejected submission.
    pub fn submit_error(error: &SubmitError) -> String {
        let text = match error {
            SubmitError::Validation(e) => format!("Invalid consultation: {}", e),
            SubmitError::AuthRequired => {
                "Sign-in required: no authentication token is available".to_string()
            }
            SubmitError::AlreadyInProgress => {
                "A summary is already being generated; wait for it or cancel it".to_string()
            }
        };
        format!("{} {}", "Error:".red().bold(), text)
    }
}
