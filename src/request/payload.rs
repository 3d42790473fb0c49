//! Request payload types and validation.
//!
//! Each flow has a typed payload shape. Unknown fields are preserved via
//! serde flattening so that a payload deserialized at the relay boundary
//! re-serializes with the same content, keeping the forwarded body intact.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default calendar ID applied when `interviewer_calendar_id` is absent
/// or blank after trimming.
pub const DEFAULT_CALENDAR_ID: &str = "primary";

/// Error type for required-field validation.
///
/// Each variant names exactly one missing field; validation stops at the
/// first failure, in the documented field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `resume_text` is missing or blank.
    #[error("Resume text is required")]
    MissingResumeText,

    /// `job_description` is missing or blank.
    #[error("Job description is required")]
    MissingJobDescription,

    /// `candidate_email` is missing or blank.
    #[error("Candidate email is required")]
    MissingCandidateEmail,

    /// `candidate_name` is missing or blank.
    #[error("Candidate name is required")]
    MissingCandidateName,
}

/// Request payload for the resume-screening pipeline flow.
///
/// Required fields (validated): `resume_text`, `job_description`.
/// All string fields default to empty on deserialization so that a missing
/// field and a blank field produce the same validation message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelinePayload {
    /// Raw resume text to screen (required).
    #[serde(default)]
    pub resume_text: String,

    /// Job description the resume is screened against (required).
    #[serde(default)]
    pub job_description: String,

    /// Identifier of the job posting.
    #[serde(default)]
    pub job_id: String,

    /// Calendar the interviewer's availability is read from.
    /// Defaulted to [`DEFAULT_CALENDAR_ID`] by the facade when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewer_calendar_id: Option<String>,

    /// Any additional fields, forwarded downstream untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PipelinePayload {
    /// Checks required fields in fixed order: `resume_text`, then
    /// `job_description`.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first field that is empty
    /// after trimming whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.resume_text.trim().is_empty() {
            return Err(ValidationError::MissingResumeText);
        }
        if self.job_description.trim().is_empty() {
            return Err(ValidationError::MissingJobDescription);
        }
        Ok(())
    }

    /// Returns the payload with `interviewer_calendar_id` defaulted to
    /// [`DEFAULT_CALENDAR_ID`] when absent or blank.
    #[must_use]
    pub fn with_calendar_default(mut self) -> Self {
        self.interviewer_calendar_id = Some(effective_calendar_id(self.interviewer_calendar_id));
        self
    }
}

/// Request payload for the standalone interview-scheduling flow.
///
/// Required fields (validated): `candidate_email`, `candidate_name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulingPayload {
    /// Email address of the candidate (required).
    #[serde(default)]
    pub candidate_email: String,

    /// Display name of the candidate (required).
    #[serde(default)]
    pub candidate_name: String,

    /// Title of the job the interview is for.
    #[serde(default)]
    pub job_title: String,

    /// Identifier of the job posting.
    #[serde(default)]
    pub job_id: String,

    /// Calendar the interviewer's availability is read from.
    /// Defaulted to [`DEFAULT_CALENDAR_ID`] by the facade when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewer_calendar_id: Option<String>,

    /// Any additional fields, forwarded downstream untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SchedulingPayload {
    /// Checks required fields in fixed order: `candidate_email`, then
    /// `candidate_name`.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first field that is empty
    /// after trimming whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.candidate_email.trim().is_empty() {
            return Err(ValidationError::MissingCandidateEmail);
        }
        if self.candidate_name.trim().is_empty() {
            return Err(ValidationError::MissingCandidateName);
        }
        Ok(())
    }

    /// Returns the payload with `interviewer_calendar_id` defaulted to
    /// [`DEFAULT_CALENDAR_ID`] when absent or blank.
    #[must_use]
    pub fn with_calendar_default(mut self) -> Self {
        self.interviewer_calendar_id = Some(effective_calendar_id(self.interviewer_calendar_id));
        self
    }
}

/// Resolves the effective calendar ID: a provided non-blank value wins,
/// anything else becomes the default.
fn effective_calendar_id(current: Option<String>) -> String {
    match current {
        Some(id) if !id.trim().is_empty() => id,
        _ => DEFAULT_CALENDAR_ID.to_owned(),
    }
}
