//! Submission response DTOs

use serde::Serialize;

use crate::models::Submission;

/// List of a stage's submissions
#[derive(Debug, Serialize)]
pub struct SubmissionsListResponse {
    pub submissions: Vec<Submission>,
}

/// A team's submission for a stage, if any
#[derive(Debug, Serialize)]
pub struct TeamSubmissionResponse {
    pub submission: Option<Submission>,
}
