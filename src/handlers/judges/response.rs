//! Judge response DTOs

use serde::Serialize;

use crate::models::{Judge, Score, Submission};

/// List of a competition's judges
#[derive(Debug, Serialize)]
pub struct JudgesListResponse {
    pub judges: Vec<Judge>,
}

/// A submission paired with the acting judge's scores
#[derive(Debug, Serialize)]
pub struct JudgedSubmission {
    pub submission: Submission,
    pub scores: Vec<Score>,
}

/// Submissions of a stage ready for judging
#[derive(Debug, Serialize)]
pub struct JudgingListResponse {
    pub submissions: Vec<JudgedSubmission>,
}
