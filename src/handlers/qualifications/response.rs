//! Qualification response DTOs

use serde::Serialize;

use crate::models::{QualificationAnswer, QualificationQuestion};

/// List of a competition's questions
#[derive(Debug, Serialize)]
pub struct QuestionsListResponse {
    pub questions: Vec<QualificationQuestion>,
}

/// List of a competition's answers (admin view)
#[derive(Debug, Serialize)]
pub struct AnswersListResponse {
    pub answers: Vec<QualificationAnswer>,
}

/// Result of an answer submission
#[derive(Debug, Serialize)]
pub struct SubmitAnswersResponse {
    pub message: String,
    pub all_required_answered: bool,
}

/// Stored path of an uploaded answer attachment
#[derive(Debug, Serialize)]
pub struct AnswerFileResponse {
    pub file_path: String,
}
