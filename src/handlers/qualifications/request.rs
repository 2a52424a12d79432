//! Qualification request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Qualification question creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    pub competition_id: Uuid,

    #[validate(length(min = 1))]
    pub question: String,

    #[validate(length(min = 1))]
    pub question_type: String,

    /// Choice list, required for multiple choice questions
    pub options: Option<serde_json::Value>,

    pub position: Option<i32>,

    pub is_required: Option<bool>,
}

/// One answer within a submission
#[derive(Debug, Deserialize)]
pub struct AnswerItem {
    pub question_id: Uuid,
    pub answer: Option<String>,
    pub file_path: Option<String>,
}

/// Answer submission request
#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    pub answers: Vec<AnswerItem>,
}

/// Qualification approval request
#[derive(Debug, Deserialize)]
pub struct ApproveUserRequest {
    pub competition_id: Uuid,
}
