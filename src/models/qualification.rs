//! Qualification question and answer models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Qualification question database model
///
/// Questions are immutable after creation; there is no update path.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QualificationQuestion {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub question: String,
    pub question_type: String,
    /// Present only for multiple_choice questions
    pub options: Option<serde_json::Value>,
    pub position: i32,
    pub is_required: bool,
    pub created_at: DateTime<Utc>,
}

/// Qualification answer database model
///
/// At most one row per (user, question); resubmission replaces the whole set.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QualificationAnswer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question_id: Uuid,
    pub competition_id: Uuid,
    pub answer: Option<String>,
    pub file_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Qualification question type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Text,
    MultipleChoice,
    FileUpload,
}

impl QuestionType {
    /// Parse a stored type label
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "multiple_choice" => Some(Self::MultipleChoice),
            "file_upload" => Some(Self::FileUpload),
            _ => None,
        }
    }

    /// Whether this type requires an options list
    pub fn requires_options(&self) -> bool {
        matches!(self, Self::MultipleChoice)
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::MultipleChoice => write!(f, "multiple_choice"),
            Self::FileUpload => write!(f, "file_upload"),
        }
    }
}

/// Check whether every required question has a submitted answer
pub fn all_required_answered(
    required: &[QualificationQuestion],
    answers: &[QualificationAnswer],
) -> bool {
    required
        .iter()
        .all(|q| answers.iter().any(|a| a.question_id == q.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: Uuid, competition_id: Uuid) -> QualificationQuestion {
        QualificationQuestion {
            id,
            competition_id,
            question: "Why?".to_string(),
            question_type: "text".to_string(),
            options: None,
            position: 0,
            is_required: true,
            created_at: Utc::now(),
        }
    }

    fn answer(question_id: Uuid, competition_id: Uuid) -> QualificationAnswer {
        QualificationAnswer {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            question_id,
            competition_id,
            answer: Some("because".to_string()),
            file_path: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_question_type_parse() {
        assert_eq!(QuestionType::parse("text"), Some(QuestionType::Text));
        assert_eq!(
            QuestionType::parse("multiple_choice"),
            Some(QuestionType::MultipleChoice)
        );
        assert_eq!(
            QuestionType::parse("file_upload"),
            Some(QuestionType::FileUpload)
        );
        assert_eq!(QuestionType::parse("essay"), None);
        assert!(QuestionType::MultipleChoice.requires_options());
        assert!(!QuestionType::Text.requires_options());
    }

    #[test]
    fn test_all_required_answered() {
        let comp = Uuid::new_v4();
        let q1 = question(Uuid::new_v4(), comp);
        let q2 = question(Uuid::new_v4(), comp);

        let required = vec![q1.clone(), q2.clone()];
        let partial = vec![answer(q1.id, comp)];
        assert!(!all_required_answered(&required, &partial));

        let complete = vec![answer(q1.id, comp), answer(q2.id, comp)];
        assert!(all_required_answered(&required, &complete));

        // No required questions means trivially complete
        assert!(all_required_answered(&[], &[]));
    }
}
