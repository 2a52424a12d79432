//! Qualification repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{QualificationAnswer, QualificationQuestion},
};

/// Repository for qualification questions and answers
pub struct QualificationRepository;

impl QualificationRepository {
    /// Create a qualification question
    pub async fn create_question(
        pool: &PgPool,
        competition_id: &Uuid,
        question: &str,
        question_type: &str,
        options: Option<&serde_json::Value>,
        position: i32,
        is_required: bool,
    ) -> AppResult<QualificationQuestion> {
        let created = sqlx::query_as::<_, QualificationQuestion>(
            r#"
            INSERT INTO qualification_questions
                (competition_id, question, question_type, options, position, is_required)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(competition_id)
        .bind(question)
        .bind(question_type)
        .bind(options)
        .bind(position)
        .bind(is_required)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }

    /// List questions of a competition in display order
    pub async fn list_questions(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<QualificationQuestion>> {
        let questions = sqlx::query_as::<_, QualificationQuestion>(
            r#"
            SELECT * FROM qualification_questions
            WHERE competition_id = $1
            ORDER BY position
            "#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(questions)
    }

    /// List required questions of a competition
    pub async fn list_required_questions(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<QualificationQuestion>> {
        let questions = sqlx::query_as::<_, QualificationQuestion>(
            r#"
            SELECT * FROM qualification_questions
            WHERE competition_id = $1 AND is_required = TRUE
            ORDER BY position
            "#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(questions)
    }

    /// List all answers submitted for a competition
    pub async fn list_answers(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<QualificationAnswer>> {
        let answers = sqlx::query_as::<_, QualificationAnswer>(
            r#"SELECT * FROM qualification_answers WHERE competition_id = $1"#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(answers)
    }

    /// List one user's answers for a competition
    pub async fn list_user_answers(
        pool: &PgPool,
        user_id: &Uuid,
        competition_id: &Uuid,
    ) -> AppResult<Vec<QualificationAnswer>> {
        let answers = sqlx::query_as::<_, QualificationAnswer>(
            r#"
            SELECT * FROM qualification_answers
            WHERE user_id = $1 AND competition_id = $2
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(answers)
    }
}
