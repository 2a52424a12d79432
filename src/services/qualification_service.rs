//! Qualification workflow service
//!
//! Answers a competition's screening questions and gates a user's
//! qualification behind the competition's capacity ceiling.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{CompetitionRepository, QualificationRepository},
    error::{AppError, AppResult},
    handlers::qualifications::request::{AnswerItem, CreateQuestionRequest},
    models::{QualificationAnswer, QualificationQuestion, QuestionType, User, qualification},
};

/// Qualification service for business logic
pub struct QualificationService;

impl QualificationService {
    /// Create a qualification question (questions are immutable once created)
    pub async fn create_question(
        pool: &PgPool,
        payload: CreateQuestionRequest,
    ) -> AppResult<QualificationQuestion> {
        let question_type = QuestionType::parse(&payload.question_type).ok_or_else(|| {
            AppError::InvalidInput(
                "Invalid question type. Must be: text, multiple_choice, or file_upload"
                    .to_string(),
            )
        })?;

        if question_type.requires_options() && payload.options.is_none() {
            return Err(AppError::InvalidInput(
                "Options are required for multiple choice questions".to_string(),
            ));
        }

        CompetitionRepository::find_by_id(pool, &payload.competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let options = if question_type.requires_options() {
            payload.options.as_ref()
        } else {
            None
        };

        QualificationRepository::create_question(
            pool,
            &payload.competition_id,
            &payload.question,
            &payload.question_type,
            options,
            payload.position.unwrap_or(0),
            payload.is_required.unwrap_or(true),
        )
        .await
    }

    /// List a competition's questions (public)
    pub async fn get_questions(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<QualificationQuestion>> {
        QualificationRepository::list_questions(pool, competition_id).await
    }

    /// List all answers for a competition (admin only)
    pub async fn get_answers(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<QualificationAnswer>> {
        QualificationRepository::list_answers(pool, competition_id).await
    }

    /// Replace a user's answers for a competition.
    ///
    /// Resubmission is an idempotent replace, not a merge: the prior answer
    /// set is deleted and the submitted set inserted, inside one transaction.
    /// Returns whether every required question now has an answer.
    pub async fn submit_answers(
        pool: &PgPool,
        user_id: &Uuid,
        competition_id: &Uuid,
        answers: &[AnswerItem],
    ) -> AppResult<bool> {
        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let required =
            QualificationRepository::list_required_questions(pool, competition_id).await?;
        if required.is_empty() {
            return Err(AppError::NotFound(
                "No questions found for this competition".to_string(),
            ));
        }

        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"DELETE FROM qualification_answers WHERE user_id = $1 AND competition_id = $2"#,
        )
        .bind(user_id)
        .bind(competition_id)
        .execute(&mut *tx)
        .await?;

        for answer in answers {
            sqlx::query(
                r#"
                INSERT INTO qualification_answers
                    (user_id, question_id, competition_id, answer, file_path)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(user_id)
            .bind(answer.question_id)
            .bind(competition_id)
            .bind(answer.answer.as_deref())
            .bind(answer.file_path.as_deref())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let submitted =
            QualificationRepository::list_user_answers(pool, user_id, competition_id).await?;

        Ok(qualification::all_required_answered(&required, &submitted))
    }

    /// Approve a user's qualification, bounded by the competition capacity.
    ///
    /// Both the user flip and the counter increment are conditional updates
    /// inside one transaction, so two concurrent approvals cannot overshoot
    /// the capacity or double-qualify a user.
    pub async fn approve_user(
        pool: &PgPool,
        user_id: &Uuid,
        competition_id: &Uuid,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.is_qualified {
            return Err(AppError::Conflict("User already qualified".to_string()));
        }

        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let mut tx = pool.begin().await?;

        // Conditional flip: a concurrent approval of the same user makes this
        // a no-op instead of a double increment.
        let approved = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_qualified = TRUE, qualified_at = NOW(), role = $2, updated_at = NOW()
            WHERE id = $1 AND is_qualified = FALSE
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(roles::LEADER)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::Conflict("User already qualified".to_string()))?;

        // Capacity check and increment in one statement; zero rows means the
        // ceiling was hit and the whole transaction rolls back.
        let result = sqlx::query(
            r#"
            UPDATE competitions
            SET current_qualified_count = current_qualified_count + 1, updated_at = NOW()
            WHERE id = $1 AND current_qualified_count < max_qualified_users
            "#,
        )
        .bind(competition_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(
                "Maximum qualified users reached".to_string(),
            ));
        }

        tx.commit().await?;

        Ok(approved)
    }
}
