//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Submission};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Insert or update the (team, stage) submission in one statement
    pub async fn upsert(
        pool: &PgPool,
        team_id: &Uuid,
        stage_id: &Uuid,
        competition_id: &Uuid,
        content: Option<&str>,
        file_path: Option<&str>,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (team_id, stage_id, competition_id, content, file_path)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (team_id, stage_id) DO UPDATE
            SET
                content = COALESCE(EXCLUDED.content, submissions.content),
                file_path = COALESCE(EXCLUDED.file_path, submissions.file_path),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(team_id)
        .bind(stage_id)
        .bind(competition_id)
        .bind(content)
        .bind(file_path)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// Find a team's submission for a stage
    pub async fn find_for_team_stage(
        pool: &PgPool,
        team_id: &Uuid,
        stage_id: &Uuid,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE team_id = $1 AND stage_id = $2"#,
        )
        .bind(team_id)
        .bind(stage_id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// List all submissions for a stage
    pub async fn list_by_stage(pool: &PgPool, stage_id: &Uuid) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE stage_id = $1 ORDER BY created_at"#,
        )
        .bind(stage_id)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }

    /// List submissions for a competition stage
    pub async fn list_by_competition_stage(
        pool: &PgPool,
        competition_id: &Uuid,
        stage_id: &Uuid,
    ) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE competition_id = $1 AND stage_id = $2
            ORDER BY created_at
            "#,
        )
        .bind(competition_id)
        .bind(stage_id)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }
}
