//! Judge and score repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Judge, Score},
};

/// Repository for judge assignments and scores
pub struct JudgeRepository;

impl JudgeRepository {
    /// Assign a user as judge of a competition
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        competition_id: &Uuid,
    ) -> AppResult<Judge> {
        let judge = sqlx::query_as::<_, Judge>(
            r#"
            INSERT INTO judges (user_id, competition_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .fetch_one(pool)
        .await?;

        Ok(judge)
    }

    /// Find the judge row for a user within a competition
    pub async fn find_for_competition(
        pool: &PgPool,
        user_id: &Uuid,
        competition_id: &Uuid,
    ) -> AppResult<Option<Judge>> {
        let judge = sqlx::query_as::<_, Judge>(
            r#"SELECT * FROM judges WHERE user_id = $1 AND competition_id = $2"#,
        )
        .bind(user_id)
        .bind(competition_id)
        .fetch_optional(pool)
        .await?;

        Ok(judge)
    }

    /// List judges of a competition
    pub async fn list_by_competition(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<Judge>> {
        let judges = sqlx::query_as::<_, Judge>(
            r#"SELECT * FROM judges WHERE competition_id = $1 ORDER BY created_at"#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(judges)
    }

    /// Count judges of a competition
    pub async fn count_by_competition(pool: &PgPool, competition_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM judges WHERE competition_id = $1"#)
                .bind(competition_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Insert or update the (submission, judge) score in one statement
    pub async fn upsert_score(
        pool: &PgPool,
        submission_id: &Uuid,
        judge_id: &Uuid,
        score: i32,
        comments: Option<&str>,
    ) -> AppResult<Score> {
        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (submission_id, judge_id, score, comments)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (submission_id, judge_id) DO UPDATE
            SET
                score = EXCLUDED.score,
                comments = COALESCE(EXCLUDED.comments, scores.comments),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(submission_id)
        .bind(judge_id)
        .bind(score)
        .bind(comments)
        .fetch_one(pool)
        .await?;

        Ok(score)
    }

    /// List the scores a judge has given a submission
    pub async fn list_scores(
        pool: &PgPool,
        submission_id: &Uuid,
        judge_id: &Uuid,
    ) -> AppResult<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(
            r#"SELECT * FROM scores WHERE submission_id = $1 AND judge_id = $2 ORDER BY created_at"#,
        )
        .bind(submission_id)
        .bind(judge_id)
        .fetch_all(pool)
        .await?;

        Ok(scores)
    }
}
