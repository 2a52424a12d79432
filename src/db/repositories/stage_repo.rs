//! Stage repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Stage};

/// Repository for stage database operations
pub struct StageRepository;

impl StageRepository {
    /// Create a new stage
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        competition_id: &Uuid,
        name: &str,
        description: Option<&str>,
        position: i32,
        scoring_type: &str,
        instructions: Option<&str>,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> AppResult<Stage> {
        let stage = sqlx::query_as::<_, Stage>(
            r#"
            INSERT INTO stages
                (competition_id, name, description, position, scoring_type,
                 instructions, starts_at, ends_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(competition_id)
        .bind(name)
        .bind(description)
        .bind(position)
        .bind(scoring_type)
        .bind(instructions)
        .bind(starts_at)
        .bind(ends_at)
        .fetch_one(pool)
        .await?;

        Ok(stage)
    }

    /// Find stage by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Stage>> {
        let stage = sqlx::query_as::<_, Stage>(r#"SELECT * FROM stages WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(stage)
    }

    /// List stages of a competition in display order
    pub async fn list_by_competition(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<Stage>> {
        let stages = sqlx::query_as::<_, Stage>(
            r#"SELECT * FROM stages WHERE competition_id = $1 ORDER BY position"#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(stages)
    }

    /// Update stage fields; None leaves a column unchanged
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        description: Option<&str>,
        position: Option<i32>,
        scoring_type: Option<&str>,
        instructions: Option<&str>,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
        is_active: Option<bool>,
    ) -> AppResult<Stage> {
        let stage = sqlx::query_as::<_, Stage>(
            r#"
            UPDATE stages
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                position = COALESCE($4, position),
                scoring_type = COALESCE($5, scoring_type),
                instructions = COALESCE($6, instructions),
                starts_at = COALESCE($7, starts_at),
                ends_at = COALESCE($8, ends_at),
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(position)
        .bind(scoring_type)
        .bind(instructions)
        .bind(starts_at)
        .bind(ends_at)
        .bind(is_active)
        .fetch_one(pool)
        .await?;

        Ok(stage)
    }

    /// Delete a stage
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM stages WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
