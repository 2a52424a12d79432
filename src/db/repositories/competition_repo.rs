//! Competition repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Competition};

/// Repository for competition database operations
pub struct CompetitionRepository;

impl CompetitionRepository {
    /// Create a new competition
    pub async fn create(
        pool: &PgPool,
        name: &str,
        description: Option<&str>,
        banner_path: Option<&str>,
        max_qualified_users: i32,
    ) -> AppResult<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competitions (name, description, banner_path, max_qualified_users)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(banner_path)
        .bind(max_qualified_users)
        .fetch_one(pool)
        .await?;

        Ok(competition)
    }

    /// Find competition by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Competition>> {
        let competition =
            sqlx::query_as::<_, Competition>(r#"SELECT * FROM competitions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(competition)
    }

    /// List all competitions, newest first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(
            r#"SELECT * FROM competitions ORDER BY created_at DESC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(competitions)
    }

    /// Update competition fields; None leaves a column unchanged
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        description: Option<&str>,
        banner_path: Option<&str>,
        status: Option<&str>,
        max_qualified_users: Option<i32>,
    ) -> AppResult<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            UPDATE competitions
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                banner_path = COALESCE($4, banner_path),
                status = COALESCE($5, status),
                max_qualified_users = COALESCE($6, max_qualified_users),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(banner_path)
        .bind(status)
        .bind(max_qualified_users)
        .fetch_one(pool)
        .await?;

        Ok(competition)
    }

    /// Delete a competition
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM competitions WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
