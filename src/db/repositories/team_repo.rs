//! Team repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Team};

/// Repository for team database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Find team by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(team)
    }

    /// List teams of a competition
    pub async fn list_by_competition(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"SELECT * FROM teams WHERE competition_id = $1 ORDER BY created_at"#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(teams)
    }

    /// Disqualify every non-disqualified, never-completed team of a
    /// competition whose actual member count is still below capacity. Teams
    /// that once filled up are left alone even if membership later dropped.
    /// Single statement so the sweep cannot observe a half-updated team.
    /// Returns the disqualified count.
    pub async fn disqualify_incomplete(pool: &PgPool, competition_id: &Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE teams
            SET is_disqualified = TRUE, updated_at = NOW()
            WHERE competition_id = $1
              AND is_disqualified = FALSE
              AND is_complete = FALSE
              AND (SELECT COUNT(*) FROM users u WHERE u.team_id = teams.id) < max_members
            "#,
        )
        .bind(competition_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
