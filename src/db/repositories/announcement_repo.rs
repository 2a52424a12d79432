//! Announcement repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Announcement};

/// Repository for announcement database operations
pub struct AnnouncementRepository;

impl AnnouncementRepository {
    /// Create a new announcement
    pub async fn create(
        pool: &PgPool,
        competition_id: &Uuid,
        title: &str,
        message: &str,
        file_path: Option<&str>,
    ) -> AppResult<Announcement> {
        let announcement = sqlx::query_as::<_, Announcement>(
            r#"
            INSERT INTO announcements (competition_id, title, message, file_path)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(competition_id)
        .bind(title)
        .bind(message)
        .bind(file_path)
        .fetch_one(pool)
        .await?;

        Ok(announcement)
    }

    /// List announcements of a competition, newest first
    pub async fn list_by_competition(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<Announcement>> {
        let announcements = sqlx::query_as::<_, Announcement>(
            r#"
            SELECT * FROM announcements
            WHERE competition_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(announcements)
    }
}
