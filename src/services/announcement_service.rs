//! Announcement service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{AnnouncementRepository, CompetitionRepository},
    error::{AppError, AppResult},
    models::Announcement,
};

/// Announcement service for business logic
pub struct AnnouncementService;

impl AnnouncementService {
    /// Create an announcement for a competition
    pub async fn create_announcement(
        pool: &PgPool,
        competition_id: &Uuid,
        title: &str,
        message: &str,
        file_path: Option<&str>,
    ) -> AppResult<Announcement> {
        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        AnnouncementRepository::create(pool, competition_id, title, message, file_path).await
    }

    /// List announcements of a competition, newest first
    pub async fn get_announcements(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<Announcement>> {
        AnnouncementRepository::list_by_competition(pool, competition_id).await
    }
}
