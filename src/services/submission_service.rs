//! Submission service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{StageRepository, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    models::Submission,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Create or replace the actor's team submission for a stage.
    ///
    /// One submission per (team, stage); resubmission updates content and
    /// file path. A replaced file is removed from disk best-effort.
    pub async fn submit(
        pool: &PgPool,
        actor_id: &Uuid,
        stage_id: &Uuid,
        content: Option<&str>,
        file_path: Option<&str>,
    ) -> AppResult<Submission> {
        let team_id = Self::team_of(pool, actor_id).await?;

        let stage = StageRepository::find_by_id(pool, stage_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Stage not found".to_string()))?;

        let previous = SubmissionRepository::find_for_team_stage(pool, &team_id, stage_id).await?;

        let submission = SubmissionRepository::upsert(
            pool,
            &team_id,
            stage_id,
            &stage.competition_id,
            content,
            file_path,
        )
        .await?;

        // Remove the replaced attachment once the new one is persisted
        if let (Some(new_path), Some(old_path)) =
            (file_path, previous.and_then(|p| p.file_path))
        {
            if new_path != old_path {
                if let Err(e) = tokio::fs::remove_file(&old_path).await {
                    tracing::warn!(path = %old_path, error = %e, "Failed to remove replaced submission file");
                }
            }
        }

        Ok(submission)
    }

    /// Get the actor's team submission for a stage
    pub async fn get_team_submission(
        pool: &PgPool,
        actor_id: &Uuid,
        stage_id: &Uuid,
    ) -> AppResult<Option<Submission>> {
        let team_id = Self::team_of(pool, actor_id).await?;
        SubmissionRepository::find_for_team_stage(pool, &team_id, stage_id).await
    }

    /// List all submissions for a stage
    pub async fn list_stage_submissions(
        pool: &PgPool,
        stage_id: &Uuid,
    ) -> AppResult<Vec<Submission>> {
        StageRepository::find_by_id(pool, stage_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Stage not found".to_string()))?;

        SubmissionRepository::list_by_stage(pool, stage_id).await
    }

    async fn team_of(pool: &PgPool, actor_id: &Uuid) -> AppResult<Uuid> {
        let actor = UserRepository::find_by_id(pool, actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        actor
            .team_id
            .ok_or_else(|| AppError::Forbidden("User must be in a team".to_string()))
    }
}
