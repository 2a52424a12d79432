//! Stage service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::scoring_types,
    db::repositories::{CompetitionRepository, StageRepository},
    error::{AppError, AppResult},
    handlers::stages::request::{CreateStageRequest, UpdateStageRequest},
    models::Stage,
    utils::validation,
};

/// Stage service for business logic
pub struct StageService;

impl StageService {
    /// Create a stage within a competition
    pub async fn create_stage(pool: &PgPool, payload: CreateStageRequest) -> AppResult<Stage> {
        CompetitionRepository::find_by_id(pool, &payload.competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let scoring_type = payload
            .scoring_type
            .as_deref()
            .unwrap_or(scoring_types::AUTOMATIC);
        validation::validate_scoring_type(scoring_type)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        StageRepository::create(
            pool,
            &payload.competition_id,
            &payload.name,
            payload.description.as_deref(),
            payload.position.unwrap_or(0),
            scoring_type,
            payload.instructions.as_deref(),
            payload.starts_at,
            payload.ends_at,
        )
        .await
    }

    /// List a competition's stages in display order
    pub async fn get_stages(pool: &PgPool, competition_id: &Uuid) -> AppResult<Vec<Stage>> {
        StageRepository::list_by_competition(pool, competition_id).await
    }

    /// Update a stage
    pub async fn update_stage(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateStageRequest,
    ) -> AppResult<Stage> {
        StageRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Stage not found".to_string()))?;

        if let Some(scoring_type) = payload.scoring_type.as_deref() {
            validation::validate_scoring_type(scoring_type)
                .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        }

        StageRepository::update(
            pool,
            id,
            payload.name.as_deref(),
            payload.description.as_deref(),
            payload.position,
            payload.scoring_type.as_deref(),
            payload.instructions.as_deref(),
            payload.starts_at,
            payload.ends_at,
            payload.is_active,
        )
        .await
    }

    /// Delete a stage
    pub async fn delete_stage(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        StageRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Stage not found".to_string()))?;

        StageRepository::delete(pool, id).await
    }
}
