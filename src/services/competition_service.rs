//! Competition service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{
        CompetitionRepository, JudgeRepository, QualificationRepository, StageRepository,
        TeamRepository,
    },
    error::{AppError, AppResult},
    handlers::competitions::{
        request::{CreateCompetitionRequest, UpdateCompetitionRequest},
        response::CompetitionDetail,
    },
    models::{Competition, CompetitionStatus},
};

/// Competition service for business logic
pub struct CompetitionService;

impl CompetitionService {
    /// Create a new competition in draft status
    pub async fn create_competition(
        pool: &PgPool,
        payload: CreateCompetitionRequest,
        banner_path: Option<String>,
    ) -> AppResult<Competition> {
        CompetitionRepository::create(
            pool,
            payload.name.trim(),
            payload.description.as_deref().map(str::trim),
            banner_path.as_deref(),
            payload
                .max_qualified_users
                .unwrap_or(crate::constants::DEFAULT_MAX_QUALIFIED_USERS),
        )
        .await
    }

    /// List all competitions, newest first
    pub async fn list_competitions(pool: &PgPool) -> AppResult<Vec<Competition>> {
        CompetitionRepository::list(pool).await
    }

    /// Get a competition with its stages, questions, judges and teams
    pub async fn get_competition(pool: &PgPool, id: &Uuid) -> AppResult<CompetitionDetail> {
        let competition = CompetitionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let stages = StageRepository::list_by_competition(pool, id).await?;
        let questions = QualificationRepository::list_questions(pool, id).await?;
        let judges = JudgeRepository::list_by_competition(pool, id).await?;
        let teams = TeamRepository::list_by_competition(pool, id).await?;

        Ok(CompetitionDetail {
            competition,
            stages,
            questions,
            judges,
            teams,
        })
    }

    /// Update a competition; validates any status transition label
    pub async fn update_competition(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateCompetitionRequest,
        banner_path: Option<String>,
    ) -> AppResult<Competition> {
        CompetitionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        if let Some(status) = payload.status.as_deref() {
            if CompetitionStatus::parse(status).is_none() {
                return Err(AppError::InvalidInput(format!(
                    "Invalid competition status: {status}"
                )));
            }
        }

        CompetitionRepository::update(
            pool,
            id,
            payload.name.as_deref(),
            payload.description.as_deref(),
            banner_path.as_deref(),
            payload.status.as_deref(),
            payload.max_qualified_users,
        )
        .await
    }

    /// Delete a competition and its banner file if present
    pub async fn delete_competition(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        let competition = CompetitionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        CompetitionRepository::delete(pool, id).await?;

        if let Some(banner_path) = competition.banner_path {
            if let Err(e) = tokio::fs::remove_file(&banner_path).await {
                tracing::warn!(path = %banner_path, error = %e, "Failed to remove banner file");
            }
        }

        Ok(())
    }
}
