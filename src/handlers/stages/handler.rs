//! Stage handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::{AuthenticatedUser, require_admin},
    models::Stage,
    services::StageService,
    state::AppState,
};

use super::{
    request::{CreateStageRequest, UpdateStageRequest},
    response::StagesListResponse,
};

/// Create a stage within a competition (admin)
pub async fn create_stage(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateStageRequest>,
) -> AppResult<(StatusCode, Json<Stage>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let stage = StageService::create_stage(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(stage)))
}

/// List a competition's stages in display order (public)
pub async fn list_stages(
    State(state): State<AppState>,
    Path(competition_id): Path<Uuid>,
) -> AppResult<Json<StagesListResponse>> {
    let stages = StageService::get_stages(state.db(), &competition_id).await?;
    Ok(Json(StagesListResponse { stages }))
}

/// Update a stage (admin)
pub async fn update_stage(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStageRequest>,
) -> AppResult<Json<Stage>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let stage = StageService::update_stage(state.db(), &id, payload).await?;

    Ok(Json(stage))
}

/// Delete a stage (admin)
pub async fn delete_stage(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    StageService::delete_stage(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
