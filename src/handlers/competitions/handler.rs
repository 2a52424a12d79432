//! Competition handler implementations

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::BANNER_EXTENSIONS,
    error::{AppError, AppResult},
    middleware::auth::{AuthenticatedUser, require_admin},
    models::Competition,
    services::CompetitionService,
    state::AppState,
    utils::storage,
};

use super::{
    request::{CreateCompetitionRequest, UpdateCompetitionRequest},
    response::{CompetitionDetail, CompetitionsListResponse},
};

/// List all competitions (public)
pub async fn list_competitions(
    State(state): State<AppState>,
) -> AppResult<Json<CompetitionsListResponse>> {
    let competitions = CompetitionService::list_competitions(state.db()).await?;
    Ok(Json(CompetitionsListResponse { competitions }))
}

/// Create a new competition (admin)
pub async fn create_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCompetitionRequest>,
) -> AppResult<(StatusCode, Json<Competition>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let competition = CompetitionService::create_competition(state.db(), payload, None).await?;

    Ok((StatusCode::CREATED, Json(competition)))
}

/// Get a competition with its stages, questions, judges and teams (public)
pub async fn get_competition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CompetitionDetail>> {
    let detail = CompetitionService::get_competition(state.db(), &id).await?;
    Ok(Json(detail))
}

/// Update a competition (admin)
pub async fn update_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCompetitionRequest>,
) -> AppResult<Json<Competition>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let competition =
        CompetitionService::update_competition(state.db(), &id, payload, None).await?;

    Ok(Json(competition))
}

/// Delete a competition (admin)
pub async fn delete_competition(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    CompetitionService::delete_competition(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload or replace a competition banner image (admin, multipart)
pub async fn upload_banner(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> AppResult<Json<Competition>> {
    require_admin(&auth_user)?;

    let mut banner_path = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        if field.name() == Some("banner") {
            let filename = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| AppError::Upload("Banner field has no filename".to_string()))?;
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Upload(e.to_string()))?;

            banner_path = Some(
                storage::save_upload(
                    &state.config().storage,
                    "banner",
                    &filename,
                    BANNER_EXTENSIONS,
                    &data,
                )
                .await?,
            );
        }
    }

    let banner_path =
        banner_path.ok_or_else(|| AppError::Upload("Missing banner field".to_string()))?;

    let payload = UpdateCompetitionRequest {
        name: None,
        description: None,
        status: None,
        max_qualified_users: None,
    };
    let competition =
        CompetitionService::update_competition(state.db(), &id, payload, Some(banner_path))
            .await?;

    Ok(Json(competition))
}
