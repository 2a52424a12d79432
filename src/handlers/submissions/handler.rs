//! Submission handler implementations

use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use uuid::Uuid;

use crate::{
    constants::{SUBMISSION_EXTENSIONS, roles},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::Submission,
    services::SubmissionService,
    state::AppState,
    utils::storage,
};

use super::{
    request::SubmissionUpload,
    response::{SubmissionsListResponse, TeamSubmissionResponse},
};

/// Create or replace the caller's team submission for a stage (multipart:
/// stage_id, optional content, optional file)
pub async fn submit(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    multipart: Multipart,
) -> AppResult<Json<Submission>> {
    let upload = SubmissionUpload::from_multipart(multipart).await?;

    let stage_id = upload
        .stage_id
        .ok_or_else(|| AppError::InvalidInput("Missing stage_id field".to_string()))?;

    if upload.content.is_none() && upload.file.is_none() {
        return Err(AppError::InvalidInput(
            "Submission needs content or a file".to_string(),
        ));
    }

    let file_path = match &upload.file {
        Some((filename, data)) => Some(
            storage::save_upload(
                &state.config().storage,
                "submission",
                filename,
                SUBMISSION_EXTENSIONS,
                data,
            )
            .await?,
        ),
        None => None,
    };

    let submission = SubmissionService::submit(
        state.db(),
        &auth_user.id,
        &stage_id,
        upload.content.as_deref(),
        file_path.as_deref(),
    )
    .await?;

    Ok(Json(submission))
}

/// Get the caller's team submission for a stage
pub async fn get_team_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(stage_id): Path<Uuid>,
) -> AppResult<Json<TeamSubmissionResponse>> {
    let submission =
        SubmissionService::get_team_submission(state.db(), &auth_user.id, &stage_id).await?;

    Ok(Json(TeamSubmissionResponse { submission }))
}

/// List all submissions for a stage (admin or judge)
pub async fn list_stage_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(stage_id): Path<Uuid>,
) -> AppResult<Json<SubmissionsListResponse>> {
    if auth_user.role != roles::ADMIN && auth_user.role != roles::JUDGE {
        return Err(AppError::Forbidden(
            "Only admins and judges can list stage submissions".to_string(),
        ));
    }

    let submissions = SubmissionService::list_stage_submissions(state.db(), &stage_id).await?;

    Ok(Json(SubmissionsListResponse { submissions }))
}
