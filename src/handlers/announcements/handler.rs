//! Announcement handler implementations

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    constants::SUBMISSION_EXTENSIONS,
    error::{AppError, AppResult},
    middleware::auth::{AuthenticatedUser, require_admin},
    models::Announcement,
    services::AnnouncementService,
    state::AppState,
    utils::storage,
};

use super::response::AnnouncementsListResponse;

/// Create an announcement with an optional attachment (admin, multipart:
/// competition_id, title, message, optional file)
pub async fn create_announcement(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    require_admin(&auth_user)?;

    let mut competition_id = None;
    let mut title = None;
    let mut message = None;
    let mut file_path = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("competition_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Upload(e.to_string()))?;
                competition_id = Some(Uuid::parse_str(text.trim()).map_err(|_| {
                    AppError::InvalidInput("Invalid competition_id".to_string())
                })?);
            }
            Some("title") => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Upload(e.to_string()))?,
                );
            }
            Some("message") => {
                message = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Upload(e.to_string()))?,
                );
            }
            Some("file") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::Upload("File field has no filename".to_string()))?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Upload(e.to_string()))?;

                file_path = Some(
                    storage::save_upload(
                        &state.config().storage,
                        "announcement",
                        &filename,
                        SUBMISSION_EXTENSIONS,
                        &data,
                    )
                    .await?,
                );
            }
            _ => {}
        }
    }

    let competition_id = competition_id
        .ok_or_else(|| AppError::InvalidInput("Missing competition_id field".to_string()))?;
    let title = title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing title field".to_string()))?;
    let message = message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing message field".to_string()))?;

    let announcement = AnnouncementService::create_announcement(
        state.db(),
        &competition_id,
        title.trim(),
        message.trim(),
        file_path.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(announcement)))
}

/// List a competition's announcements, newest first (public)
pub async fn list_announcements(
    State(state): State<AppState>,
    Path(competition_id): Path<Uuid>,
) -> AppResult<Json<AnnouncementsListResponse>> {
    let announcements =
        AnnouncementService::get_announcements(state.db(), &competition_id).await?;

    Ok(Json(AnnouncementsListResponse { announcements }))
}
