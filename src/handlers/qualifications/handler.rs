//! Qualification handler implementations

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::SUBMISSION_EXTENSIONS,
    error::{AppError, AppResult},
    handlers::auth::response::UserResponse,
    middleware::auth::{AuthenticatedUser, require_admin},
    models::QualificationQuestion,
    services::QualificationService,
    state::AppState,
    utils::storage,
};

use super::{
    request::{ApproveUserRequest, CreateQuestionRequest, SubmitAnswersRequest},
    response::{
        AnswerFileResponse, AnswersListResponse, QuestionsListResponse, SubmitAnswersResponse,
    },
};

/// Create a qualification question (admin)
pub async fn create_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateQuestionRequest>,
) -> AppResult<(StatusCode, Json<QualificationQuestion>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let question = QualificationService::create_question(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(question)))
}

/// List a competition's questions (public)
pub async fn list_questions(
    State(state): State<AppState>,
    Path(competition_id): Path<Uuid>,
) -> AppResult<Json<QuestionsListResponse>> {
    let questions = QualificationService::get_questions(state.db(), &competition_id).await?;
    Ok(Json(QuestionsListResponse { questions }))
}

/// List all answers for a competition (admin)
pub async fn list_answers(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(competition_id): Path<Uuid>,
) -> AppResult<Json<AnswersListResponse>> {
    require_admin(&auth_user)?;

    let answers = QualificationService::get_answers(state.db(), &competition_id).await?;
    Ok(Json(AnswersListResponse { answers }))
}

/// Submit (or replace) the caller's answers for a competition
pub async fn submit_answers(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(competition_id): Path<Uuid>,
    Json(payload): Json<SubmitAnswersRequest>,
) -> AppResult<Json<SubmitAnswersResponse>> {
    let all_required_answered = QualificationService::submit_answers(
        state.db(),
        &auth_user.id,
        &competition_id,
        &payload.answers,
    )
    .await?;

    Ok(Json(SubmitAnswersResponse {
        message: "Answers submitted".to_string(),
        all_required_answered,
    }))
}

/// Upload an attachment for a file-upload question; the returned path is
/// referenced from the answer payload
pub async fn upload_answer_file(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(_competition_id): Path<Uuid>,
    mut multipart: Multipart,
) -> AppResult<Json<AnswerFileResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| AppError::Upload("File field has no filename".to_string()))?;
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Upload(e.to_string()))?;

            let file_path = storage::save_upload(
                &state.config().storage,
                "answer",
                &filename,
                SUBMISSION_EXTENSIONS,
                &data,
            )
            .await?;

            return Ok(Json(AnswerFileResponse { file_path }));
        }
    }

    Err(AppError::Upload("Missing file field".to_string()))
}

/// Approve a user's qualification (admin), bounded by competition capacity
pub async fn approve_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<ApproveUserRequest>,
) -> AppResult<Json<UserResponse>> {
    require_admin(&auth_user)?;

    let user =
        QualificationService::approve_user(state.db(), &user_id, &payload.competition_id).await?;

    Ok(Json(user.into()))
}
