//! Judge handler implementations

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
    models::{Judge, Score},
    services::JudgeService,
    state::AppState,
};

use super::{
    request::{AssignJudgeRequest, ScoreSubmissionRequest},
    response::{JudgedSubmission, JudgesListResponse, JudgingListResponse},
};

/// Assign a user as judge of a competition (admin)
pub async fn assign_judge(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<AssignJudgeRequest>,
) -> AppResult<(StatusCode, Json<Judge>)> {
    require_admin(&auth_user)?;

    let judge =
        JudgeService::assign_judge(state.db(), &payload.user_id, &payload.competition_id).await?;

    Ok((StatusCode::CREATED, Json(judge)))
}

/// List a competition's judges (public)
pub async fn list_judges(
    State(state): State<AppState>,
    Path(competition_id): Path<Uuid>,
) -> AppResult<Json<JudgesListResponse>> {
    let judges = JudgeService::get_judges(state.db(), &competition_id).await?;
    Ok(Json(JudgesListResponse { judges }))
}

/// Score a submission as the acting judge
pub async fn score_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ScoreSubmissionRequest>,
) -> AppResult<Json<Score>> {
    payload.validate()?;

    let score = JudgeService::score_submission(
        state.db(),
        &auth_user.id,
        &payload.submission_id,
        payload.score,
        payload.comments.as_deref(),
    )
    .await?;

    Ok(Json(score))
}

/// List a stage's submissions with the acting judge's scores
pub async fn list_submissions_for_judging(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((competition_id, stage_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<JudgingListResponse>> {
    let rows = JudgeService::submissions_for_judging(
        state.db(),
        &auth_user.id,
        &competition_id,
        &stage_id,
    )
    .await?;

    Ok(Json(JudgingListResponse {
        submissions: rows
            .into_iter()
            .map(|(submission, scores)| JudgedSubmission { submission, scores })
            .collect(),
    }))
}
