//! Team handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::auth::response::UserResponse,
    middleware::auth::{AuthenticatedUser, require_admin},
    models::Team,
    services::TeamService,
    state::AppState,
};

use super::{
    request::{AssignTeamRoleRequest, CreateTeamRequest, JoinTeamRequest},
    response::{DisqualifyResponse, TeamResponse, TeamsListResponse},
};

/// Create a team with the caller as leader
pub async fn create_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<Team>)> {
    payload.validate()?;

    let team = TeamService::create_team(
        state.db(),
        &auth_user.id,
        &payload.competition_id,
        payload.name.trim(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// Join a team by invite code
pub async fn join_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<JoinTeamRequest>,
) -> AppResult<Json<Team>> {
    payload.validate()?;

    let team = TeamService::join_team(state.db(), &auth_user.id, &payload.invite_code).await?;

    Ok(Json(team))
}

/// Get the caller's team with its members
pub async fn get_my_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<TeamResponse>> {
    let (team, members) = TeamService::get_my_team(state.db(), &auth_user.id).await?;

    Ok(Json(TeamResponse::new(team, members)))
}

/// List a competition's teams with their members
pub async fn list_teams(
    State(state): State<AppState>,
    Path(competition_id): Path<Uuid>,
) -> AppResult<Json<TeamsListResponse>> {
    let teams = TeamService::list_teams(state.db(), &competition_id).await?;

    Ok(Json(TeamsListResponse {
        teams: teams
            .into_iter()
            .map(|(team, members)| TeamResponse::new(team, members))
            .collect(),
    }))
}

/// Assign a team role label to a member (leader only)
pub async fn assign_team_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<AssignTeamRoleRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = TeamService::assign_team_role(
        state.db(),
        &auth_user.id,
        &payload.user_id,
        &payload.team_role,
    )
    .await?;

    Ok(Json(user.into()))
}

/// Disqualify all incomplete teams of a competition (admin)
pub async fn disqualify_incomplete(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(competition_id): Path<Uuid>,
) -> AppResult<Json<DisqualifyResponse>> {
    require_admin(&auth_user)?;

    let disqualified_count =
        TeamService::disqualify_incomplete_teams(state.db(), &competition_id).await?;

    Ok(Json(DisqualifyResponse { disqualified_count }))
}
