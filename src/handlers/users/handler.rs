//! User handler implementations

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    error::AppResult,
    middleware::auth::{AuthenticatedUser, require_admin},
    services::UserService,
    state::AppState,
};

use super::{request::ListUsersQuery, response::UsersListResponse};

/// List users with pagination and filters (admin)
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UsersListResponse>> {
    require_admin(&auth_user)?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let (users, total) = UserService::list_users(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        query.role.as_deref(),
    )
    .await?;

    Ok(Json(UsersListResponse {
        users: users.into_iter().map(Into::into).collect(),
        total,
        page,
        per_page,
    }))
}
