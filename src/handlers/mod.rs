//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod announcements;
pub mod auth;
pub mod competitions;
pub mod health;
pub mod judges;
pub mod qualifications;
pub mod stages;
pub mod submissions;
pub mod teams;
pub mod users;

use axum::{Router, middleware};

use crate::{
    middleware::auth::{auth_middleware, optional_auth_middleware},
    state::AppState,
};

/// Create all API routes.
///
/// Optional auth runs on every route so handlers can pull the caller's
/// identity through the extractor; team and submission routes reject
/// unauthenticated requests outright.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/competitions", competitions::routes())
        .nest("/qualifications", qualifications::routes())
        .nest("/stages", stages::routes())
        .nest("/judges", judges::routes())
        .nest("/announcements", announcements::routes())
        .nest("/users", users::routes())
        .nest(
            "/teams",
            teams::routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .nest(
            "/submissions",
            submissions::routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .layer(middleware::from_fn_with_state(
            state,
            optional_auth_middleware,
        ))
}
