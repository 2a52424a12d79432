//! Team formation handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Team routes (all require authentication)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_team))
        .route("/join", post(handler::join_team))
        .route("/me", get(handler::get_my_team))
        .route("/competition/{competition_id}", get(handler::list_teams))
        .route("/assign-role", put(handler::assign_team_role))
        .route(
            "/disqualify/{competition_id}",
            post(handler::disqualify_incomplete),
        )
}
