//! Submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Submission routes (all require authentication)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::submit))
        .route("/stage/{stage_id}/mine", get(handler::get_team_submission))
        .route("/stage/{stage_id}", get(handler::list_stage_submissions))
}
