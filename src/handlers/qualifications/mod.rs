//! Qualification workflow handlers

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

/// Qualification routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", post(handler::create_question))
        .route("/questions/{competition_id}", get(handler::list_questions))
        .route("/answers/{competition_id}", get(handler::list_answers))
        .route("/answers/{competition_id}", post(handler::submit_answers))
        .route(
            "/answers/{competition_id}/upload",
            post(handler::upload_answer_file),
        )
        .route("/approve/{user_id}", post(handler::approve_user))
}
