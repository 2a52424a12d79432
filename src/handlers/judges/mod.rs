//! Judge assignment and scoring handlers

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

/// Judge routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/assign", post(handler::assign_judge))
        .route("/competition/{competition_id}", get(handler::list_judges))
        .route("/score", post(handler::score_submission))
        .route(
            "/competition/{competition_id}/stage/{stage_id}/submissions",
            get(handler::list_submissions_for_judging),
        )
}
