//! Announcement handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Announcement routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_announcement))
        .route(
            "/competition/{competition_id}",
            get(handler::list_announcements),
        )
}
