//! Stage management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Stage routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_stage))
        .route("/competition/{competition_id}", get(handler::list_stages))
        .route("/{id}", put(handler::update_stage))
        .route("/{id}", delete(handler::delete_stage))
}
