//! Competition management handlers

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

/// Competition routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_competitions))
        .route("/", post(handler::create_competition))
        .route("/{id}", get(handler::get_competition))
        .route("/{id}", put(handler::update_competition))
        .route("/{id}", delete(handler::delete_competition))
        .route("/{id}/banner", post(handler::upload_banner))
}
