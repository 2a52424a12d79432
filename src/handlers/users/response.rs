//! User response DTOs

use serde::Serialize;

use crate::handlers::auth::response::UserResponse;

/// Paginated user listing
#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<UserResponse>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}
