//! User directory service

use sqlx::PgPool;

use crate::{
    db::repositories::UserRepository,
    error::AppResult,
    models::User,
    utils::validation,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// List users with pagination and optional search/role filters
    pub async fn list_users(
        pool: &PgPool,
        page: i64,
        per_page: i64,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        if let Some(role) = role {
            validation::validate_role(role)
                .map_err(|e| crate::error::AppError::InvalidInput(e.to_string()))?;
        }

        let offset = (page - 1) * per_page;
        UserRepository::list(pool, offset, per_page, search, role).await
    }
}
