//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        display_name: &str,
        role: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, display_name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(display_name)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Update user role
    pub async fn update_role(pool: &PgPool, id: &Uuid, role: &str) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Update the team-scoped role label of a team member
    pub async fn update_team_role(
        pool: &PgPool,
        id: &Uuid,
        team_id: &Uuid,
        team_role: &str,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET team_role = $3, updated_at = NOW()
            WHERE id = $1 AND team_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(team_id)
        .bind(team_role)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// List members of a team
    pub async fn list_team_members(pool: &PgPool, team_id: &Uuid) -> AppResult<Vec<User>> {
        let members = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users WHERE team_id = $1 ORDER BY created_at"#,
        )
        .bind(team_id)
        .fetch_all(pool)
        .await?;

        Ok(members)
    }

    /// Count users holding the admin role (used by the startup seed)
    pub async fn count_admins(pool: &PgPool) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM users WHERE role = 'admin'"#)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// List users with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE
                ($1::text IS NULL OR email ILIKE $1 OR display_name ILIKE $1)
                AND ($2::text IS NULL OR role = $2)
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(&search_pattern)
        .bind(role)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM users
            WHERE
                ($1::text IS NULL OR email ILIKE $1 OR display_name ILIKE $1)
                AND ($2::text IS NULL OR role = $2)
            "#,
        )
        .bind(&search_pattern)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok((users, count))
    }
}
