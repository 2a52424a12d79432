//! Authentication service

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::crypto,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> AppResult<User> {
        // Check if email exists
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        // Hash password
        let password_hash = crypto::hash_password(password)?;

        // Create user
        let user =
            UserRepository::create(pool, email, &password_hash, display_name, roles::MEMBER)
                .await?;

        Ok(user)
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String, i64)> {
        // Find user
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Verify password
        if !crypto::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        // Generate token
        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;

        Ok((user, access_token, expires_in))
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Generate access token
    pub fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }

    /// Create the configured admin account if no admin exists yet
    pub async fn seed_admin(pool: &PgPool, config: &Config) -> AppResult<()> {
        if UserRepository::count_admins(pool).await? > 0 {
            return Ok(());
        }

        let password_hash = crypto::hash_password(&config.admin.password)?;
        let admin = UserRepository::create(
            pool,
            &config.admin.email,
            &password_hash,
            "Administrator",
            roles::ADMIN,
        )
        .await?;

        tracing::info!(email = %admin.email, "Seeded initial admin account");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AdminConfig, DatabaseConfig, JwtConfig, ServerConfig, StorageConfig,
    };

    fn test_config(expiry_hours: i64) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                cors_origins: vec![],
            },
            database: DatabaseConfig {
                url: "postgres://unused".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
                expiry_hours,
            },
            storage: StorageConfig {
                upload_path: "/tmp".into(),
                max_upload_bytes: 1024,
            },
            admin: AdminConfig {
                email: "admin@example.com".to_string(),
                password: "password123".to_string(),
            },
        }
    }

    fn test_user(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            password_hash: "x".to_string(),
            display_name: "Alice".to_string(),
            role: role.to_string(),
            is_qualified: false,
            qualified_at: None,
            team_id: None,
            team_role: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_roundtrip_carries_identity_and_role() {
        let config = test_config(24);
        let user = test_user("leader");

        let (token, expires_in) = AuthService::generate_access_token(&user, &config).unwrap();
        assert_eq!(expires_in, 24 * 3600);

        let claims = AuthService::verify_token(&token, &config.jwt.secret).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, "leader");
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let config = test_config(24);
        let user = test_user("member");

        let (token, _) = AuthService::generate_access_token(&user, &config).unwrap();
        let err = AuthService::verify_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative expiry puts exp in the past
        let config = test_config(-1);
        let user = test_user("member");

        let (token, _) = AuthService::generate_access_token(&user, &config).unwrap();
        let err = AuthService::verify_token(&token, &config.jwt.secret).unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let err = AuthService::verify_token("not.a.jwt", "secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }
}
