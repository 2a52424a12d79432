//! Announcement model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Announcement database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub title: String,
    pub message: String,
    pub file_path: Option<String>,
    pub created_at: DateTime<Utc>,
}
