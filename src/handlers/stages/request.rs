//! Stage request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Stage creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStageRequest {
    pub competition_id: Uuid,

    #[validate(length(min = 1, max = 256))]
    pub name: String,

    pub description: Option<String>,

    pub position: Option<i32>,

    pub scoring_type: Option<String>,

    pub instructions: Option<String>,

    pub starts_at: Option<DateTime<Utc>>,

    pub ends_at: Option<DateTime<Utc>>,
}

/// Stage update request (all fields optional)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStageRequest {
    #[validate(length(min = 1, max = 256))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub position: Option<i32>,

    pub scoring_type: Option<String>,

    pub instructions: Option<String>,

    pub starts_at: Option<DateTime<Utc>>,

    pub ends_at: Option<DateTime<Utc>>,

    pub is_active: Option<bool>,
}
