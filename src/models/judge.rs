//! Judge assignment and score models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Judge assignment: a user attached to one competition as a judge
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Judge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub competition_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Score given by one judge to one submission
///
/// One row per (submission, judge); re-scoring updates in place.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Score {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub judge_id: Uuid,
    pub score: i32,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
