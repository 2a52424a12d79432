//! Stage model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Stage database model
///
/// A named phase of a competition with its own scoring mode, used to
/// scope submissions.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Stage {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
    pub scoring_type: String,
    pub instructions: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stage {
    /// Check whether the stage window is open at the given instant
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        if let Some(starts_at) = self.starts_at {
            if now < starts_at {
                return false;
            }
        }
        if let Some(ends_at) = self.ends_at {
            if now > ends_at {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_stage() -> Stage {
        Stage {
            id: Uuid::new_v4(),
            competition_id: Uuid::new_v4(),
            name: "Prototype".to_string(),
            description: None,
            position: 1,
            scoring_type: "manual".to_string(),
            instructions: None,
            starts_at: None,
            ends_at: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_open_window() {
        let now = Utc::now();
        let mut stage = sample_stage();

        // No bounds: always open
        assert!(stage.is_open_at(now));

        stage.starts_at = Some(now + Duration::hours(1));
        assert!(!stage.is_open_at(now));

        stage.starts_at = Some(now - Duration::hours(2));
        stage.ends_at = Some(now - Duration::hours(1));
        assert!(!stage.is_open_at(now));

        stage.ends_at = Some(now + Duration::hours(1));
        assert!(stage.is_open_at(now));
    }
}
