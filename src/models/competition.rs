//! Competition model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Competition database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Competition {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub banner_path: Option<String>,
    pub status: String,
    pub max_qualified_users: i32,
    pub current_qualified_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Competition {
    /// Check whether another user can still be approved under the capacity ceiling
    pub fn has_qualification_capacity(&self) -> bool {
        self.current_qualified_count < self.max_qualified_users
    }

    /// Remaining qualification seats
    pub fn remaining_capacity(&self) -> i32 {
        (self.max_qualified_users - self.current_qualified_count).max(0)
    }
}

/// Competition lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Draft,
    Active,
    Finished,
}

impl CompetitionStatus {
    /// Parse a stored status label
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "active" => Some(Self::Active),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }
}

impl std::fmt::Display for CompetitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Active => write!(f, "active"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_competition(max: i32, current: i32) -> Competition {
        Competition {
            id: Uuid::new_v4(),
            name: "Hackathon".to_string(),
            description: None,
            banner_path: None,
            status: "active".to_string(),
            max_qualified_users: max,
            current_qualified_count: current,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_capacity_predicates() {
        let comp = sample_competition(2, 1);
        assert!(comp.has_qualification_capacity());
        assert_eq!(comp.remaining_capacity(), 1);

        let full = sample_competition(2, 2);
        assert!(!full.has_qualification_capacity());
        assert_eq!(full.remaining_capacity(), 0);
    }

    #[test]
    fn test_status_parse_roundtrip() {
        for label in ["draft", "active", "finished"] {
            let status = CompetitionStatus::parse(label).unwrap();
            assert_eq!(status.to_string(), label);
        }
        assert!(CompetitionStatus::parse("archived").is_none());
    }
}
