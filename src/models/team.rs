//! Team model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Team database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub invite_code: String,
    pub competition_id: Uuid,
    pub leader_id: Uuid,
    pub is_complete: bool,
    pub is_disqualified: bool,
    pub max_members: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Current lifecycle state derived from the flags
    pub fn status(&self) -> TeamStatus {
        if self.is_disqualified {
            TeamStatus::Disqualified
        } else if self.is_complete {
            TeamStatus::Complete
        } else {
            TeamStatus::Forming
        }
    }

    /// Check whether a member count fills the team
    pub fn is_full_at(&self, member_count: i64) -> bool {
        member_count >= self.max_members as i64
    }

    /// Check whether a new member may join
    pub fn accepts_members(&self) -> bool {
        self.status() == TeamStatus::Forming
    }
}

/// Team lifecycle state: forming until capacity is reached or an admin
/// sweep disqualifies it; complete and disqualified are both terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    Forming,
    Complete,
    Disqualified,
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forming => write!(f, "forming"),
            Self::Complete => write!(f, "complete"),
            Self::Disqualified => write!(f, "disqualified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_team() -> Team {
        Team {
            id: Uuid::new_v4(),
            name: "Rustaceans".to_string(),
            invite_code: "AB12CD".to_string(),
            competition_id: Uuid::new_v4(),
            leader_id: Uuid::new_v4(),
            is_complete: false,
            is_disqualified: false,
            max_members: 5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_transitions_are_derived_from_flags() {
        let mut team = sample_team();
        assert_eq!(team.status(), TeamStatus::Forming);
        assert!(team.accepts_members());

        team.is_complete = true;
        assert_eq!(team.status(), TeamStatus::Complete);
        assert!(!team.accepts_members());

        // Disqualification wins over completeness
        team.is_disqualified = true;
        assert_eq!(team.status(), TeamStatus::Disqualified);
        assert!(!team.accepts_members());
    }

    #[test]
    fn test_completion_is_terminal_even_below_capacity() {
        // A team that once filled up keeps its complete status even if
        // membership later drops, so it never re-enters the forming pool
        // the disqualification sweep draws from.
        let mut team = sample_team();
        team.is_complete = true;
        assert!(!team.is_full_at(3));
        assert_eq!(team.status(), TeamStatus::Complete);
        assert!(!team.accepts_members());
    }

    #[test]
    fn test_is_full_at_capacity_boundary() {
        let team = sample_team();
        assert!(!team.is_full_at(4));
        assert!(team.is_full_at(5));
        assert!(team.is_full_at(6));
    }
}
