//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::roles;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: String,
    pub role: String,
    pub is_qualified: bool,
    pub qualified_at: Option<DateTime<Utc>>,
    pub team_id: Option<Uuid>,
    pub team_role: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }

    /// Check if the user may create a team: qualified, or already promoted to leader
    pub fn can_create_team(&self) -> bool {
        self.is_qualified || self.role == roles::LEADER
    }

    /// Check if the user currently belongs to a team
    pub fn has_team(&self) -> bool {
        self.team_id.is_some()
    }

    /// Check if the user leads the given team
    pub fn leads(&self, team_id: &Uuid) -> bool {
        self.team_id.as_ref() == Some(team_id)
            && self.team_role.as_deref() == Some(crate::constants::TEAM_ROLE_LEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            password_hash: "x".to_string(),
            display_name: "Alice".to_string(),
            role: roles::MEMBER.to_string(),
            is_qualified: false,
            qualified_at: None,
            team_id: None,
            team_role: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_can_create_team_requires_qualification_or_leader_role() {
        let mut user = sample_user();
        assert!(!user.can_create_team());

        user.is_qualified = true;
        assert!(user.can_create_team());

        user.is_qualified = false;
        user.role = roles::LEADER.to_string();
        assert!(user.can_create_team());
    }

    #[test]
    fn test_leads_checks_team_and_role() {
        let mut user = sample_user();
        let team_id = Uuid::new_v4();
        assert!(!user.leads(&team_id));

        user.team_id = Some(team_id);
        user.team_role = Some("member".to_string());
        assert!(!user.leads(&team_id));

        user.team_role = Some("leader".to_string());
        assert!(user.leads(&team_id));
        assert!(!user.leads(&Uuid::new_v4()));
    }
}
