//! Team request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Team creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    pub competition_id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Team join request
#[derive(Debug, Deserialize, Validate)]
pub struct JoinTeamRequest {
    #[validate(length(equal = 6))]
    pub invite_code: String,
}

/// Team role assignment request (leader only)
#[derive(Debug, Deserialize, Validate)]
pub struct AssignTeamRoleRequest {
    pub user_id: Uuid,

    #[validate(length(min = 1, max = 50))]
    pub team_role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_request_enforces_code_length() {
        let req = JoinTeamRequest {
            invite_code: "AB12".to_string(),
        };
        assert!(req.validate().is_err());

        let req = JoinTeamRequest {
            invite_code: "AB12CD".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
