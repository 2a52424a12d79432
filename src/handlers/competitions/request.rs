//! Competition request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_COMPETITION_DESCRIPTION_LENGTH, MAX_COMPETITION_NAME_LENGTH};

/// Competition creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompetitionRequest {
    #[validate(length(min = 1, max = MAX_COMPETITION_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_COMPETITION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(range(min = 1))]
    pub max_qualified_users: Option<i32>,
}

/// Competition update request (all fields optional)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 1, max = MAX_COMPETITION_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(max = MAX_COMPETITION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub status: Option<String>,

    #[validate(range(min = 1))]
    pub max_qualified_users: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_name() {
        let req = CreateCompetitionRequest {
            name: String::new(),
            description: None,
            max_qualified_users: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_zero_capacity() {
        let req = CreateCompetitionRequest {
            name: "Spring Hackathon".to_string(),
            description: None,
            max_qualified_users: Some(0),
        };
        assert!(req.validate().is_err());
    }
}
