//! Judge request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_SCORE, MIN_SCORE};

/// Judge assignment request (admin)
#[derive(Debug, Deserialize)]
pub struct AssignJudgeRequest {
    pub user_id: Uuid,
    pub competition_id: Uuid,
}

/// Submission scoring request
#[derive(Debug, Deserialize, Validate)]
pub struct ScoreSubmissionRequest {
    pub submission_id: Uuid,

    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub score: i32,

    #[validate(length(max = 4096))]
    pub comments: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_request_enforces_range() {
        let mut req = ScoreSubmissionRequest {
            submission_id: Uuid::new_v4(),
            score: 101,
            comments: None,
        };
        assert!(req.validate().is_err());

        req.score = -1;
        assert!(req.validate().is_err());

        req.score = 100;
        assert!(req.validate().is_ok());

        req.score = 0;
        assert!(req.validate().is_ok());
    }
}
