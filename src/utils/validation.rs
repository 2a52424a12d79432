//! Input validation utilities

use crate::constants;

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate stage scoring type
pub fn validate_scoring_type(scoring_type: &str) -> Result<(), &'static str> {
    if constants::scoring_types::ALL.contains(&scoring_type) {
        Ok(())
    } else {
        Err("Invalid scoring type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_role() {
        assert!(validate_role("admin").is_ok());
        assert!(validate_role("judge").is_ok());
        assert!(validate_role("leader").is_ok());
        assert!(validate_role("member").is_ok());
        assert!(validate_role("organizer").is_err());
    }

    #[test]
    fn test_validate_scoring_type() {
        assert!(validate_scoring_type("automatic").is_ok());
        assert!(validate_scoring_type("manual").is_ok());
        assert!(validate_scoring_type("ranking").is_err());
    }
}
