//! Invite code generation

use rand::Rng;

use crate::constants::{INVITE_CODE_ALPHABET, INVITE_CODE_LENGTH};

/// Generate a random invite code: 6 characters drawn from A-Z0-9
pub fn generate_invite_code() -> String {
    let mut rng = rand::rng();

    (0..INVITE_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..INVITE_CODE_ALPHABET.len());
            INVITE_CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Normalize a user-supplied invite code for lookup
pub fn normalize_invite_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_length_and_charset() {
        for _ in 0..100 {
            let code = generate_invite_code();
            assert_eq!(code.len(), INVITE_CODE_LENGTH);
            assert!(
                code.bytes().all(|b| INVITE_CODE_ALPHABET.contains(&b)),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_ten_thousand_teams_get_distinct_codes() {
        // Mirrors the allocation discipline: generate, retry on collision,
        // bounded attempts per code. 10k codes out of a 36^6 space should
        // never come close to the attempt bound.
        let mut taken = HashSet::new();
        for _ in 0..10_000 {
            let code = (0..crate::constants::INVITE_CODE_MAX_ATTEMPTS)
                .map(|_| generate_invite_code())
                .find(|c| !taken.contains(c))
                .expect("attempt bound exhausted");
            taken.insert(code);
        }
        assert_eq!(taken.len(), 10_000);
    }

    #[test]
    fn test_normalize_invite_code() {
        assert_eq!(normalize_invite_code(" ab12cd "), "AB12CD");
        assert_eq!(normalize_invite_code("AB12CD"), "AB12CD");
    }
}
