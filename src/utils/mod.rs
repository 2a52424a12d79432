//! Utility functions

pub mod codes;
pub mod crypto;
pub mod storage;
pub mod validation;

pub use codes::generate_invite_code;
pub use crypto::{hash_password, verify_password};
