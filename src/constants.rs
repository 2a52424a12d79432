//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Maximum display name length
pub const MAX_DISPLAY_NAME_LENGTH: u64 = 100;

// =============================================================================
// FILE STORAGE DEFAULTS
// =============================================================================

/// Default upload directory
pub const DEFAULT_UPLOAD_PATH: &str = "./uploads";

/// Default maximum upload size in bytes (64 MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Allowed extensions for competition banner images
pub const BANNER_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];

/// Allowed extensions for submission attachments
pub const SUBMISSION_EXTENSIONS: &[&str] =
    &["pdf", "xls", "xlsx", "csv", "jpeg", "jpg", "png", "gif", "webp"];

// =============================================================================
// TEAM SETTINGS
// =============================================================================

/// Default member capacity for a team (leader included)
pub const DEFAULT_TEAM_CAPACITY: i32 = 5;

/// Length of a team invite code
pub const INVITE_CODE_LENGTH: usize = 6;

/// Alphabet used for invite codes (36^6 code space)
pub const INVITE_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Upper bound on invite-code generation attempts before giving up
pub const INVITE_CODE_MAX_ATTEMPTS: u32 = 16;

// =============================================================================
// COMPETITION SETTINGS
// =============================================================================

/// Default qualification capacity for a competition
pub const DEFAULT_MAX_QUALIFIED_USERS: i32 = 100;

/// Maximum judges that may be assigned to one competition
pub const MAX_JUDGES_PER_COMPETITION: i64 = 3;

/// Maximum competition name length
pub const MAX_COMPETITION_NAME_LENGTH: u64 = 256;

/// Maximum competition description length
pub const MAX_COMPETITION_DESCRIPTION_LENGTH: u64 = 65535;

/// Competition lifecycle statuses
pub mod competition_statuses {
    pub const DRAFT: &str = "draft";
    pub const ACTIVE: &str = "active";
    pub const FINISHED: &str = "finished";

    /// All competition statuses
    pub const ALL: &[&str] = &[DRAFT, ACTIVE, FINISHED];
}

// =============================================================================
// QUALIFICATION SETTINGS
// =============================================================================

/// Qualification question types
pub mod question_types {
    pub const TEXT: &str = "text";
    pub const MULTIPLE_CHOICE: &str = "multiple_choice";
    pub const FILE_UPLOAD: &str = "file_upload";

    /// All question types
    pub const ALL: &[&str] = &[TEXT, MULTIPLE_CHOICE, FILE_UPLOAD];
}

// =============================================================================
// STAGE SETTINGS
// =============================================================================

/// Stage scoring types
pub mod scoring_types {
    pub const AUTOMATIC: &str = "automatic";
    pub const MANUAL: &str = "manual";

    /// All scoring types
    pub const ALL: &[&str] = &[AUTOMATIC, MANUAL];
}

// =============================================================================
// SCORING SETTINGS
// =============================================================================

/// Minimum score a judge may award
pub const MIN_SCORE: i32 = 0;

/// Maximum score a judge may award
pub const MAX_SCORE: i32 = 100;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const JUDGE: &str = "judge";
    pub const LEADER: &str = "leader";
    pub const MEMBER: &str = "member";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, JUDGE, LEADER, MEMBER];
}

/// Team-scoped role label given to the team creator
pub const TEAM_ROLE_LEADER: &str = "leader";

/// Team-scoped role label given to joining members
pub const TEAM_ROLE_MEMBER: &str = "member";

// =============================================================================
// REALTIME RELAY
// =============================================================================

/// Buffered messages per broadcast room before lagging receivers drop
pub const ROOM_CHANNEL_CAPACITY: usize = 64;

/// Room name for the global chat channel
pub const GLOBAL_CHAT_ROOM: &str = "global-chat";

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
