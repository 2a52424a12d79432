//! Crucible - Competition Management Platform
//!
//! This library provides the core functionality for the Crucible platform,
//! a competition management system covering qualification screening, team
//! formation, staged submissions and judging.
//!
//! # Features
//!
//! - Qualification Q&A workflow with capacity-bounded approval
//! - Team formation via unique invite codes
//! - Staged submissions with judge scoring
//! - Role-based access control (admin, judge, leader, member)
//! - Realtime chat and WebRTC signaling relay
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod realtime;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
