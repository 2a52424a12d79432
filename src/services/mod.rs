//! Business logic services
//!
//! Services sit between the HTTP handlers and the repositories. All role
//! checks and workflow invariants are enforced here.

pub mod announcement_service;
pub mod auth_service;
pub mod competition_service;
pub mod judge_service;
pub mod qualification_service;
pub mod stage_service;
pub mod submission_service;
pub mod team_service;
pub mod user_service;

pub use announcement_service::AnnouncementService;
pub use auth_service::AuthService;
pub use competition_service::CompetitionService;
pub use judge_service::JudgeService;
pub use qualification_service::QualificationService;
pub use stage_service::StageService;
pub use submission_service::SubmissionService;
pub use team_service::TeamService;
pub use user_service::UserService;
