//! Database repositories
//!
//! Each repository wraps the SQL for one entity. Multi-entity workflows
//! (approval, team join) run their statements inside service-level
//! transactions.

pub mod announcement_repo;
pub mod competition_repo;
pub mod judge_repo;
pub mod qualification_repo;
pub mod stage_repo;
pub mod submission_repo;
pub mod team_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepository;
pub use competition_repo::CompetitionRepository;
pub use judge_repo::JudgeRepository;
pub use qualification_repo::QualificationRepository;
pub use stage_repo::StageRepository;
pub use submission_repo::SubmissionRepository;
pub use team_repo::TeamRepository;
pub use user_repo::UserRepository;
