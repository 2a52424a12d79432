//! Domain models
//!
//! Database row types and their state helpers, one file per entity.

pub mod announcement;
pub mod competition;
pub mod judge;
pub mod qualification;
pub mod stage;
pub mod submission;
pub mod team;
pub mod user;

pub use announcement::Announcement;
pub use competition::{Competition, CompetitionStatus};
pub use judge::{Judge, Score};
pub use qualification::{QualificationAnswer, QualificationQuestion, QuestionType};
pub use stage::Stage;
pub use submission::Submission;
pub use team::{Team, TeamStatus};
pub use user::User;
