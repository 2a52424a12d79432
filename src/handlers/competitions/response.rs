//! Competition response DTOs

use serde::Serialize;

use crate::models::{Competition, Judge, QualificationQuestion, Stage, Team};

/// A competition with its child records
#[derive(Debug, Serialize)]
pub struct CompetitionDetail {
    pub competition: Competition,
    pub stages: Vec<Stage>,
    pub questions: Vec<QualificationQuestion>,
    pub judges: Vec<Judge>,
    pub teams: Vec<Team>,
}

/// List of competitions
#[derive(Debug, Serialize)]
pub struct CompetitionsListResponse {
    pub competitions: Vec<Competition>,
}
