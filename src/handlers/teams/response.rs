//! Team response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::{Team, TeamStatus, User};

/// A team with derived status and its member roster
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team: Team,
    pub status: TeamStatus,
    pub members: Vec<MemberResponse>,
}

impl TeamResponse {
    pub fn new(team: Team, members: Vec<User>) -> Self {
        let status = team.status();
        Self {
            team,
            status,
            members: members.into_iter().map(MemberResponse::from).collect(),
        }
    }
}

/// Member entry within a team roster
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub team_role: Option<String>,
}

impl From<User> for MemberResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
            email: user.email,
            team_role: user.team_role,
        }
    }
}

/// List of teams in a competition
#[derive(Debug, Serialize)]
pub struct TeamsListResponse {
    pub teams: Vec<TeamResponse>,
}

/// Result of a disqualification sweep
#[derive(Debug, Serialize)]
pub struct DisqualifyResponse {
    pub disqualified_count: u64,
}
