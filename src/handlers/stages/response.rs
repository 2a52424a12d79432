//! Stage response DTOs

use serde::Serialize;

use crate::models::Stage;

/// List of a competition's stages
#[derive(Debug, Serialize)]
pub struct StagesListResponse {
    pub stages: Vec<Stage>,
}
