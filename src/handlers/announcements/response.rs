//! Announcement response DTOs

use serde::Serialize;

use crate::models::Announcement;

/// List of a competition's announcements, newest first
#[derive(Debug, Serialize)]
pub struct AnnouncementsListResponse {
    pub announcements: Vec<Announcement>,
}
