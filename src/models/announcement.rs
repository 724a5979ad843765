use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored announcement. Temporal fields are ISO-8601 strings truncated to
/// whole seconds; `start` is null when the announcement has no lower bound.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub start: Option<String>,
    pub expires: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub message: String,
    /// ISO datetime, must be in the future.
    pub expires: String,
    pub start: Option<String>,
}

/// Omitted fields are left untouched. An empty-string `start` clears the
/// stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub expires: Option<String>,
    pub start: Option<String>,
}

/// Fields to persist for a new record; the store assigns the id.
#[derive(Debug)]
pub struct NewAnnouncement {
    pub title: String,
    pub message: String,
    pub start: Option<String>,
    pub expires: String,
    pub created_at: String,
}

/// Validated change set handed to the store. The outer Option on `start`
/// distinguishes "leave untouched" from "set" and "clear".
#[derive(Debug, Default)]
pub struct AnnouncementChanges {
    pub title: Option<String>,
    pub message: Option<String>,
    pub expires: Option<String>,
    pub start: Option<Option<String>>,
}

impl AnnouncementChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.message.is_none()
            && self.expires.is_none()
            && self.start.is_none()
    }
}
