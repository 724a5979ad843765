pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::announcement::{Announcement, AnnouncementChanges, NewAnnouncement};
use crate::models::teacher::Teacher;

/// Document-store port for the announcements collection. Every method is a
/// single point read or point write; per-call atomicity belongs to the store.
#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<Announcement>>;

    async fn insert(&self, doc: NewAnnouncement) -> anyhow::Result<Announcement>;

    /// Applies the change set and returns the updated record, or None when
    /// no record matches the id.
    async fn update(
        &self,
        id: Uuid,
        changes: &AnnouncementChanges,
    ) -> anyhow::Result<Option<Announcement>>;

    /// Returns true when a record was removed.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

/// Credential lookup port: exact-match by username only.
#[async_trait]
pub trait TeacherStore: Send + Sync {
    async fn find(&self, username: &str) -> anyhow::Result<Option<Teacher>>;
}
