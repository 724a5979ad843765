//! Vec-backed in-process implementations of the store ports, used as test
//! doubles. Insertion order is preserved so list results are deterministic.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{AnnouncementStore, TeacherStore};
use crate::models::announcement::{Announcement, AnnouncementChanges, NewAnnouncement};
use crate::models::teacher::Teacher;

#[derive(Default)]
pub struct MemoryAnnouncementStore {
    rows: Mutex<Vec<Announcement>>,
}

impl MemoryAnnouncementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record as-is, bypassing create validation.
    pub fn seed(&self, row: Announcement) {
        self.rows.lock().unwrap().push(row);
    }
}

#[async_trait]
impl AnnouncementStore for MemoryAnnouncementStore {
    async fn list(&self) -> anyhow::Result<Vec<Announcement>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert(&self, doc: NewAnnouncement) -> anyhow::Result<Announcement> {
        let row = Announcement {
            id: Uuid::new_v4(),
            title: doc.title,
            message: doc.message,
            start: doc.start,
            expires: doc.expires,
            created_at: doc.created_at,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &AnnouncementChanges,
    ) -> anyhow::Result<Option<Announcement>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &changes.title {
            row.title = title.clone();
        }
        if let Some(message) = &changes.message {
            row.message = message.clone();
        }
        if let Some(expires) = &changes.expires {
            row.expires = expires.clone();
        }
        if let Some(start) = &changes.start {
            row.start = start.clone();
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryTeacherStore {
    teachers: Mutex<Vec<Teacher>>,
}

impl MemoryTeacherStore {
    pub fn with_usernames(usernames: &[&str]) -> Self {
        let teachers = usernames
            .iter()
            .map(|u| Teacher {
                username: (*u).to_string(),
                display_name: None,
            })
            .collect();
        Self {
            teachers: Mutex::new(teachers),
        }
    }
}

#[async_trait]
impl TeacherStore for MemoryTeacherStore {
    async fn find(&self, username: &str) -> anyhow::Result<Option<Teacher>> {
        Ok(self
            .teachers
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.username == username)
            .cloned())
    }
}
