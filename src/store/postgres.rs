use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{AnnouncementStore, TeacherStore};
use crate::models::announcement::{Announcement, AnnouncementChanges, NewAnnouncement};
use crate::models::teacher::Teacher;

#[derive(Clone)]
pub struct PgAnnouncementStore {
    pool: PgPool,
}

impl PgAnnouncementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementStore for PgAnnouncementStore {
    async fn list(&self) -> anyhow::Result<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, doc: NewAnnouncement) -> anyhow::Result<Announcement> {
        let row = sqlx::query_as::<_, Announcement>(
            "INSERT INTO announcements (title, message, \"start\", expires, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&doc.title)
        .bind(&doc.message)
        .bind(&doc.start)
        .bind(&doc.expires)
        .bind(&doc.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &AnnouncementChanges,
    ) -> anyhow::Result<Option<Announcement>> {
        // `start` can be set to NULL explicitly, which COALESCE alone cannot
        // express; $5 flags whether the field was supplied at all.
        let start_supplied = changes.start.is_some();
        let start_value = changes.start.clone().flatten();
        let row = sqlx::query_as::<_, Announcement>(
            "UPDATE announcements
             SET title = COALESCE($2, title),
                 message = COALESCE($3, message),
                 expires = COALESCE($4, expires),
                 \"start\" = CASE WHEN $5 THEN $6 ELSE \"start\" END
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.message)
        .bind(&changes.expires)
        .bind(start_supplied)
        .bind(&start_value)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct PgTeacherStore {
    pool: PgPool,
}

impl PgTeacherStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherStore for PgTeacherStore {
    async fn find(&self, username: &str) -> anyhow::Result<Option<Teacher>> {
        let row = sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
