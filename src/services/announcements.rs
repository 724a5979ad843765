use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Timelike, Utc};
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::announcement::{
        Announcement, AnnouncementChanges, CreateAnnouncementRequest, NewAnnouncement,
        UpdateAnnouncementRequest,
    },
    store::{AnnouncementStore, TeacherStore},
};

/// Lenient ISO-8601 parse: accepts offset-qualified datetimes, naive
/// datetimes with `T` or space separator, and date-only strings (read as
/// midnight), all naive values taken as UTC. Returns None on anything
/// unparsable.
fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = s.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    s.parse::<NaiveDate>()
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Normalize to the stored form: UTC, truncated to whole seconds.
fn to_stored(dt: DateTime<Utc>) -> String {
    dt.with_nanosecond(0)
        .unwrap_or(dt)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Whether the validity window contains `now`. Stored bounds that no longer
/// parse count as absent.
fn is_active(a: &Announcement, now: DateTime<Utc>) -> bool {
    if let Some(expires) = parse_iso(&a.expires) {
        if expires <= now {
            return false;
        }
    }
    if let Some(start) = a.start.as_deref().and_then(parse_iso) {
        if start > now {
            return false;
        }
    }
    true
}

/// Existence check only: the username must match a stored teacher record.
async fn require_teacher(
    teachers: &dyn TeacherStore,
    username: Option<&str>,
) -> Result<(), ApiError> {
    let username = username
        .filter(|u| !u.is_empty())
        .ok_or(ApiError::Unauthenticated)?;
    match teachers.find(username).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::InvalidCredentials),
    }
}

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::InvalidId)
}

pub struct AnnouncementService;

impl AnnouncementService {
    /// Every stored record. The HTTP layer accepts an `all` flag for this
    /// endpoint but it does not change the result set.
    pub async fn list(store: &dyn AnnouncementStore) -> Result<Vec<Announcement>, ApiError> {
        Ok(store.list().await?)
    }

    /// Records whose validity window contains the current time.
    pub async fn list_active(store: &dyn AnnouncementStore) -> Result<Vec<Announcement>, ApiError> {
        let now = Utc::now();
        let all = store.list().await?;
        Ok(all.into_iter().filter(|a| is_active(a, now)).collect())
    }

    pub async fn create(
        store: &dyn AnnouncementStore,
        teachers: &dyn TeacherStore,
        teacher_username: Option<&str>,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement, ApiError> {
        require_teacher(teachers, teacher_username).await?;

        let expires = parse_iso(&req.expires).ok_or(ApiError::InvalidDatetime("expires"))?;
        let now = Utc::now();
        if expires <= now {
            return Err(ApiError::ExpiresNotInFuture);
        }
        // An unparsable start is stored as null rather than rejected.
        let start = req.start.as_deref().and_then(parse_iso).map(to_stored);

        let created = store
            .insert(NewAnnouncement {
                title: req.title,
                message: req.message,
                start,
                expires: to_stored(expires),
                created_at: to_stored(now),
            })
            .await?;
        Ok(created)
    }

    /// Applies only the supplied fields. An empty-string `start` clears the
    /// stored value; `expires` is format-checked but not future-checked here.
    pub async fn update(
        store: &dyn AnnouncementStore,
        teachers: &dyn TeacherStore,
        teacher_username: Option<&str>,
        id: &str,
        req: UpdateAnnouncementRequest,
    ) -> Result<Announcement, ApiError> {
        require_teacher(teachers, teacher_username).await?;

        let mut changes = AnnouncementChanges::default();
        if let Some(title) = req.title {
            changes.title = Some(title);
        }
        if let Some(message) = req.message {
            changes.message = Some(message);
        }
        if let Some(expires) = req.expires.as_deref() {
            let dt = parse_iso(expires).ok_or(ApiError::InvalidDatetime("expires"))?;
            changes.expires = Some(to_stored(dt));
        }
        if let Some(start) = req.start.as_deref() {
            if start.is_empty() {
                changes.start = Some(None);
            } else {
                let dt = parse_iso(start).ok_or(ApiError::InvalidDatetime("start"))?;
                changes.start = Some(Some(to_stored(dt)));
            }
        }
        if changes.is_empty() {
            return Err(ApiError::NoFieldsProvided);
        }

        let id = parse_id(id)?;
        store.update(id, &changes).await?.ok_or(ApiError::NotFound)
    }

    pub async fn delete(
        store: &dyn AnnouncementStore,
        teachers: &dyn TeacherStore,
        teacher_username: Option<&str>,
        id: &str,
    ) -> Result<(), ApiError> {
        require_teacher(teachers, teacher_username).await?;
        let id = parse_id(id)?;
        if store.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound)
        }
    }
}
