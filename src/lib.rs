// Library exports for the API binary and tests
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use sqlx::PgPool;

use store::{AnnouncementStore, TeacherStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub announcements: Arc<dyn AnnouncementStore>,
    pub teachers: Arc<dyn TeacherStore>,
}
