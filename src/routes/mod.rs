pub mod announcements;
pub mod health;
