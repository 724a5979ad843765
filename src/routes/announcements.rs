use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::ApiError,
    models::announcement::{Announcement, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    services::announcements::AnnouncementService,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Accepted for client compatibility; does not change the result set.
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Deserialize)]
pub struct TeacherParams {
    pub teacher_username: Option<String>,
}

pub async fn list_announcements(
    State(state): State<AppState>,
    Query(_params): Query<ListParams>,
) -> Result<Json<Vec<Announcement>>, ApiError> {
    let docs = AnnouncementService::list(state.announcements.as_ref()).await?;
    Ok(Json(docs))
}

pub async fn list_active_announcements(
    State(state): State<AppState>,
) -> Result<Json<Vec<Announcement>>, ApiError> {
    let docs = AnnouncementService::list_active(state.announcements.as_ref()).await?;
    Ok(Json(docs))
}

pub async fn create_announcement(
    State(state): State<AppState>,
    Query(params): Query<TeacherParams>,
    Json(body): Json<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<Announcement>), ApiError> {
    let created = AnnouncementService::create(
        state.announcements.as_ref(),
        state.teachers.as_ref(),
        params.teacher_username.as_deref(),
        body,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<TeacherParams>,
    Json(body): Json<UpdateAnnouncementRequest>,
) -> Result<Json<Announcement>, ApiError> {
    let updated = AnnouncementService::update(
        state.announcements.as_ref(),
        state.teachers.as_ref(),
        params.teacher_username.as_deref(),
        &id,
        body,
    )
    .await?;
    Ok(Json(updated))
}

pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<TeacherParams>,
) -> Result<Json<Value>, ApiError> {
    AnnouncementService::delete(
        state.announcements.as_ref(),
        state.teachers.as_ref(),
        params.teacher_username.as_deref(),
        &id,
    )
    .await?;
    Ok(Json(json!({ "message": "Deleted" })))
}
