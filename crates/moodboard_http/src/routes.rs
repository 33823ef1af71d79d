//! Mood API handlers and response envelopes.
//!
//! # Contract
//! - `POST /api/mood` validates `mood` before touching the store.
//! - `GET /api/mood` returns all entries newest first plus the stats snapshot.
//! - Success bodies carry `"success": true`; failures go through [`ApiError`].

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use log::debug;
use moodboard_core::{
    Mood, MoodEntry, MoodStats, MoodStore, MoodValidationError, SubmitMoodRequest,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Submission fields pulled from an arbitrary JSON body.
///
/// `mood` stays untyped so every bad value maps to one error. Optional text
/// fields keep string values only; anything else counts as absent. A body
/// that is valid JSON but not an object carries no mood at all.
#[derive(Debug, Default, PartialEq)]
pub struct SubmitMoodBody {
    pub mood: Option<Value>,
    pub comment: Option<String>,
    pub employee_name: Option<String>,
}

impl SubmitMoodBody {
    pub fn from_json(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Self::default();
        };
        Self {
            mood: fields.remove("mood"),
            comment: string_field(fields.remove("comment")),
            employee_name: string_field(fields.remove("employeeName")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitMoodResponse {
    pub success: bool,
    pub mood: MoodEntry,
}

#[derive(Debug, Serialize)]
pub struct MoodListResponse {
    pub success: bool,
    pub moods: Vec<MoodEntry>,
    pub stats: MoodStats,
}

pub async fn submit_mood_handler(
    State(store): State<Arc<MoodStore>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SubmitMoodResponse>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| {
        debug!("event=mood_submit module=http status=error rejection={rejection}");
        ApiError::MalformedPayload
    })?;
    let body = SubmitMoodBody::from_json(raw);
    let mood = parse_mood(body.mood.as_ref())?;

    let entry = store
        .submit(SubmitMoodRequest {
            mood,
            comment: body.comment,
            employee_name: body.employee_name,
        })
        .map_err(ApiError::SaveFailed)?;

    Ok(Json(SubmitMoodResponse {
        success: true,
        mood: entry,
    }))
}

pub async fn list_moods_handler(
    State(store): State<Arc<MoodStore>>,
) -> Result<Json<MoodListResponse>, ApiError> {
    let snapshot = store.snapshot().map_err(ApiError::FetchFailed)?;
    debug!(
        "event=mood_list module=http status=ok total={}",
        snapshot.stats.total
    );

    Ok(Json(MoodListResponse {
        success: true,
        moods: snapshot.entries,
        stats: snapshot.stats,
    }))
}

pub async fn health_handler() -> &'static str {
    "healthy"
}

fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

fn parse_mood(value: Option<&Value>) -> Result<Mood, MoodValidationError> {
    match value {
        Some(Value::String(text)) => text.parse(),
        Some(other) => Err(MoodValidationError::InvalidMood(other.to_string())),
        None => Err(MoodValidationError::InvalidMood(String::new())),
    }
}
