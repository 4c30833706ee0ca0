use axum::extract::{Query, State};
use axum::{Extension, Form, Json};

use mindscope_core::models::mood::{Mood, MoodEntry};
use mindscope_storage::records;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::ListQuery;
use crate::state::AppState;

/// Log a mood from form fields: `mood`, any number of `influencers`
/// (each may also be comma-separated), and optional `notes`.
pub async fn log_mood(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Json<MoodEntry>, ApiError> {
    let mut mood = None;
    let mut influencers = Vec::new();
    let mut notes = None;

    for (name, value) in fields {
        match name.as_str() {
            "mood" => mood = Some(value),
            "influencers" => influencers.extend(value.split(',').map(str::to_string)),
            "notes" => notes = Some(value),
            _ => {}
        }
    }

    let mood: Mood = mood
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Please select a mood.".to_string()))?
        .parse()?;

    let entry = MoodEntry::new(user.sub, mood, influencers, notes);
    records::save_mood(state.data_dir(), &entry).await?;
    Ok(Json(entry))
}

/// The caller's mood entries, newest first.
pub async fn list_moods(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<MoodEntry>>, ApiError> {
    let entries = records::list_moods(state.data_dir(), &user.sub, query.limit).await?;
    Ok(Json(entries))
}
