//! Typed access to screenings, moods, chat exchanges and tips.
//!
//! Screenings, moods and exchanges are create-once: saving a record whose
//! key already exists fails with [`StorageError::AlreadyExists`].

use std::cmp::Reverse;
use std::path::Path;

use mindscope_core::keys;
use mindscope_core::models::chat::ChatExchange;
use mindscope_core::models::mood::MoodEntry;
use mindscope_core::models::screening::ScreeningResult;
use mindscope_core::models::tip::{default_tips, WellnessTip};
use tracing::info;

use crate::error::StorageError;
use crate::{json, objects};

pub async fn save_screening(root: &Path, result: &ScreeningResult) -> Result<(), StorageError> {
    let key = keys::screening(&result.user, result.taken_at, result.id);
    json::create_json(root, &key, result).await?;
    info!(
        user = %result.user,
        instrument = %result.instrument,
        total = result.total_score,
        "screening saved"
    );
    Ok(())
}

/// A user's screenings, newest first. `limit` caps the count.
pub async fn list_screenings(
    root: &Path,
    user: &str,
    limit: Option<usize>,
) -> Result<Vec<ScreeningResult>, StorageError> {
    let keys = recent_keys(root, &keys::screenings_prefix(user), limit).await?;
    let mut results: Vec<ScreeningResult> = json::load_many(root, &keys).await?;
    results.sort_by_key(|r| Reverse(r.taken_at));
    Ok(results)
}

pub async fn save_mood(root: &Path, entry: &MoodEntry) -> Result<(), StorageError> {
    let key = keys::mood(entry.user(), entry.logged_at(), entry.id());
    json::create_json(root, &key, entry).await?;
    info!(user = %entry.user(), mood = %entry.mood(), score = entry.score(), "mood saved");
    Ok(())
}

/// A user's mood entries, newest first. `limit` caps the count.
pub async fn list_moods(
    root: &Path,
    user: &str,
    limit: Option<usize>,
) -> Result<Vec<MoodEntry>, StorageError> {
    let keys = recent_keys(root, &keys::moods_prefix(user), limit).await?;
    let mut entries: Vec<MoodEntry> = json::load_many(root, &keys).await?;
    entries.sort_by_key(|e| Reverse(e.logged_at()));
    Ok(entries)
}

pub async fn save_chat(root: &Path, exchange: &ChatExchange) -> Result<(), StorageError> {
    let key = keys::chat(&exchange.user, exchange.occurred_at, exchange.id);
    json::create_json(root, &key, exchange).await?;
    info!(user = %exchange.user, source = ?exchange.response_source, "chat exchange saved");
    Ok(())
}

/// A user's chat exchanges in conversation order (oldest first). With a
/// `limit`, only the most recent `limit` exchanges are returned.
pub async fn list_chats(
    root: &Path,
    user: &str,
    limit: Option<usize>,
) -> Result<Vec<ChatExchange>, StorageError> {
    let keys = recent_keys(root, &keys::chats_prefix(user), limit).await?;
    let mut exchanges: Vec<ChatExchange> = json::load_many(root, &keys).await?;
    exchanges.sort_by_key(|e| e.occurred_at);
    Ok(exchanges)
}

/// The wellness tip table. Seeds the defaults on first use.
pub async fn load_tips(root: &Path) -> Result<Vec<WellnessTip>, StorageError> {
    match json::load_json(root, keys::TIPS).await {
        Ok(tips) => Ok(tips),
        Err(StorageError::NotFound { .. }) => {
            let tips = default_tips();
            json::save_json(root, keys::TIPS, &tips).await?;
            info!(count = tips.len(), "seeded wellness tips");
            Ok(tips)
        }
        Err(e) => Err(e),
    }
}

/// A user's record keys in chronological order, cut to the `limit` most
/// recent before anything is read.
async fn recent_keys(root: &Path, prefix: &str, limit: Option<usize>) -> Result<Vec<String>, StorageError> {
    let mut keys = objects::list_objects(root, prefix).await?;
    if let Some(limit) = limit {
        let older = keys.len().saturating_sub(limit);
        keys.drain(..older);
    }
    Ok(keys)
}
