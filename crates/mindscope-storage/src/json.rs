use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::StorageError;
use crate::objects;

/// Load a JSON object.
pub async fn load_json<T: DeserializeOwned>(root: &Path, key: &str) -> Result<T, StorageError> {
    let body = objects::get_object(root, key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Save a JSON object, replacing any previous version.
pub async fn save_json<T: Serialize>(root: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(root, key, &body).await
}

/// Save a JSON object that must not exist yet.
pub async fn create_json<T: Serialize>(root: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object_if_absent(root, key, &body).await
}

/// Load the objects behind `keys`, in order. A record that vanished or
/// does not parse is logged and skipped so one bad file cannot hide the
/// rest of a listing.
pub async fn load_many<T: DeserializeOwned>(root: &Path, keys: &[String]) -> Result<Vec<T>, StorageError> {
    let mut values = Vec::with_capacity(keys.len());
    for key in keys {
        match load_json(root, key).await {
            Ok(value) => values.push(value),
            Err(StorageError::NotFound { .. }) => {}
            Err(StorageError::Serialization(e)) => {
                warn!(key = %key, error = %e, "skipping unreadable record");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(values)
}
