use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::fs;

use crate::error::StorageError;

/// Map a key onto a path below `root`. Keys are `/`-separated and may not
/// be absolute or contain `.`/`..` segments.
fn object_path(root: &Path, key: &str) -> Result<PathBuf, StorageError> {
    let relative = Path::new(key);
    let valid = !key.is_empty()
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if !valid {
        return Err(StorageError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(root.join(relative))
}

async fn ensure_parent(path: &Path, key: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| StorageError::Write {
                key: key.to_string(),
                source,
            })?;
    }
    Ok(())
}

/// Read an object.
pub async fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = object_path(root, key)?;
    fs::read(&path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::Read {
                key: key.to_string(),
                source,
            }
        }
    })
}

/// Write an object, replacing any previous version.
pub async fn put_object(root: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    publish(root, key, body, Publish::Replace).await
}

/// Create an object that must not exist yet. Returns
/// [`StorageError::AlreadyExists`] instead of overwriting.
pub async fn put_object_if_absent(root: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    publish(root, key, body, Publish::NoClobber).await
}

#[derive(Clone, Copy)]
enum Publish {
    Replace,
    NoClobber,
}

/// Write the body to a uniquely named temporary file next to the target,
/// then move it into place. Readers see either no object or the whole one;
/// a failed write leaves nothing under the key.
async fn publish(root: &Path, key: &str, body: &[u8], mode: Publish) -> Result<(), StorageError> {
    let path = object_path(root, key)?;
    ensure_parent(&path, key).await?;

    let key = key.to_string();
    let body = body.to_vec();
    tokio::task::spawn_blocking(move || write_and_persist(&path, &key, &body, mode)).await?
}

fn write_and_persist(path: &Path, key: &str, body: &[u8], mode: Publish) -> Result<(), StorageError> {
    let write_err = |source| StorageError::Write {
        key: key.to_string(),
        source,
    };
    let dir = path.parent().unwrap_or(Path::new("."));

    // Temporary names start with `.tmp` and never end in `.json`.
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(body).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    let persisted = match mode {
        Publish::Replace => tmp.persist(path),
        Publish::NoClobber => tmp.persist_noclobber(path),
    };
    persisted.map(drop).map_err(|e| {
        if e.error.kind() == ErrorKind::AlreadyExists {
            StorageError::AlreadyExists {
                key: key.to_string(),
            }
        } else {
            write_err(e.error)
        }
    })
}

/// List `.json` object keys directly under a prefix (e.g. `moods/alice/`).
/// A prefix with no objects yields an empty list. Keys are sorted.
pub async fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let dir = object_path(root, prefix.trim_end_matches('/'))?;
    let list_err = |source| StorageError::List {
        prefix: prefix.to_string(),
        source,
    };

    let mut entries = match fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(list_err(e)),
    };

    let mut keys = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.ends_with(".json") {
            continue;
        }
        if entry.file_type().await.map_err(list_err)?.is_file() {
            keys.push(format!("{}/{name}", prefix.trim_end_matches('/')));
        }
    }

    keys.sort();
    Ok(keys)
}
