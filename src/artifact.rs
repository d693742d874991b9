// src/artifact.rs
//! Reading and writing the two JSON artifacts under `<root>/.rankmap/`.
//!
//! Writes go to a temp file and are renamed into place. A read that fails to
//! parse is reported as `MapCorrupt` so callers regenerate instead of trusting
//! partial data.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::{ARTIFACT_DIR, CONCISE_MAP_FILE, RAW_MAP_FILE};
use crate::error::{RankMapError, Result};
use crate::types::{ConciseMap, RawMap};

#[must_use]
pub fn artifact_dir(root: &Path) -> PathBuf {
    root.join(ARTIFACT_DIR)
}

#[must_use]
pub fn raw_map_path(root: &Path) -> PathBuf {
    artifact_dir(root).join(RAW_MAP_FILE)
}

#[must_use]
pub fn concise_map_path(root: &Path) -> PathBuf {
    artifact_dir(root).join(CONCISE_MAP_FILE)
}

/// Writes the raw map as indented JSON.
///
/// # Errors
/// Returns `Io` if the directory or file cannot be written.
pub fn write_raw_map(root: &Path, map: &RawMap) -> Result<PathBuf> {
    let path = raw_map_path(root);
    write_json(&path, map, true)?;
    Ok(path)
}

/// Writes the concise map as compact JSON.
///
/// # Errors
/// Returns `Io` if the directory or file cannot be written.
pub fn write_concise_map(root: &Path, map: &ConciseMap) -> Result<PathBuf> {
    let path = concise_map_path(root);
    write_json(&path, map, false)?;
    Ok(path)
}

/// Reads the raw map.
///
/// # Errors
/// Returns `MapMissing` if absent, `MapCorrupt` if it does not parse.
pub fn read_raw_map(root: &Path) -> Result<RawMap> {
    read_json(&raw_map_path(root))
}

/// Reads the concise map.
///
/// # Errors
/// Returns `MapMissing` if absent, `MapCorrupt` if it does not parse.
pub fn read_concise_map(root: &Path) -> Result<ConciseMap> {
    read_json(&concise_map_path(root))
}

fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| RankMapError::io(e, dir))?;
    }
    let body = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    atomic_write(path, &body)?;
    debug!(path = %path.display(), "artifact written");
    Ok(())
}

fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).map_err(|e| RankMapError::io(e, &temp_path))?;
    fs::rename(&temp_path, path).map_err(|e| RankMapError::io(e, path))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(RankMapError::MapMissing {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(RankMapError::io(e, path)),
    };
    serde_json::from_str(&content).map_err(|source| RankMapError::MapCorrupt {
        source,
        path: path.to_path_buf(),
    })
}
