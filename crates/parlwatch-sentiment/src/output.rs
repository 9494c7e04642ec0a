//! JSON document persistence.
//!
//! Each document is written to a `.tmp` sibling and renamed into place, so a
//! reader never observes a half-written file.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SentimentError;
use crate::types::{Mention, MentionsDocument};

pub const MENTIONS_FILE: &str = "mentions.json";
pub const ENTITY_ROLLUPS_FILE: &str = "entity_mentions.json";
pub const TOPIC_ROLLUPS_FILE: &str = "topic_mentions.json";
pub const ALERTS_FILE: &str = "alerts.json";
pub const TRENDS_FILE: &str = "sentiment_trends.json";

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> SentimentError + '_ {
    move |source| SentimentError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Serialize `doc` as pretty JSON to `dir/name`, creating `dir` if needed.
///
/// # Errors
///
/// Returns [`SentimentError`] if serialization, the write, or the rename fails.
pub fn write_document<T: Serialize + ?Sized>(
    dir: &Path,
    name: &str,
    doc: &T,
) -> Result<PathBuf, SentimentError> {
    std::fs::create_dir_all(dir).map_err(io_err(dir))?;

    let path = dir.join(name);
    let tmp = dir.join(format!("{name}.tmp"));

    let body = serde_json::to_vec_pretty(doc).map_err(|e| SentimentError::Json {
        path: path.display().to_string(),
        source: e,
    })?;
    std::fs::write(&tmp, body).map_err(io_err(&tmp))?;
    std::fs::rename(&tmp, &path).map_err(io_err(&path))?;

    tracing::debug!(path = %path.display(), "document written");
    Ok(path)
}

/// Read and parse `dir/name`.
///
/// # Errors
///
/// Returns [`SentimentError`] if the file cannot be read or does not parse as `T`.
pub fn read_document<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T, SentimentError> {
    let path = dir.join(name);
    let raw = std::fs::read(&path).map_err(io_err(&path))?;
    serde_json::from_slice(&raw).map_err(|e| SentimentError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

/// Group records by channel, preserving their order within each channel.
#[must_use]
pub fn group_by_channel(records: &[Mention]) -> MentionsDocument {
    let mut doc = MentionsDocument::new();
    for record in records {
        doc.entry(record.channel).or_default().push(record.clone());
    }
    doc
}
