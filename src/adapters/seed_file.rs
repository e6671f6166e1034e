use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::alert::{AlertCategory, AlertId, AlertRecord};

#[derive(Debug, Error)]
pub enum SeedFileError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid seed file json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedEntry {
    id: Option<String>,
    category: AlertCategory,
    title: String,
    message: String,
    source_device: String,
    occurred_at: DateTime<Utc>,
    #[serde(default)]
    is_read: bool,
}

impl From<SeedEntry> for AlertRecord {
    fn from(entry: SeedEntry) -> Self {
        let id = entry
            .id
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(AlertId::new)
            .unwrap_or_else(AlertId::generate);

        AlertRecord {
            id,
            category: entry.category,
            title: entry.title,
            message: entry.message,
            source_device: entry.source_device,
            occurred_at: entry.occurred_at,
            is_read: entry.is_read,
        }
    }
}

pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<AlertRecord>, SeedFileError> {
    let content = fs::read_to_string(path)?;
    parse_seed(&content)
}

pub fn parse_seed(content: &str) -> Result<Vec<AlertRecord>, SeedFileError> {
    let entries: Vec<SeedEntry> = serde_json::from_str(content)?;
    Ok(entries.into_iter().map(AlertRecord::from).collect())
}
