use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(String);

impl AlertId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AlertId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Warning,
    Info,
    Success,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 3] = [Self::Warning, Self::Info, Self::Success];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    pub id: AlertId,
    pub category: AlertCategory,
    pub title: String,
    pub message: String,
    pub source_device: String,
    pub occurred_at: DateTime<Utc>,
    pub is_read: bool,
}

impl AlertRecord {
    pub fn new(
        id: impl Into<AlertId>,
        category: AlertCategory,
        title: impl Into<String>,
        message: impl Into<String>,
        source_device: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            message: message.into(),
            source_device: source_device.into(),
            occurred_at,
            is_read: false,
        }
    }

    pub fn read(mut self) -> Self {
        self.is_read = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Unread,
    Category(AlertCategory),
}

impl AlertFilter {
    pub fn matches(self, alert: &AlertRecord) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !alert.is_read,
            Self::Category(category) => alert.category == category,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown alert filter: {0}")]
pub struct AlertFilterParseError(pub String);

impl FromStr for AlertFilter {
    type Err = AlertFilterParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "unread" => Ok(Self::Unread),
            "warning" => Ok(Self::Category(AlertCategory::Warning)),
            "info" => Ok(Self::Category(AlertCategory::Info)),
            "success" => Ok(Self::Category(AlertCategory::Success)),
            _ => Err(AlertFilterParseError(raw.to_string())),
        }
    }
}
