use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

const DAYS_PER_WEEK: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl Timeframe {
    pub fn days(self) -> f64 {
        match self {
            Self::Day => 1.0,
            Self::Week => DAYS_PER_WEEK,
            Self::Month => 30.0,
            Self::Year => 365.0,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown timeframe: {0}")]
pub struct TimeframeParseError(pub String);

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(TimeframeParseError(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub total_usage_kwh: f64,
    pub total_usage_change_percent: f64,
    pub current_power_kw: f64,
    pub current_power_change_kw: f64,
    pub monthly_cost_usd: f64,
    pub monthly_cost_change_usd: f64,
    pub carbon_footprint_kg: f64,
    pub carbon_footprint_change_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewDay {
    pub day: String,
    pub usage_kwh: f64,
    pub average_kwh: f64,
}

impl OverviewDay {
    pub fn new(day: impl Into<String>, usage_kwh: f64, average_kwh: f64) -> Self {
        Self {
            day: day.into(),
            usage_kwh,
            average_kwh,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUsage {
    pub device: String,
    pub usage_kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceBreakdown {
    pub timeframe: Timeframe,
    pub total_kwh: f64,
    pub devices: Vec<DeviceUsage>,
}

// Samples are weekly totals; other timeframes rescale by day count.
pub fn device_breakdown(weekly: &[DeviceUsage], timeframe: Timeframe) -> DeviceBreakdown {
    let devices: Vec<DeviceUsage> = weekly
        .iter()
        .map(|sample| DeviceUsage {
            device: sample.device.clone(),
            usage_kwh: sample.usage_kwh * timeframe.days() / DAYS_PER_WEEK,
        })
        .collect();
    let total_kwh = devices.iter().map(|device| device.usage_kwh).sum();

    DeviceBreakdown {
        timeframe,
        total_kwh,
        devices,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Alert,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub id: u32,
    pub device: String,
    pub event: String,
    pub kind: ActivityKind,
    pub occurred_at: DateTime<Utc>,
    pub change_kw: f64,
    pub direction: PowerDirection,
}

impl ActivityEvent {
    pub fn new(
        id: u32,
        device: impl Into<String>,
        event: impl Into<String>,
        kind: ActivityKind,
        occurred_at: DateTime<Utc>,
        change_kw: f64,
    ) -> Self {
        let direction = if change_kw >= 0.0 {
            PowerDirection::Up
        } else {
            PowerDirection::Down
        };

        Self {
            id,
            device: device.into(),
            event: event.into(),
            kind,
            occurred_at,
            change_kw,
            direction,
        }
    }
}
