use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::domain::alert::{AlertCategory, AlertFilter, AlertId, AlertRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate alert id in seed: {0}")]
    DuplicateId(AlertId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub total: usize,
    pub unread: usize,
    pub warning: usize,
    pub info: usize,
    pub success: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AlertStore {
    alerts: Vec<AlertRecord>,
}

impl AlertStore {
    pub fn new(seed: Vec<AlertRecord>) -> Result<Self, ValidationError> {
        {
            let mut seen = HashSet::with_capacity(seed.len());
            for alert in &seed {
                if !seen.insert(&alert.id) {
                    return Err(ValidationError::DuplicateId(alert.id.clone()));
                }
            }
        }

        Ok(Self { alerts: seed })
    }

    pub fn list(&self, filter: AlertFilter) -> Vec<AlertRecord> {
        self.alerts
            .iter()
            .filter(|alert| filter.matches(alert))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &AlertId) -> Option<&AlertRecord> {
        self.alerts.iter().find(|alert| &alert.id == id)
    }

    pub fn mark_read(&mut self, id: &AlertId) {
        if let Some(alert) = self.alerts.iter_mut().find(|alert| &alert.id == id) {
            alert.is_read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for alert in &mut self.alerts {
            alert.is_read = true;
        }
    }

    pub fn dismiss(&mut self, id: &AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| &alert.id != id);
        self.alerts.len() != before
    }

    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|alert| !alert.is_read).count()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn summary(&self) -> AlertSummary {
        self.alerts
            .iter()
            .fold(AlertSummary::default(), |mut summary, alert| {
                summary.total += 1;
                if !alert.is_read {
                    summary.unread += 1;
                }
                match alert.category {
                    AlertCategory::Warning => summary.warning += 1,
                    AlertCategory::Info => summary.info += 1,
                    AlertCategory::Success => summary.success += 1,
                }
                summary
            })
    }
}
