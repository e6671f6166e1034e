use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::alert::{AlertFilter, AlertId, AlertRecord};
use crate::domain::alert_store::{AlertStore, AlertSummary};
use crate::domain::budget::{BudgetDay, BudgetError, BudgetSettings, DailyUsage};
use crate::domain::demo_data::{demo_activity, demo_device_usage, demo_overview, demo_stats};
use crate::domain::usage::{
    ActivityEvent, DeviceBreakdown, DeviceUsage, OverviewDay, Timeframe, UsageStats,
    device_breakdown,
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("state lock poisoned")]
    LockPoisoned,
    #[error("invalid budget settings: {0}")]
    Budget(#[from] BudgetError),
}

pub trait AlertQueryHandler {
    fn list_alerts(&self, filter: AlertFilter) -> Result<Vec<AlertRecord>, ServiceError>;
    fn get_alert(&self, id: &AlertId) -> Result<Option<AlertRecord>, ServiceError>;
    fn alert_summary(&self) -> Result<AlertSummary, ServiceError>;
}

pub trait AlertCommandHandler {
    fn mark_read(&self, id: &AlertId) -> Result<(), ServiceError>;
    fn mark_all_read(&self) -> Result<(), ServiceError>;
    fn dismiss(&self, id: &AlertId) -> Result<(), ServiceError>;
}

pub trait BudgetHandler {
    fn budget_settings(&self) -> Result<BudgetSettings, ServiceError>;
    fn update_budget_settings(
        &self,
        settings: BudgetSettings,
    ) -> Result<BudgetSettings, ServiceError>;
    fn set_daily_budget(&self, daily_kwh: f64) -> Result<BudgetSettings, ServiceError>;
    fn set_monthly_budget(&self, monthly_kwh: f64) -> Result<BudgetSettings, ServiceError>;
    fn evaluate_usage(&self) -> Result<Vec<BudgetDay>, ServiceError>;
}

pub trait DashboardQueryHandler {
    fn usage_stats(&self) -> UsageStats;
    fn usage_overview(&self) -> Vec<OverviewDay>;
    fn device_usage(&self, timeframe: Timeframe) -> DeviceBreakdown;
    fn recent_activity(&self) -> Vec<ActivityEvent>;
}

#[derive(Clone)]
pub struct InMemoryAlertService {
    store: Arc<Mutex<AlertStore>>,
}

impl InMemoryAlertService {
    pub fn new(store: AlertStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn with_store<T>(&self, op: impl FnOnce(&mut AlertStore) -> T) -> Result<T, ServiceError> {
        let mut store = self.store.lock().map_err(|_| ServiceError::LockPoisoned)?;
        Ok(op(&mut store))
    }
}

impl AlertQueryHandler for InMemoryAlertService {
    fn list_alerts(&self, filter: AlertFilter) -> Result<Vec<AlertRecord>, ServiceError> {
        self.with_store(|store| store.list(filter))
    }

    fn get_alert(&self, id: &AlertId) -> Result<Option<AlertRecord>, ServiceError> {
        self.with_store(|store| store.get(id).cloned())
    }

    fn alert_summary(&self) -> Result<AlertSummary, ServiceError> {
        self.with_store(|store| store.summary())
    }
}

impl AlertCommandHandler for InMemoryAlertService {
    fn mark_read(&self, id: &AlertId) -> Result<(), ServiceError> {
        self.with_store(|store| store.mark_read(id))?;
        tracing::debug!(alert_id = %id, "alert marked read");
        Ok(())
    }

    fn mark_all_read(&self) -> Result<(), ServiceError> {
        let count = self.with_store(|store| {
            let unread = store.unread_count();
            store.mark_all_read();
            unread
        })?;
        tracing::info!(marked = count, "all alerts marked read");
        Ok(())
    }

    fn dismiss(&self, id: &AlertId) -> Result<(), ServiceError> {
        let removed = self.with_store(|store| store.dismiss(id))?;
        if removed {
            tracing::info!(alert_id = %id, "alert dismissed");
        } else {
            tracing::debug!(alert_id = %id, "dismiss ignored for unknown alert");
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryBudgetService {
    settings: Arc<Mutex<BudgetSettings>>,
    usage: Arc<Vec<DailyUsage>>,
}

impl InMemoryBudgetService {
    pub fn new(settings: BudgetSettings, usage: Vec<DailyUsage>) -> Self {
        Self {
            settings: Arc::new(Mutex::new(settings)),
            usage: Arc::new(usage),
        }
    }

    fn current(&self) -> Result<BudgetSettings, ServiceError> {
        self.settings
            .lock()
            .map(|settings| settings.clone())
            .map_err(|_| ServiceError::LockPoisoned)
    }

    fn replace(
        &self,
        update: impl FnOnce(BudgetSettings) -> BudgetSettings,
    ) -> Result<BudgetSettings, ServiceError> {
        let mut current = self
            .settings
            .lock()
            .map_err(|_| ServiceError::LockPoisoned)?;
        let candidate = update(current.clone());
        candidate.validate()?;
        *current = candidate.clone();

        tracing::info!(
            daily_budget_kwh = candidate.daily_budget_kwh,
            monthly_budget_kwh = candidate.monthly_budget_kwh,
            alert_threshold_percent = candidate.alert_threshold_percent,
            email_alerts = candidate.email_alerts,
            push_notifications = candidate.push_notifications,
            "budget settings updated"
        );
        Ok(candidate)
    }
}

impl BudgetHandler for InMemoryBudgetService {
    fn budget_settings(&self) -> Result<BudgetSettings, ServiceError> {
        self.current()
    }

    fn update_budget_settings(
        &self,
        settings: BudgetSettings,
    ) -> Result<BudgetSettings, ServiceError> {
        self.replace(|_| settings.linked())
    }

    fn set_daily_budget(&self, daily_kwh: f64) -> Result<BudgetSettings, ServiceError> {
        self.replace(|current| current.with_daily_budget(daily_kwh))
    }

    fn set_monthly_budget(&self, monthly_kwh: f64) -> Result<BudgetSettings, ServiceError> {
        self.replace(|current| current.with_monthly_budget(monthly_kwh))
    }

    fn evaluate_usage(&self) -> Result<Vec<BudgetDay>, ServiceError> {
        Ok(self.current()?.evaluate(&self.usage))
    }
}

#[derive(Debug, Clone)]
pub struct DashboardData {
    pub stats: UsageStats,
    pub overview: Vec<OverviewDay>,
    pub weekly_devices: Vec<DeviceUsage>,
    pub activity: Vec<ActivityEvent>,
}

impl DashboardData {
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            stats: demo_stats(),
            overview: demo_overview(),
            weekly_devices: demo_device_usage(),
            activity: demo_activity(now),
        }
    }
}

#[derive(Clone)]
pub struct StaticDashboardService {
    data: Arc<DashboardData>,
}

impl StaticDashboardService {
    pub fn new(data: DashboardData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }
}

impl DashboardQueryHandler for StaticDashboardService {
    fn usage_stats(&self) -> UsageStats {
        self.data.stats
    }

    fn usage_overview(&self) -> Vec<OverviewDay> {
        self.data.overview.clone()
    }

    fn device_usage(&self, timeframe: Timeframe) -> DeviceBreakdown {
        device_breakdown(&self.data.weekly_devices, timeframe)
    }

    fn recent_activity(&self) -> Vec<ActivityEvent> {
        self.data.activity.clone()
    }
}
