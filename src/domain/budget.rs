use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DAYS_PER_MONTH: f64 = 30.0;
pub const MIN_DAILY_BUDGET_KWH: f64 = 1.0;
pub const MIN_MONTHLY_BUDGET_KWH: f64 = 30.0;
pub const MIN_ALERT_THRESHOLD_PERCENT: u8 = 50;
pub const MAX_ALERT_THRESHOLD_PERCENT: u8 = 100;

#[derive(Debug, Error, PartialEq)]
pub enum BudgetError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("daily budget must be at least 1 kWh")]
    DailyBelowMinimum,
    #[error("monthly budget must be at least 30 kWh")]
    MonthlyBelowMinimum,
    #[error("alert threshold must be between 50 and 100 percent, got {0}")]
    ThresholdOutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSettings {
    pub daily_budget_kwh: f64,
    pub monthly_budget_kwh: f64,
    pub alert_threshold_percent: u8,
    pub email_alerts: bool,
    pub push_notifications: bool,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            daily_budget_kwh: 8.0,
            monthly_budget_kwh: 240.0,
            alert_threshold_percent: 80,
            email_alerts: false,
            push_notifications: true,
        }
    }
}

impl BudgetSettings {
    pub fn validate(&self) -> Result<(), BudgetError> {
        if !self.daily_budget_kwh.is_finite() {
            return Err(BudgetError::NotFinite {
                field: "dailyBudgetKwh",
            });
        }
        if !self.monthly_budget_kwh.is_finite() {
            return Err(BudgetError::NotFinite {
                field: "monthlyBudgetKwh",
            });
        }
        if self.daily_budget_kwh < MIN_DAILY_BUDGET_KWH {
            return Err(BudgetError::DailyBelowMinimum);
        }
        if self.monthly_budget_kwh < MIN_MONTHLY_BUDGET_KWH {
            return Err(BudgetError::MonthlyBelowMinimum);
        }
        if !(MIN_ALERT_THRESHOLD_PERCENT..=MAX_ALERT_THRESHOLD_PERCENT)
            .contains(&self.alert_threshold_percent)
        {
            return Err(BudgetError::ThresholdOutOfRange(
                self.alert_threshold_percent,
            ));
        }

        Ok(())
    }

    pub fn with_daily_budget(mut self, daily_kwh: f64) -> Self {
        self.daily_budget_kwh = daily_kwh;
        self.monthly_budget_kwh = daily_kwh * DAYS_PER_MONTH;
        self
    }

    pub fn with_monthly_budget(mut self, monthly_kwh: f64) -> Self {
        self.monthly_budget_kwh = monthly_kwh;
        self.daily_budget_kwh = monthly_kwh / DAYS_PER_MONTH;
        self
    }

    pub fn linked(self) -> Self {
        let daily_kwh = self.daily_budget_kwh;
        self.with_daily_budget(daily_kwh)
    }

    pub fn threshold_kwh(&self) -> f64 {
        self.daily_budget_kwh * f64::from(self.alert_threshold_percent) / 100.0
    }

    pub fn evaluate(&self, samples: &[DailyUsage]) -> Vec<BudgetDay> {
        let threshold = self.threshold_kwh();

        samples
            .iter()
            .map(|sample| {
                let status = if sample.usage_kwh > self.daily_budget_kwh {
                    BudgetStatus::OverBudget
                } else if sample.usage_kwh >= threshold {
                    BudgetStatus::ThresholdReached
                } else {
                    BudgetStatus::UnderThreshold
                };

                BudgetDay {
                    day: sample.day,
                    usage_kwh: sample.usage_kwh,
                    budget_kwh: self.daily_budget_kwh,
                    status,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyUsage {
    pub day: u32,
    pub usage_kwh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetStatus {
    UnderThreshold,
    ThresholdReached,
    OverBudget,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDay {
    pub day: u32,
    pub usage_kwh: f64,
    pub budget_kwh: f64,
    pub status: BudgetStatus,
}
