use chrono::{DateTime, Duration, Utc};

use crate::domain::alert::{AlertCategory, AlertRecord};
use crate::domain::budget::DailyUsage;
use crate::domain::usage::{ActivityEvent, ActivityKind, DeviceUsage, OverviewDay, UsageStats};

const USAGE_KWH: [f64; 15] = [
    6.2, 7.1, 6.5, 5.8, 8.2, 7.5, 6.9, 7.3, 8.1, 7.8, 6.5, 5.9, 6.7, 7.2, 8.0,
];

const WEEKLY_DEVICE_KWH: [(&str, f64); 8] = [
    ("HVAC", 12.5),
    ("Water Heater", 8.2),
    ("Refrigerator", 5.7),
    ("Washer/Dryer", 4.3),
    ("Lighting", 3.8),
    ("TV & Electronics", 3.2),
    ("Dishwasher", 2.1),
    ("Other", 5.4),
];

pub fn demo_alerts(now: DateTime<Utc>) -> Vec<AlertRecord> {
    vec![
        AlertRecord::new(
            "1",
            AlertCategory::Warning,
            "High Energy Usage",
            "Your HVAC system is consuming more energy than usual.",
            "HVAC",
            now - Duration::minutes(37),
        ),
        AlertRecord::new(
            "2",
            AlertCategory::Warning,
            "Budget Threshold Reached",
            "You've reached 80% of your daily energy budget.",
            "Whole Home",
            now - Duration::minutes(105),
        ),
        AlertRecord::new(
            "3",
            AlertCategory::Info,
            "Energy Saving Opportunity",
            "Your refrigerator door was left open for 5 minutes.",
            "Refrigerator",
            now - Duration::hours(14),
        )
        .read(),
        AlertRecord::new(
            "4",
            AlertCategory::Success,
            "Energy Saving Achievement",
            "You've reduced your energy consumption by 15% this week!",
            "Whole Home",
            now - Duration::hours(22),
        )
        .read(),
        AlertRecord::new(
            "5",
            AlertCategory::Info,
            "Device Maintenance",
            "Your HVAC filter needs to be replaced soon.",
            "HVAC",
            now - Duration::days(2),
        )
        .read(),
    ]
}

pub fn demo_usage() -> Vec<DailyUsage> {
    USAGE_KWH
        .iter()
        .zip(1_u32..)
        .map(|(usage_kwh, day)| DailyUsage {
            day,
            usage_kwh: *usage_kwh,
        })
        .collect()
}

pub fn demo_stats() -> UsageStats {
    UsageStats {
        total_usage_kwh: 45.2,
        total_usage_change_percent: 2.5,
        current_power_kw: 2.4,
        current_power_change_kw: -0.3,
        monthly_cost_usd: 128.5,
        monthly_cost_change_usd: 12.4,
        carbon_footprint_kg: 24.5,
        carbon_footprint_change_kg: -2.1,
    }
}

pub fn demo_overview() -> Vec<OverviewDay> {
    vec![
        OverviewDay::new("Mon", 6.2, 5.8),
        OverviewDay::new("Tue", 7.1, 5.9),
        OverviewDay::new("Wed", 6.5, 6.0),
        OverviewDay::new("Thu", 5.8, 5.9),
        OverviewDay::new("Fri", 8.2, 6.1),
        OverviewDay::new("Sat", 7.5, 6.2),
        OverviewDay::new("Sun", 6.9, 6.0),
    ]
}

pub fn demo_device_usage() -> Vec<DeviceUsage> {
    WEEKLY_DEVICE_KWH
        .iter()
        .map(|(device, usage_kwh)| DeviceUsage {
            device: (*device).to_string(),
            usage_kwh: *usage_kwh,
        })
        .collect()
}

pub fn demo_activity(now: DateTime<Utc>) -> Vec<ActivityEvent> {
    vec![
        ActivityEvent::new(
            1,
            "HVAC",
            "High usage detected",
            ActivityKind::Alert,
            now - Duration::minutes(10),
            1.2,
        ),
        ActivityEvent::new(
            2,
            "Smart Thermostat",
            "Temperature adjusted",
            ActivityKind::Info,
            now - Duration::minutes(25),
            -0.4,
        ),
        ActivityEvent::new(
            3,
            "Washer",
            "Cycle completed",
            ActivityKind::Success,
            now - Duration::hours(1),
            -0.8,
        ),
        ActivityEvent::new(
            4,
            "EV Charger",
            "Charging started",
            ActivityKind::Info,
            now - Duration::hours(2),
            7.2,
        ),
        ActivityEvent::new(
            5,
            "Solar Panels",
            "Peak production",
            ActivityKind::Success,
            now - Duration::hours(3),
            -4.5,
        ),
    ]
}
