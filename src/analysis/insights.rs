//! Workload summary over a task batch.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::Task;

/// More urgent tasks than this triggers the reprioritization advice.
const URGENT_OVERLOAD: usize = 3;
/// Total hours above this count as a high intensity workload.
const HIGH_INTENSITY_HOURS: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightOptions {
    pub urgent_within_days: i64,
    pub high_importance_threshold: i32,
    pub workday_hours: f64,
}

impl Default for InsightOptions {
    fn default() -> Self {
        Self {
            urgent_within_days: 3,
            high_importance_threshold: 8,
            workday_hours: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intensity {
    High,
    Moderate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadInsights {
    pub total_tasks: usize,
    pub total_hours: f64,
    pub average_importance: f64,
    pub urgent_tasks: usize,
    pub high_importance_tasks: usize,
    pub estimated_days: f64,
    pub intensity: Intensity,
    pub focus_advice: String,
}

pub fn workload_insights(
    tasks: &[Task],
    today: NaiveDate,
    options: &InsightOptions,
) -> WorkloadInsights {
    let total_hours: f64 = tasks.iter().map(|t| t.estimated_hours).sum();
    let average_importance = if tasks.is_empty() {
        0.0
    } else {
        tasks.iter().map(|t| f64::from(t.importance)).sum::<f64>() / tasks.len() as f64
    };

    let urgent_tasks = tasks
        .iter()
        .filter(|t| t.days_until_due(today) <= options.urgent_within_days)
        .count();
    let high_importance_tasks = tasks
        .iter()
        .filter(|t| t.importance >= options.high_importance_threshold)
        .count();

    let intensity = if total_hours > HIGH_INTENSITY_HOURS {
        Intensity::High
    } else {
        Intensity::Moderate
    };

    let focus_advice = if urgent_tasks > URGENT_OVERLOAD {
        "Too many urgent tasks! Consider delegating or reprioritizing."
    } else {
        "Good balance of urgent vs important tasks."
    };

    WorkloadInsights {
        total_tasks: tasks.len(),
        total_hours,
        average_importance: round_to_tenths(average_importance),
        urgent_tasks,
        high_importance_tasks,
        estimated_days: round_to_tenths(total_hours / options.workday_hours),
        intensity,
        focus_advice: focus_advice.to_string(),
    }
}

fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
