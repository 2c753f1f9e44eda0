//! Top-N "work on this today" suggestions.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::ScoredTask;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub rank: usize,
    /// Task title
    pub task: String,
    pub priority_score: f64,
    pub reason: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub importance: i32,
}

/// Takes the first `limit` entries of an already ranked list.
pub fn suggest(ranked: &[ScoredTask], limit: usize) -> Vec<Suggestion> {
    ranked
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, entry)| Suggestion {
            rank: i + 1,
            task: entry.task.title.clone(),
            priority_score: entry.priority_score,
            reason: entry.explanation.clone(),
            due_date: entry.task.due_date,
            estimated_hours: entry.task.estimated_hours,
            importance: entry.task.importance,
        })
        .collect()
}
