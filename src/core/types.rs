//! Core task types shared across taskrank modules

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Anything that has an id and a list of dependency ids.
///
/// Graph algorithms are written against this trait so they work on validated
/// [`Task`]s as well as on bare `(id, dependencies)` pairs.
pub trait TaskNode {
    fn node_id(&self) -> &str;
    fn dependency_ids(&self) -> impl Iterator<Item = &str>;
}

/// A validated task, ready for scoring and graph analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Serialized as `YYYY-MM-DD`
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    /// 1-10 scale once validated; the type itself does not enforce it
    pub importance: i32,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date,
            estimated_hours: 1.0,
            importance: 5,
            dependencies: Vec::new(),
        }
    }

    pub fn with_estimate(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    pub fn with_importance(mut self, importance: i32) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Signed number of whole days from `today` until the due date.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }
}

impl TaskNode for Task {
    fn node_id(&self) -> &str {
        &self.id
    }

    fn dependency_ids(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> TaskNode for (S, Vec<S>) {
    fn node_id(&self) -> &str {
        self.0.as_ref()
    }

    fn dependency_ids(&self) -> impl Iterator<Item = &str> {
        self.1.iter().map(|dep| dep.as_ref())
    }
}

/// A task with its derived priority attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub priority_score: f64,
    pub explanation: String,
}

/// Task id as it appears on the wire: either a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireId::Text(s) => f.write_str(s),
            WireId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

/// Unvalidated task record as decoded from input. Every field is optional so
/// that ingestion can report exactly which one is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskRecord {
    pub id: Option<WireId>,
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub estimated_hours: Option<f64>,
    pub importance: Option<i64>,
    #[serde(default)]
    pub dependencies: Vec<WireId>,
}

/// A decoded input document: a bare list of records, or an envelope that
/// also names a strategy.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskBatch {
    Envelope {
        #[serde(default)]
        strategy: Option<String>,
        tasks: Vec<TaskRecord>,
    },
    List(Vec<TaskRecord>),
}

impl TaskBatch {
    pub fn strategy(&self) -> Option<&str> {
        match self {
            TaskBatch::Envelope { strategy, .. } => strategy.as_deref(),
            TaskBatch::List(_) => None,
        }
    }

    pub fn into_records(self) -> Vec<TaskRecord> {
        match self {
            TaskBatch::Envelope { tasks, .. } => tasks,
            TaskBatch::List(tasks) => tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_due_is_signed() {
        let task = Task::new("1", "Ship", date(2025, 3, 10));
        assert_eq!(task.days_until_due(date(2025, 3, 7)), 3);
        assert_eq!(task.days_until_due(date(2025, 3, 12)), -2);
    }

    #[test]
    fn test_scored_task_flattens_task_fields() {
        let scored = ScoredTask {
            task: Task::new("a", "Write docs", date(2025, 1, 31)).with_dependencies(["b"]),
            priority_score: 0.612,
            explanation: "Priority due to: balanced factors (score: 0.612)".to_string(),
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "a");
        assert_eq!(value["due_date"], "2025-01-31");
        assert_eq!(value["dependencies"][0], "b");
        assert_eq!(value["priority_score"], 0.612);
    }

    #[test]
    fn test_wire_ids_accept_numbers_and_strings() {
        let record: TaskRecord =
            serde_json::from_str(r#"{"id": 4, "dependencies": [1, "x"]}"#).unwrap();
        assert_eq!(record.id.map(String::from), Some("4".to_string()));
        let deps: Vec<String> = record.dependencies.into_iter().map(String::from).collect();
        assert_eq!(deps, vec!["1", "x"]);
    }

    #[test]
    fn test_batch_envelope_and_list() {
        let list: TaskBatch = serde_json::from_str(r#"[{"title": "a"}]"#).unwrap();
        assert_eq!(list.strategy(), None);
        assert_eq!(list.into_records().len(), 1);

        let envelope: TaskBatch =
            serde_json::from_str(r#"{"strategy": "high_impact", "tasks": []}"#).unwrap();
        assert_eq!(envelope.strategy(), Some("high_impact"));
        assert!(envelope.into_records().is_empty());
    }

    #[test]
    fn test_tuple_task_node() {
        let node = ("a", vec!["b", "c"]);
        assert_eq!(node.node_id(), "a");
        assert_eq!(node.dependency_ids().collect::<Vec<_>>(), vec!["b", "c"]);
    }
}
