//! Decoding task batches and validating records into [`Task`]s.
//!
//! Validation is fail-fast: the first bad record rejects the batch. Checks run
//! in a fixed order per record: required fields, due date, importance range,
//! estimated hours.

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use super::types::{Task, TaskBatch, TaskRecord};
use crate::error::{Result, TaskError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serialization format of a task batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Json,
    Yaml,
    /// Envelope form only (`strategy = ...` plus `[[tasks]]` tables)
    Toml,
}

impl InputFormat {
    /// Picks a format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            Some("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InputFormat::Json => "JSON",
            InputFormat::Yaml => "YAML",
            InputFormat::Toml => "TOML",
        }
    }
}

/// Decodes a task batch without validating the records.
pub fn parse_batch(content: &str, format: InputFormat) -> Result<TaskBatch> {
    let parsed = match format {
        InputFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        InputFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| TaskError::Parse {
        format: format.name(),
        message: format!("expected a list of tasks ({})", message.trim()),
    })
}

/// Validates every record, rejecting the batch on the first failure.
pub fn validate_batch(records: Vec<TaskRecord>) -> Result<Vec<Task>> {
    let tasks = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| validate_record(record, index + 1))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = tasks.len(), "validated task batch");
    Ok(tasks)
}

/// Validates one record. `position` is 1-based and becomes the id of records
/// that carry none.
pub fn validate_record(record: TaskRecord, position: usize) -> Result<Task> {
    let TaskRecord {
        id,
        title,
        due_date,
        estimated_hours,
        importance,
        dependencies,
    } = record;

    let id = id.map(String::from).unwrap_or_else(|| position.to_string());
    let label = || id.clone();

    let title = title.ok_or_else(|| missing(label(), "title"))?;
    let due_date = due_date.ok_or_else(|| missing(label(), "due_date"))?;
    let estimated_hours = estimated_hours.ok_or_else(|| missing(label(), "estimated_hours"))?;
    let importance = importance.ok_or_else(|| missing(label(), "importance"))?;

    let due_date = parse_due_date(&id, &due_date)?;

    if !(1..=10).contains(&importance) {
        return Err(TaskError::OutOfRangeImportance {
            task: label(),
            value: importance,
        });
    }

    if estimated_hours.is_nan() || estimated_hours <= 0.0 {
        return Err(TaskError::NonPositiveEffort {
            task: label(),
            value: estimated_hours,
        });
    }

    Ok(Task {
        id,
        title,
        due_date,
        estimated_hours,
        importance: importance as i32,
        dependencies: dependencies.into_iter().map(String::from).collect(),
    })
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// chrono's `%Y-%m-%d` also takes unpadded fields, leading whitespace and a
/// sign, so the shape is checked first.
pub fn parse_due_date(task: &str, value: &str) -> Result<NaiveDate> {
    let malformed = || TaskError::MalformedDate {
        task: task.to_string(),
        value: value.to_string(),
    };

    if !has_iso_date_shape(value) {
        return Err(malformed());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| malformed())
}

/// Exactly `dddd-dd-dd`.
fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn missing(task: String, field: &'static str) -> TaskError {
    TaskError::MissingField { task, field }
}
