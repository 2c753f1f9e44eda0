//! Error types for task ingestion and the ranking pipeline.

use thiserror::Error;

/// Result type for taskrank library operations.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Batch-level failures. Any of these rejects the whole batch; there is no
/// partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    /// The input document could not be decoded into a task batch.
    #[error("Failed to parse {format} task input: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// A required field is absent from a task record.
    #[error(
        "Task {task} is missing '{field}'. Each task must have title, due_date, estimated_hours, and importance"
    )]
    MissingField { task: String, field: &'static str },

    /// A due date is not an ISO-8601 calendar date.
    #[error("Invalid date format for task {task}: '{value}'. Use YYYY-MM-DD format.")]
    MalformedDate { task: String, value: String },

    #[error("Task {task} has importance {value}. Importance must be between 1 and 10")]
    OutOfRangeImportance { task: String, value: i64 },

    #[error("Task {task} has estimated_hours {value}. Estimated hours must be positive")]
    NonPositiveEffort { task: String, value: f64 },

    /// The dependency graph of the batch contains a cycle.
    #[error("Circular dependencies detected in tasks")]
    CircularDependency,
}
