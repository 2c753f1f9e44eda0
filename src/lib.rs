pub mod analysis;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod report;
pub mod runner;
pub mod scoring;

// Re-export key items for convenience
pub use analysis::{build_graph, detect_cycle};
pub use config::{OutputFormat, TaskrankConfig};
pub use crate::core::{ScoredTask, Task, TaskBatch, TaskNode};
pub use error::TaskError;
pub use report::Report;
pub use runner::{Command, build_report, read_batch, run};
pub use scoring::{Strategy, score_all};
