//! Batch analyses built on top of the scorer
//!
//! - `cycles` - dependency cycle detection
//! - `graph` - node/link graph for visualization
//! - `plan` - dependency-respecting work order
//! - `matrix` - Eisenhower quadrants
//! - `insights` - workload summary
//! - `suggest` - top-N suggestions

pub mod cycles;
pub mod graph;
pub mod insights;
pub mod matrix;
pub mod plan;
pub mod suggest;

pub use cycles::detect_cycle;
pub use graph::{DependencyGraphData, GraphLink, GraphNode, LinkKind, build_graph};
pub use insights::{InsightOptions, Intensity, WorkloadInsights, workload_insights};
pub use matrix::{EisenhowerMatrix, MatrixReport, MatrixThresholds, Quadrant, eisenhower_matrix};
pub use plan::{PlanStep, plan_order};
pub use suggest::{Suggestion, suggest};
