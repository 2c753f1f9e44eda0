//! Priority scoring engine
//!
//! - `factors` - urgency, importance, effort and dependency heuristics
//! - `strategy` - named weight presets
//! - `scorer` - weighted total, explanation and ranking

pub mod factors;
pub mod scorer;
pub mod strategy;

pub use factors::{dependency_score, effort_score, importance_score, urgency_score};
pub use scorer::{FactorScores, PriorityBand, PriorityScore, TaskScorer, explain, rank, score_all};
pub use strategy::{Strategy, Weights};

/// The current local calendar date, used wherever a caller supplies no
/// explicit "today".
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
