//! Weighted priority score, explanation text and ranking.

use chrono::NaiveDate;
use serde::Serialize;

use super::factors::{dependency_score, effort_score, importance_score, urgency_score};
use super::strategy::{Strategy, Weights};
use crate::core::{ScoredTask, Task, TaskNode};

/// The four normalized factor values of one task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorScores {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl FactorScores {
    pub fn weighted_total(&self, weights: &Weights) -> f64 {
        self.urgency * weights.urgency
            + self.importance * weights.importance
            + self.effort * weights.effort
            + self.dependency * weights.dependency
    }
}

/// Total score (rounded to 3 decimals) plus a human readable explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityScore {
    pub total: f64,
    pub explanation: String,
    pub factors: FactorScores,
}

/// Coarse priority bucket used by the text renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityBand {
    High,
    Medium,
    Low,
}

impl PriorityBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            PriorityBand::High
        } else if score >= 0.4 {
            PriorityBand::Medium
        } else {
            PriorityBand::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriorityBand::High => "high",
            PriorityBand::Medium => "medium",
            PriorityBand::Low => "low",
        }
    }
}

/// Weighted scorer bound to one strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskScorer {
    strategy: Strategy,
}

impl TaskScorer {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn weights(&self) -> Weights {
        self.strategy.weights()
    }

    /// Raw factor values of `task`; `all_tasks` feeds the dependency factor.
    pub fn factor_scores<T: TaskNode>(
        &self,
        task: &Task,
        all_tasks: &[T],
        today: NaiveDate,
    ) -> FactorScores {
        FactorScores {
            urgency: urgency_score(task.due_date, today),
            importance: importance_score(task.importance),
            effort: effort_score(task.estimated_hours),
            dependency: dependency_score(&task.dependencies, all_tasks),
        }
    }

    pub fn score<T: TaskNode>(&self, task: &Task, all_tasks: &[T], today: NaiveDate) -> PriorityScore {
        let factors = self.factor_scores(task, all_tasks, today);
        let total = round_to_millis(factors.weighted_total(&self.weights()));

        PriorityScore {
            total,
            explanation: explain(&factors, total),
            factors,
        }
    }
}

/// Builds `"Priority due to: <tags> (score: 0.000)"`.
///
/// Each factor contributes a tag when it is above 0.7 or below 0.3; when none
/// does the tag is "balanced factors".
pub fn explain(factors: &FactorScores, total: f64) -> String {
    let tags: [(f64, &str, &str); 4] = [
        (factors.urgency, "urgent deadline", "distant deadline"),
        (factors.importance, "high importance", "low importance"),
        (factors.effort, "quick task", "time-consuming"),
        (factors.dependency, "blocks other tasks", "no dependencies"),
    ];

    let mut reasons: Vec<&str> = tags
        .iter()
        .filter_map(|&(value, high, low)| {
            if value > 0.7 {
                Some(high)
            } else if value < 0.3 {
                Some(low)
            } else {
                None
            }
        })
        .collect();

    if reasons.is_empty() {
        reasons.push("balanced factors");
    }

    format!("Priority due to: {} (score: {:.3})", reasons.join(", "), total)
}

/// Scores every task against the whole batch, in input order.
pub fn score_all(
    tasks: &[Task],
    strategy: impl Into<Strategy>,
    today: NaiveDate,
) -> Vec<ScoredTask> {
    let scorer = TaskScorer::new(strategy.into());

    tasks
        .iter()
        .map(|task| {
            let PriorityScore {
                total, explanation, ..
            } = scorer.score(task, tasks, today);
            ScoredTask {
                task: task.clone(),
                priority_score: total,
                explanation,
            }
        })
        .collect()
}

/// Sorts by score, highest first. The sort is stable, so ties keep input order.
pub fn rank(scored: &mut [ScoredTask]) {
    scored.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
}

/// Rounds the stored binary value to 3 decimals. Scaling by 1000 first can
/// land exactly on a half (0.63749999... becomes 637.5) and round the wrong
/// way; decimal formatting works on the exact value instead.
fn round_to_millis(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}
