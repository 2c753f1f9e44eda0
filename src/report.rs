//! Report types produced by the pipeline, one per CLI command.
//!
//! The builders here take validated tasks and apply the batch-level rules:
//! commands that score tasks reject cyclic batches before scoring anything.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::{
    DependencyGraphData, InsightOptions, MatrixReport, MatrixThresholds, PlanStep, Suggestion,
    WorkloadInsights, build_graph, detect_cycle, eisenhower_matrix, plan_order, suggest,
    workload_insights,
};
use crate::core::{ScoredTask, Task};
use crate::error::{Result, TaskError};
use crate::scoring::{Strategy, rank, score_all};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub strategy_used: Strategy,
    pub tasks: Vec<ScoredTask>,
    pub total_tasks: usize,
}

impl AnalysisReport {
    /// Scores and ranks `tasks`, highest priority first.
    pub fn build(tasks: &[Task], strategy: Strategy, today: NaiveDate) -> Result<Self> {
        let ranked = ranked_tasks(tasks, strategy, today)?;
        Ok(Self {
            strategy_used: strategy,
            total_tasks: ranked.len(),
            tasks: ranked,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionReport {
    pub date: NaiveDate,
    pub suggestions: Vec<Suggestion>,
    pub strategy: Strategy,
}

impl SuggestionReport {
    pub fn build(tasks: &[Task], strategy: Strategy, today: NaiveDate, limit: usize) -> Result<Self> {
        let ranked = ranked_tasks(tasks, strategy, today)?;
        Ok(Self {
            date: today,
            suggestions: suggest(&ranked, limit),
            strategy,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphReport {
    pub graph: DependencyGraphData,
    pub has_circular_deps: bool,
}

impl GraphReport {
    /// Cycles are reported here, not rejected.
    pub fn build(tasks: &[Task]) -> Self {
        Self {
            graph: build_graph(tasks),
            has_circular_deps: detect_cycle(tasks),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub strategy_used: Strategy,
    pub steps: Vec<PlanStep>,
}

impl PlanReport {
    pub fn build(tasks: &[Task], strategy: Strategy, today: NaiveDate) -> Result<Self> {
        reject_cycles(tasks)?;
        let scored = score_all(tasks, strategy, today);
        Ok(Self {
            strategy_used: strategy,
            steps: plan_order(&scored),
        })
    }
}

/// Any report the CLI can render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Analysis(AnalysisReport),
    Suggestions(SuggestionReport),
    Matrix(MatrixReport),
    Graph(GraphReport),
    Plan(PlanReport),
    Insights(WorkloadInsights),
}

impl Report {
    pub fn matrix(tasks: &[Task], today: NaiveDate, thresholds: MatrixThresholds) -> Self {
        Report::Matrix(eisenhower_matrix(tasks, today, thresholds))
    }

    pub fn insights(tasks: &[Task], today: NaiveDate, options: &InsightOptions) -> Self {
        Report::Insights(workload_insights(tasks, today, options))
    }
}

fn reject_cycles(tasks: &[Task]) -> Result<()> {
    if detect_cycle(tasks) {
        return Err(TaskError::CircularDependency);
    }
    Ok(())
}

fn ranked_tasks(tasks: &[Task], strategy: Strategy, today: NaiveDate) -> Result<Vec<ScoredTask>> {
    reject_cycles(tasks)?;
    let mut scored = score_all(tasks, strategy, today);
    rank(&mut scored);
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("1", "Write docs", today() + Duration::days(20))
                .with_estimate(3.0)
                .with_importance(4),
            Task::new("2", "Fix critical bug", today() + Duration::days(1))
                .with_estimate(2.0)
                .with_importance(10),
            Task::new("3", "Complete proposal", today())
                .with_estimate(4.0)
                .with_importance(9)
                .with_dependencies(["1"]),
        ]
    }

    #[test]
    fn test_analysis_sorted_descending() {
        let report = AnalysisReport::build(&tasks(), Strategy::SmartBalance, today()).unwrap();
        assert_eq!(report.total_tasks, 3);
        assert_eq!(report.strategy_used, Strategy::SmartBalance);
        let scores: Vec<f64> = report.tasks.iter().map(|t| t.priority_score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(report.tasks[2].task.id, "1");
    }

    #[test]
    fn test_cyclic_batch_rejected_before_scoring() {
        let mut cyclic = tasks();
        cyclic[0].dependencies = vec!["3".to_string()];
        assert_eq!(
            AnalysisReport::build(&cyclic, Strategy::HighImpact, today()),
            Err(TaskError::CircularDependency)
        );
        assert_eq!(
            PlanReport::build(&cyclic, Strategy::HighImpact, today()),
            Err(TaskError::CircularDependency)
        );
        assert!(SuggestionReport::build(&cyclic, Strategy::HighImpact, today(), 3).is_err());
    }

    #[test]
    fn test_graph_report_flags_cycles() {
        let mut cyclic = tasks();
        cyclic[0].dependencies = vec!["3".to_string()];
        let report = GraphReport::build(&cyclic);
        assert!(report.has_circular_deps);
        assert_eq!(report.graph.links.len(), 2);
        assert!(!GraphReport::build(&tasks()).has_circular_deps);
    }

    #[test]
    fn test_suggestions_limit_and_date() {
        let report = SuggestionReport::build(&tasks(), Strategy::DeadlineDriven, today(), 2).unwrap();
        assert_eq!(report.date, today());
        assert_eq!(report.suggestions.len(), 2);
        assert_eq!(report.suggestions[0].rank, 1);
    }

    #[test]
    fn test_plan_puts_dependency_first() {
        let report = PlanReport::build(&tasks(), Strategy::SmartBalance, today()).unwrap();
        let position = |id: &str| report.steps.iter().position(|s| s.id == id).unwrap();
        assert!(position("1") < position("3"));
    }

    #[test]
    fn test_untagged_report_serializes_inner_shape() {
        let report = Report::Analysis(
            AnalysisReport::build(&tasks(), Strategy::FastestWins, today()).unwrap(),
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["strategy_used"], "fastest_wins");
        assert_eq!(value["total_tasks"], 3);
    }
}
