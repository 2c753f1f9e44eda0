//! Plain text output format for taskrank

use anyhow::Result;
use std::io::Write;

use super::Formatter;
use crate::analysis::{MatrixReport, Quadrant, WorkloadInsights};
use crate::report::{AnalysisReport, GraphReport, PlanReport, SuggestionReport};
use crate::scoring::PriorityBand;

pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn write_analysis(&mut self, output: &mut dyn Write, report: &AnalysisReport) -> Result<()> {
        writeln!(
            output,
            "=== TASK PRIORITIES ({}, {} tasks) ===",
            report.strategy_used, report.total_tasks
        )?;
        for (i, entry) in report.tasks.iter().enumerate() {
            writeln!(
                output,
                "{:>3}. [{:.3} {:<6}] {}",
                i + 1,
                entry.priority_score,
                PriorityBand::from_score(entry.priority_score).label(),
                entry.task.title
            )?;
            writeln!(output, "     {}", entry.explanation)?;
        }
        Ok(())
    }

    fn write_suggestions(
        &mut self,
        output: &mut dyn Write,
        report: &SuggestionReport,
    ) -> Result<()> {
        writeln!(
            output,
            "=== SUGGESTIONS FOR {} ({}) ===",
            report.date, report.strategy
        )?;
        for s in &report.suggestions {
            writeln!(output, "{}. {} ({:.3})", s.rank, s.task, s.priority_score)?;
            writeln!(output, "   {}", s.reason)?;
        }
        Ok(())
    }

    fn write_matrix(&mut self, output: &mut dyn Write, report: &MatrixReport) -> Result<()> {
        writeln!(output, "=== EISENHOWER MATRIX ===")?;
        for quadrant in Quadrant::ALL {
            let tasks = report.matrix.quadrant(quadrant);
            writeln!(output, "--- {} ({}) ---", quadrant.title(), tasks.len())?;
            for task in tasks {
                writeln!(output, "- {}", task.title)?;
            }
        }
        Ok(())
    }

    fn write_graph(&mut self, output: &mut dyn Write, report: &GraphReport) -> Result<()> {
        writeln!(output, "=== DEPENDENCY GRAPH ===")?;
        for node in &report.graph.nodes {
            writeln!(
                output,
                "{} \"{}\" (importance {}, due {})",
                node.id, node.name, node.importance, node.due_date
            )?;
        }
        writeln!(output, "--- LINKS ---")?;
        for link in &report.graph.links {
            writeln!(output, "{} -> {}", link.source, link.target)?;
        }
        if report.has_circular_deps {
            writeln!(output, "WARNING: circular dependencies detected")?;
        }
        Ok(())
    }

    fn write_plan(&mut self, output: &mut dyn Write, report: &PlanReport) -> Result<()> {
        writeln!(output, "=== WORK PLAN ({}) ===", report.strategy_used)?;
        for step in &report.steps {
            writeln!(
                output,
                "{:>3}. {} [{}] ({:.3})",
                step.step, step.title, step.id, step.priority_score
            )?;
        }
        Ok(())
    }

    fn write_insights(
        &mut self,
        output: &mut dyn Write,
        insights: &WorkloadInsights,
    ) -> Result<()> {
        writeln!(output, "=== WORKLOAD ===")?;
        writeln!(output, "Tasks: {}", insights.total_tasks)?;
        writeln!(
            output,
            "Total hours: {} (~{} days)",
            insights.total_hours, insights.estimated_days
        )?;
        writeln!(output, "Average importance: {}", insights.average_importance)?;
        writeln!(output, "Urgent: {}", insights.urgent_tasks)?;
        writeln!(output, "High importance: {}", insights.high_importance_tasks)?;
        writeln!(output, "Intensity: {:?}", insights.intensity)?;
        writeln!(output, "{}", insights.focus_advice)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{MatrixThresholds, eisenhower_matrix};
    use crate::core::Task;
    use chrono::NaiveDate;

    #[test]
    fn test_plain_graph() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let tasks = vec![
            Task::new("1", "Root", day),
            Task::new("2", "Leaf", day).with_dependencies(["1"]),
        ];
        let mut output = Vec::new();
        PlainFormatter
            .write_graph(&mut output, &GraphReport::build(&tasks))
            .unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.contains("2 \"Leaf\""));
        assert!(result.contains("1 -> 2"));
    }

    #[test]
    fn test_plain_matrix_counts() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let tasks = vec![Task::new("1", "Now", day).with_importance(9)];
        let report = eisenhower_matrix(&tasks, day, MatrixThresholds::default());

        let mut output = Vec::new();
        PlainFormatter.write_matrix(&mut output, &report).unwrap();
        let result = String::from_utf8(output).unwrap();
        assert!(result.contains("--- Do first (1) ---"));
        assert!(result.contains("--- Eliminate (0) ---"));
    }
}
