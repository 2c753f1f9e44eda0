//! Markdown output format for taskrank

use anyhow::Result;
use std::io::Write;

use super::Formatter;
use super::mermaid::generate_diagram;
use crate::analysis::{MatrixReport, Quadrant, WorkloadInsights};
use crate::report::{AnalysisReport, GraphReport, PlanReport, SuggestionReport};
use crate::scoring::PriorityBand;

pub struct MarkdownFormatter;

/// Table cells cannot contain raw pipes or newlines.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl Formatter for MarkdownFormatter {
    fn write_analysis(&mut self, output: &mut dyn Write, report: &AnalysisReport) -> Result<()> {
        writeln!(output, "# Task Priorities")?;
        writeln!(output)?;
        writeln!(
            output,
            "Strategy: `{}` | Tasks: {}",
            report.strategy_used, report.total_tasks
        )?;
        writeln!(output)?;

        if report.tasks.is_empty() {
            writeln!(output, "_No tasks._")?;
            return Ok(());
        }

        writeln!(
            output,
            "| # | Task | Score | Priority | Due | Hours | Importance |"
        )?;
        writeln!(output, "|---|------|-------|----------|-----|-------|------------|")?;
        for (i, entry) in report.tasks.iter().enumerate() {
            writeln!(
                output,
                "| {} | {} | {:.3} | {} | {} | {} | {} |",
                i + 1,
                cell(&entry.task.title),
                entry.priority_score,
                PriorityBand::from_score(entry.priority_score).label(),
                entry.task.due_date,
                entry.task.estimated_hours,
                entry.task.importance
            )?;
        }

        writeln!(output)?;
        writeln!(output, "## Explanations")?;
        writeln!(output)?;
        for entry in &report.tasks {
            writeln!(output, "- **{}**: {}", entry.task.title, entry.explanation)?;
        }
        Ok(())
    }

    fn write_suggestions(
        &mut self,
        output: &mut dyn Write,
        report: &SuggestionReport,
    ) -> Result<()> {
        writeln!(output, "# Suggested Tasks for {}", report.date)?;
        writeln!(output)?;
        writeln!(output, "Strategy: `{}`", report.strategy)?;
        writeln!(output)?;

        if report.suggestions.is_empty() {
            writeln!(output, "_Nothing to suggest._")?;
            return Ok(());
        }

        for s in &report.suggestions {
            writeln!(
                output,
                "{}. **{}** ({:.3}, due {}, {}h, importance {})",
                s.rank, s.task, s.priority_score, s.due_date, s.estimated_hours, s.importance
            )?;
            writeln!(output, "   > {}", s.reason)?;
        }
        Ok(())
    }

    fn write_matrix(&mut self, output: &mut dyn Write, report: &MatrixReport) -> Result<()> {
        writeln!(output, "# Eisenhower Matrix")?;
        writeln!(output)?;
        writeln!(
            output,
            "Urgent: due within {} days. Important: importance >= {}.",
            report.urgent_threshold_days, report.importance_threshold
        )?;

        for quadrant in Quadrant::ALL {
            writeln!(output)?;
            writeln!(output, "## {}", quadrant.title())?;
            writeln!(output)?;
            let tasks = report.matrix.quadrant(quadrant);
            if tasks.is_empty() {
                writeln!(output, "_None._")?;
            }
            for task in tasks {
                writeln!(
                    output,
                    "- {} (due {}, importance {})",
                    task.title, task.due_date, task.importance
                )?;
            }
        }
        Ok(())
    }

    fn write_graph(&mut self, output: &mut dyn Write, report: &GraphReport) -> Result<()> {
        writeln!(output, "# Dependency Graph")?;
        writeln!(output)?;
        writeln!(
            output,
            "{} tasks, {} dependencies.",
            report.graph.nodes.len(),
            report.graph.links.len()
        )?;
        if report.has_circular_deps {
            writeln!(output)?;
            writeln!(output, "> **Warning**: circular dependencies detected.")?;
        }

        let diagram = generate_diagram(&report.graph);
        if !diagram.is_empty() {
            writeln!(output)?;
            writeln!(output, "```mermaid")?;
            writeln!(output, "{}", diagram)?;
            writeln!(output, "```")?;
        }
        Ok(())
    }

    fn write_plan(&mut self, output: &mut dyn Write, report: &PlanReport) -> Result<()> {
        writeln!(output, "# Work Plan")?;
        writeln!(output)?;
        writeln!(output, "Strategy: `{}`", report.strategy_used)?;
        writeln!(output)?;
        for step in &report.steps {
            writeln!(
                output,
                "{}. {} `{}` ({:.3})",
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
        writeln!(output, "# Workload Insights")?;
        writeln!(output)?;
        writeln!(output, "- **Tasks**: {}", insights.total_tasks)?;
        writeln!(output, "- **Total workload**: {} hours", insights.total_hours)?;
        writeln!(output, "- **Estimated days**: {}", insights.estimated_days)?;
        writeln!(
            output,
            "- **Average importance**: {}/10",
            insights.average_importance
        )?;
        writeln!(output, "- **Urgent tasks**: {}", insights.urgent_tasks)?;
        writeln!(
            output,
            "- **High importance tasks**: {}",
            insights.high_importance_tasks
        )?;
        writeln!(output, "- **Intensity**: {:?}", insights.intensity)?;
        writeln!(output)?;
        writeln!(output, "> {}", insights.focus_advice)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Task;
    use crate::scoring::Strategy;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    #[test]
    fn test_analysis_table() {
        let tasks = vec![
            Task::new("1", "Fix | pipe", day()).with_importance(10),
            Task::new("2", "Later", day()).with_importance(2),
        ];
        let report = AnalysisReport::build(&tasks, Strategy::SmartBalance, day()).unwrap();

        let mut output = Vec::new();
        MarkdownFormatter.write_analysis(&mut output, &report).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Strategy: `smart_balance`"));
        assert!(text.contains("| 1 | Fix \\| pipe |"));
        assert!(text.contains("## Explanations"));
    }

    #[test]
    fn test_graph_embeds_mermaid() {
        let tasks = vec![
            Task::new("a", "A", day()),
            Task::new("b", "B", day()).with_dependencies(["a"]),
        ];
        let mut output = Vec::new();
        MarkdownFormatter
            .write_graph(&mut output, &GraphReport::build(&tasks))
            .unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("```mermaid"));
        assert!(text.contains("N0 --> N1;"));
        assert!(!text.contains("circular"));
    }
}
