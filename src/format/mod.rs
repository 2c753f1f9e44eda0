//! Output format modules for taskrank

pub mod json;
pub mod markdown;
pub mod mermaid;
pub mod plain;

use anyhow::Result;
use std::io::Write;

use crate::analysis::{MatrixReport, WorkloadInsights};
use crate::config::OutputFormat;
use crate::report::{AnalysisReport, GraphReport, PlanReport, Report, SuggestionReport};

/// Renders reports into one output format.
pub trait Formatter {
    fn write_analysis(&mut self, output: &mut dyn Write, report: &AnalysisReport) -> Result<()>;

    fn write_suggestions(&mut self, output: &mut dyn Write, report: &SuggestionReport)
    -> Result<()>;

    fn write_matrix(&mut self, output: &mut dyn Write, report: &MatrixReport) -> Result<()>;

    fn write_graph(&mut self, output: &mut dyn Write, report: &GraphReport) -> Result<()>;

    fn write_plan(&mut self, output: &mut dyn Write, report: &PlanReport) -> Result<()>;

    fn write_insights(&mut self, output: &mut dyn Write, insights: &WorkloadInsights)
    -> Result<()>;

    fn write_report(&mut self, output: &mut dyn Write, report: &Report) -> Result<()> {
        match report {
            Report::Analysis(r) => self.write_analysis(output, r),
            Report::Suggestions(r) => self.write_suggestions(output, r),
            Report::Matrix(r) => self.write_matrix(output, r),
            Report::Graph(r) => self.write_graph(output, r),
            Report::Plan(r) => self.write_plan(output, r),
            Report::Insights(r) => self.write_insights(output, r),
        }
    }
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(json::JsonFormatter::new()),
        OutputFormat::Yaml => Box::new(json::YamlFormatter),
        OutputFormat::Markdown => Box::new(markdown::MarkdownFormatter),
        OutputFormat::Plain => Box::new(plain::PlainFormatter),
    }
}

/// Renders a report into a string.
pub fn render(format: OutputFormat, report: &Report) -> Result<String> {
    let mut buffer = Vec::new();
    create_formatter(format).write_report(&mut buffer, report)?;
    Ok(String::from_utf8(buffer)?)
}
