//! Structured output formats (JSON and YAML) for taskrank
//!
//! Both serialize the report types as they are; the shapes match the
//! documented wire format (`strategy_used`, `tasks`, `total_tasks`, ...).

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::Formatter;
use crate::analysis::{MatrixReport, WorkloadInsights};
use crate::report::{AnalysisReport, GraphReport, PlanReport, SuggestionReport};

pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output, handy for piping into other tools.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    fn emit<T: Serialize>(&self, output: &mut dyn Write, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *output, value)?;
        } else {
            serde_json::to_writer(&mut *output, value)?;
        }
        writeln!(output)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_analysis(&mut self, output: &mut dyn Write, report: &AnalysisReport) -> Result<()> {
        self.emit(output, report)
    }

    fn write_suggestions(
        &mut self,
        output: &mut dyn Write,
        report: &SuggestionReport,
    ) -> Result<()> {
        self.emit(output, report)
    }

    fn write_matrix(&mut self, output: &mut dyn Write, report: &MatrixReport) -> Result<()> {
        self.emit(output, report)
    }

    fn write_graph(&mut self, output: &mut dyn Write, report: &GraphReport) -> Result<()> {
        self.emit(output, report)
    }

    fn write_plan(&mut self, output: &mut dyn Write, report: &PlanReport) -> Result<()> {
        self.emit(output, report)
    }

    fn write_insights(
        &mut self,
        output: &mut dyn Write,
        insights: &WorkloadInsights,
    ) -> Result<()> {
        self.emit(output, insights)
    }
}

pub struct YamlFormatter;

impl YamlFormatter {
    fn emit<T: Serialize>(output: &mut dyn Write, value: &T) -> Result<()> {
        serde_yaml::to_writer(&mut *output, value)?;
        Ok(())
    }
}

impl Formatter for YamlFormatter {
    fn write_analysis(&mut self, output: &mut dyn Write, report: &AnalysisReport) -> Result<()> {
        Self::emit(output, report)
    }

    fn write_suggestions(
        &mut self,
        output: &mut dyn Write,
        report: &SuggestionReport,
    ) -> Result<()> {
        Self::emit(output, report)
    }

    fn write_matrix(&mut self, output: &mut dyn Write, report: &MatrixReport) -> Result<()> {
        Self::emit(output, report)
    }

    fn write_graph(&mut self, output: &mut dyn Write, report: &GraphReport) -> Result<()> {
        Self::emit(output, report)
    }

    fn write_plan(&mut self, output: &mut dyn Write, report: &PlanReport) -> Result<()> {
        Self::emit(output, report)
    }

    fn write_insights(
        &mut self,
        output: &mut dyn Write,
        insights: &WorkloadInsights,
    ) -> Result<()> {
        Self::emit(output, insights)
    }
}
