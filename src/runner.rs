use crate::config::TaskrankConfig;
use crate::core::{InputFormat, TaskBatch, parse_batch, validate_batch};
use crate::error::TaskError;
use crate::format::create_formatter;
use crate::report::{AnalysisReport, GraphReport, PlanReport, Report, SuggestionReport};
use crate::scoring::Strategy;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use tracing::{debug, info};

/// The report a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Score and rank every task.
    Analyze,
    /// Top tasks to work on today.
    Suggest,
    /// Eisenhower quadrants.
    Matrix,
    /// Dependency graph with cycle flag.
    Graph,
    /// Dependency-respecting work order.
    Plan,
    /// Workload summary.
    Insights,
}

/// Reads the task batch from the configured input file, or JSON on stdin.
pub fn read_batch(config: &TaskrankConfig) -> Result<TaskBatch> {
    let (content, format) = match &config.input {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read task file: {:?}", path))?;
            (content, InputFormat::from_path(path))
        }
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read tasks from stdin")?;
            (content, InputFormat::Json)
        }
    };

    debug!("Parsing {} bytes as {}", content.len(), format.name());
    Ok(parse_batch(&content, format)?)
}

/// Validates the batch and builds the report for `command`.
pub fn build_report(
    batch: TaskBatch,
    config: &TaskrankConfig,
    command: Command,
) -> std::result::Result<Report, TaskError> {
    let strategy = config.resolve_strategy(batch.strategy());
    if let Some(name) = config
        .strategy
        .as_deref()
        .or(batch.strategy())
        .filter(|name| Strategy::lookup(name).is_none())
    {
        debug!("Unknown strategy {:?}, using {}", name, strategy);
    }

    let tasks = validate_batch(batch.into_records())?;
    let today = config.today();

    let report = match command {
        Command::Analyze => Report::Analysis(AnalysisReport::build(&tasks, strategy, today)?),
        Command::Suggest => Report::Suggestions(SuggestionReport::build(
            &tasks,
            strategy,
            today,
            config.suggestion_limit,
        )?),
        Command::Matrix => Report::matrix(&tasks, today, config.matrix_thresholds()),
        Command::Graph => Report::Graph(GraphReport::build(&tasks)),
        Command::Plan => Report::Plan(PlanReport::build(&tasks, strategy, today)?),
        Command::Insights => Report::insights(&tasks, today, &config.insight_options()),
    };
    Ok(report)
}

/// Main entry point for the taskrank CLI.
///
/// Reads the batch, builds the requested report and writes it in the
/// configured format to the output file or stdout.
pub fn run(config: &TaskrankConfig, command: Command) -> Result<()> {
    let batch = read_batch(config)?;
    let report = build_report(batch, config, command)?;

    let mut formatter = create_formatter(config.output_format);
    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            let mut writer = BufWriter::new(file);
            formatter.write_report(&mut writer, &report)?;
            writer.flush()?;
            info!("Wrote {:?} report to {:?}", command, path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            formatter.write_report(&mut writer, &report)?;
            writer.flush()?;
        }
    }

    Ok(())
}
