use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::{InsightOptions, MatrixThresholds};
use crate::scoring::{self, Strategy};

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Markdown,
    Plain,
}

/// Main configuration for taskrank
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskrankConfig {
    /// Task file to read; stdin (JSON) when unset
    pub input: Option<PathBuf>,
    /// File to write the report to; stdout when unset
    pub output: Option<PathBuf>,
    /// Output format (JSON, YAML, Markdown, Plain)
    pub output_format: OutputFormat,
    /// Scoring strategy name. Takes precedence over a strategy named inside
    /// the task file. Unknown names fall back to smart_balance.
    pub strategy: Option<String>,
    /// Reference date for urgency; the local date when unset
    pub today: Option<NaiveDate>,
    /// Number of tasks returned by `suggest`
    pub suggestion_limit: usize,
    /// Tasks due within this many days count as urgent
    pub urgent_threshold_days: i64,
    /// Minimum importance for the "important" half of the Eisenhower matrix
    pub importance_threshold: i32,
    /// Minimum importance counted as high importance in workload insights
    pub high_importance_threshold: i32,
    /// Working hours per day used to estimate days of work
    pub workday_hours: f64,
    /// Enable debug logging
    pub verbose: bool,
}

impl TaskrankConfig {
    pub const FILE_NAME: &'static str = "taskrank.toml";

    /// Validates the configuration, ensuring the input file exists.
    pub fn validate(&self) -> anyhow::Result<()> {
        #[allow(clippy::collapsible_if)]
        if let Some(input) = &self.input {
            if !input.exists() {
                anyhow::bail!("Input file does not exist: {:?}", input);
            }
        }
        if self.suggestion_limit == 0 {
            anyhow::bail!("suggestion_limit must be at least 1");
        }
        if self.workday_hours.is_nan() || self.workday_hours <= 0.0 {
            anyhow::bail!("workday_hours must be positive, got {}", self.workday_hours);
        }
        Ok(())
    }

    /// Loads `taskrank.toml` from the current directory, falling back to
    /// `<config dir>/taskrank/config.toml`. Unreadable or invalid files are
    /// skipped with a warning.
    pub fn load_from_file() -> Option<Self> {
        let mut candidates = vec![PathBuf::from(Self::FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("taskrank").join("config.toml"));
        }

        candidates
            .into_iter()
            .filter(|path| path.is_file())
            .find_map(|path| match Self::load_from_path(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("Ignoring config file {:?}: {:#}", path, e);
                    None
                }
            })
    }

    /// Loads an explicit config file. Errors are returned, not skipped.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Configured strategy, else the one named by the task file, else the
    /// default.
    pub fn resolve_strategy(&self, from_input: Option<&str>) -> Strategy {
        self.strategy
            .as_deref()
            .or(from_input)
            .map(Strategy::from_name)
            .unwrap_or_default()
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(scoring::today)
    }

    pub fn matrix_thresholds(&self) -> MatrixThresholds {
        MatrixThresholds {
            urgent_within_days: self.urgent_threshold_days,
            min_importance: self.importance_threshold,
        }
    }

    pub fn insight_options(&self) -> InsightOptions {
        InsightOptions {
            urgent_within_days: self.urgent_threshold_days,
            high_importance_threshold: self.high_importance_threshold,
            workday_hours: self.workday_hours,
        }
    }
}

impl Default for TaskrankConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            output_format: OutputFormat::Json,
            strategy: None,
            today: None,
            suggestion_limit: 3,
            urgent_threshold_days: 3,
            importance_threshold: 7,
            high_importance_threshold: 8,
            workday_hours: 8.0,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = TaskrankConfig {
            input: Some(PathBuf::from("non_existent_tasks_xyz_123.json")),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TaskrankConfig {
            suggestion_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(TaskrankConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: TaskrankConfig = toml::from_str(
            r#"
            strategy = "deadline_driven"
            output_format = "markdown"
            today = "2025-03-01"
            suggestion_limit = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.output_format, OutputFormat::Markdown);
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.urgent_threshold_days, 3);
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(config.resolve_strategy(None), Strategy::DeadlineDriven);
    }

    #[test]
    fn test_strategy_precedence() {
        let mut config = TaskrankConfig::default();
        assert_eq!(config.resolve_strategy(None), Strategy::SmartBalance);
        assert_eq!(
            config.resolve_strategy(Some("high_impact")),
            Strategy::HighImpact
        );

        config.strategy = Some("fastest_wins".to_string());
        assert_eq!(
            config.resolve_strategy(Some("high_impact")),
            Strategy::FastestWins
        );

        config.strategy = Some("bogus".to_string());
        assert_eq!(
            config.resolve_strategy(Some("high_impact")),
            Strategy::SmartBalance
        );
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taskrank.toml");
        std::fs::write(&path, "verbose = true\nworkday_hours = 6.0\n").unwrap();

        let config = TaskrankConfig::load_from_path(&path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.insight_options().workday_hours, 6.0);

        std::fs::write(&path, "suggestion_limit = \"many\"").unwrap();
        assert!(TaskrankConfig::load_from_path(&path).is_err());
    }
}
