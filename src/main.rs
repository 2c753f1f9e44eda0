use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;
use taskrank::{Command, OutputFormat, TaskrankConfig, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, Registry, reload};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Md,
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
            CliOutputFormat::Md => OutputFormat::Markdown,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank tasks by urgency, importance, effort and dependencies", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: CliCommand,

    /// Task file (JSON, YAML or TOML by extension); stdin JSON when omitted
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Output file path; stdout when omitted
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    format: Option<CliOutputFormat>,

    /// Scoring strategy (smart_balance, fastest_wins, high_impact, deadline_driven)
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Reference date for urgency (YYYY-MM-DD); defaults to the local date
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Config file; replaces the taskrank.toml lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Score and rank all tasks
    Analyze,
    /// Suggest the top tasks for today
    Suggest {
        /// Number of suggestions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Sort tasks into Eisenhower quadrants
    Matrix,
    /// Dependency graph and cycle check
    Graph,
    /// Dependency-respecting work order
    Plan,
    /// Workload summary
    Insights,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}'. Use YYYY-MM-DD format.", value))
}

/// `RUST_LOG` wins; otherwise verbose selects debug and the default is warn.
fn log_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "taskrank=debug" } else { "taskrank=warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the stderr subscriber. The filter stays reloadable so a config
/// file can still turn on verbose logging.
fn init_tracing(verbose: bool) -> reload::Handle<EnvFilter, Registry> {
    let (filter, handle) = reload::Layer::new(log_filter(verbose));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

fn main() -> Result<()> {
    let args = Args::parse();

    let command = match args.command {
        CliCommand::Completions { shell } => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            return Ok(());
        }
        CliCommand::Analyze => Command::Analyze,
        CliCommand::Suggest { .. } => Command::Suggest,
        CliCommand::Matrix => Command::Matrix,
        CliCommand::Graph => Command::Graph,
        CliCommand::Plan => Command::Plan,
        CliCommand::Insights => Command::Insights,
    };

    let log_handle = init_tracing(args.verbose);

    // 1. Load from file or default
    let mut config = match &args.config {
        Some(path) => TaskrankConfig::load_from_path(path)?,
        None => TaskrankConfig::load_from_file().unwrap_or_default(),
    };

    // 2. Override with CLI args
    if let Some(i) = args.input {
        config.input = Some(i);
    }
    if let Some(o) = args.output {
        config.output = Some(o);
    }
    if let Some(f) = args.format {
        config.output_format = f.into();
    }
    if let Some(s) = args.strategy {
        config.strategy = Some(s);
    }
    if let Some(t) = args.today {
        config.today = Some(t);
    }
    if let CliCommand::Suggest { limit: Some(n) } = args.command {
        config.suggestion_limit = n;
    }
    if args.verbose {
        config.verbose = true;
    } else if config.verbose {
        log_handle
            .reload(log_filter(true))
            .unwrap_or_else(|e| warn!("Could not enable verbose logging: {}", e));
    }

    config.validate()?;

    run(&config, command)
}
