//! CLI argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use task_review_sdk::api::DEFAULT_API_BASE;
use task_review_sdk::{ApiConfig, Strategy, SuggestMethod, Weights};

use crate::config::{AppSettings, RenderPolicy};

/// Task Review CLI Arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "task-review",
    version,
    about = "Score and prioritise a JSON list of tasks with the task analysis service"
)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    // Interactive options, used when no subcommand is given
    #[command(flatten)]
    pub tui: TuiArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand to run; the interactive reviewer when none was given
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Tui(self.tui.clone()))
    }
}

/// Settings shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Base URL of the analysis service
    #[arg(long, env = "TASK_REVIEW_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// HTTP method for the suggest call (get sends a JSON body on GET)
    #[arg(long, env = "TASK_REVIEW_SUGGEST_METHOD", default_value = "get", global = true)]
    pub suggest_method: SuggestMethod,

    /// Request timeout in seconds (no client-side timeout when omitted)
    #[arg(long, env = "TASK_REVIEW_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,
}

impl ConnectionArgs {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base.clone(),
            suggest_method: self.suggest_method,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the interactive reviewer (default)
    Tui(TuiArgs),

    /// Score every task and print the cards
    Analyze(AnalyzeArgs),

    /// Print the tasks to work on next
    Suggest(SuggestArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TuiArgs {
    /// JSON file to load into the input pane
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Initial strategy in the selector
    #[arg(long, default_value_t = Strategy::Smart)]
    pub strategy: Strategy,

    /// Weights sent with analyze, e.g. urgency=0.5,importance=0.3
    #[arg(long)]
    pub weights: Option<Weights>,

    /// Maximum number of suggestions
    #[arg(long)]
    pub top: Option<usize>,

    /// Which response wins when requests overlap
    #[arg(long, default_value_t = RenderPolicy::LatestRequest)]
    pub render_policy: RenderPolicy,

    /// Directory for the log file
    #[arg(long, env = "TASK_REVIEW_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl TuiArgs {
    pub fn settings(&self, connection: &ConnectionArgs) -> AppSettings {
        AppSettings {
            api_base: connection.api_base.clone(),
            strategy: self.strategy,
            weights: self.weights.clone(),
            top: self.top,
            render_policy: self.render_policy,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// JSON file with the task array ("-" reads stdin)
    #[arg(short, long, default_value = "-")]
    pub file: PathBuf,

    /// Weights, e.g. urgency=0.5,importance=0.3
    #[arg(long)]
    pub weights: Option<Weights>,

    /// Print the scored tasks as JSON instead of cards
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    /// JSON file with the task array ("-" reads stdin)
    #[arg(short, long, default_value = "-")]
    pub file: PathBuf,

    /// Ranking strategy
    #[arg(long, default_value_t = Strategy::Smart)]
    pub strategy: Strategy,

    /// Maximum number of suggestions
    #[arg(long)]
    pub top: Option<usize>,

    /// Print the suggestions as JSON instead of cards
    #[arg(long)]
    pub json: bool,
}
