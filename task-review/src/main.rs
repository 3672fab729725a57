use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use task_review_sdk::{HttpTaskReviewApi, TaskReviewApi};
use tracing::{error, info};

use task_review::app::App;
use task_review::cli::{Cli, Command, ConnectionArgs, TuiArgs};
use task_review::config::read_input;
use task_review::ui::ui;
use task_review::{headless, logging};

fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match cli.command() {
        Command::Tui(args) => run_tui(&cli.connection, &args),
        Command::Analyze(args) => {
            logging::init_stderr_logging();
            let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
            runtime.block_on(headless::run_analyze(&cli.connection, &args))
        }
        Command::Suggest(args) => {
            logging::init_stderr_logging();
            let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
            runtime.block_on(headless::run_suggest(&cli.connection, &args))
        }
    }
}

fn run_tui(connection: &ConnectionArgs, args: &TuiArgs) -> Result<ExitCode> {
    let log_dir = args.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _log_guard = logging::init_file_logging(&log_dir)?;

    let initial_input = match &args.file {
        Some(path) => Some(read_input(path)?),
        None => None,
    };

    let api = HttpTaskReviewApi::new(connection.api_config()).context("Failed to build HTTP client")?;
    let api: Arc<dyn TaskReviewApi> = Arc::new(api);

    // Create tokio runtime for background requests
    let tokio_runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    let mut app = App::new(api, args.settings(connection), tokio_runtime.handle().clone());
    if let Some(text) = initial_input {
        app = app.with_input(text);
    }
    info!(api_base = %connection.api_base, "starting task review");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("terminal loop failed: {:?}", err);
        println!("Error: {:?}", err);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Apply finished requests and expire the banner
        app.poll_events();
        app.notifications.cleanup_expired();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
