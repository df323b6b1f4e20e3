//! Interval Timer CLI - work/break countdown in the terminal
//!
//! Alternates work and break phases, alerts shortly before each phase ends
//! and announces every switch. The defaults follow the classic rhythm:
//! - 25 minutes of focused work
//! - 5 minutes of break
//! - an alert 10 seconds before each phase ends

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tokio::sync::watch;

use cycle_timer::cli::{spawn_stdin_reader, Cli, Commands, Display, RunArgs, Session};
use cycle_timer::host::{Clock, Dispatcher, TimerService};
use cycle_timer::notification::{ConsoleNotifier, PermissionFlag};
use cycle_timer::TimerEngine;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => run_session(args).await?,
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Runs an interactive timer session until the user quits.
async fn run_session(args: RunArgs) -> Result<()> {
    let config = args.to_config().context("Invalid timer configuration")?;
    Display::show_config(&config);

    let (service, events) = TimerService::new(TimerEngine::new(config));
    let notifier = Arc::new(ConsoleNotifier::stdout(args.output_format()));
    let permission = Arc::new(PermissionFlag::new(!args.no_notify));
    let dispatcher = Dispatcher::new(notifier, permission, events);

    let input = spawn_stdin_reader()?;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    if args.idle {
        Display::show_snapshot(&service.snapshot().await);
    } else {
        Display::show_snapshot(&service.start().await);
    }

    tracing::info!(
        work_seconds = config.work_seconds(),
        break_seconds = config.break_seconds(),
        alert_seconds = config.alert_threshold_seconds(),
        "session started"
    );

    let session = Session::new(service.clone());
    let (ticks, stats, end) = tokio::join!(
        Clock::default().run(service, shutdown_rx),
        dispatcher.run(),
        session.run(input, shutdown_tx),
    );

    tracing::info!(ticks, ?stats, ?end, "session finished");
    Display::show_session_end();
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
