//! # Whale CLI Entry Point
//!
//! Pick a container from the local Docker runtime, then pick what to do with
//! it.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive: choose a container, then an action, then run it
//! whale
//!
//! # Choose both, print the chosen action, run nothing
//! whale --run
//!
//! whale --help
//! whale --version
//! ```
//!
//! Only the first argument is looked at. Anything unrecognized exits quietly
//! with status 0.
//!
//! ## Flow
//!
//! 1. **Config**: load styles and the clipboard backend
//! 2. **Runtime**: check that Docker is installed and running, list containers
//! 3. **Pickers**: container stage, then action stage
//! 4. **Action**: exit, or copy the container ID to the clipboard
//!
//! ## Key Bindings
//!
//! - `k` / `Up` - Move selection up
//! - `j` / `Down` - Move selection down
//! - `Enter` - Select
//! - `q` / `Esc` / `Ctrl+c` - Quit

use whale::action::{self, clipboard, ActionLabel, ActionOutcome};
use whale::runtime::{Container, ContainerRuntime};
use whale::ui::session::{self, CrosstermEventReader, EventReader, RawModeGuard};
use whale::ui::{App, Config};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::io::{self, Write};
use std::panic;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Whale - pick a Docker container and act on it
#[derive(Parser, Debug)]
#[command(name = "whale")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Optional mode flag, matched as a whole word
    #[arg(value_enum, allow_hyphen_values = true)]
    flag: Option<Flag>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    /// Run both pickers and print the chosen action
    #[value(name = "--run", alias = "-r")]
    Run,

    /// Show the help message
    #[value(name = "--help", alias = "-h")]
    Help,

    /// Show the version
    #[value(name = "--version", alias = "-v")]
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Interactive,
    Run,
    Help,
    Version,
    Unrecognized,
}

/// Decide the mode from the first argument only.
///
/// Flags are whole words: `-hv` or `-rh` are not bundles, just unknown.
fn parse_mode<I, T>(args: I) -> Mode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().take(2).map(Into::into).collect();
    if args.len() < 2 {
        return Mode::Interactive;
    }

    match Args::try_parse_from(args) {
        Ok(Args { flag: Some(Flag::Run) }) => Mode::Run,
        Ok(Args { flag: Some(Flag::Help) }) => Mode::Help,
        Ok(Args { flag: Some(Flag::Version) }) => Mode::Version,
        Ok(Args { flag: None }) | Err(_) => Mode::Unrecognized,
    }
}

fn help_manual() -> String {
    [
        "Usage: whale [options]".to_string(),
        format!("  {:<24} {}", "whale [--run | -r]", "Run the program"),
        format!("  {:<24} {}", "whale [--help | -h]", "Show this help message"),
        format!("  {:<24} {}", "whale [--version | -v]", "Show the version"),
    ]
    .join("\n")
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    let mode = parse_mode(std::env::args_os());

    init_tracing();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        session::restore_terminal();
        original_hook(panic_info);
    }));

    match run_application(mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_application(mode: Mode) -> Result<()> {
    let config = Config::load().context("Error loading configuration")?;
    let theme = config.theme().context("Error loading configuration")?;

    let runtime = ContainerRuntime::docker();
    runtime.ensure_available()?;

    let listing = runtime
        .list_containers()
        .context("Error getting containers")?;
    if !listing.rejected.is_empty() {
        tracing::warn!(
            count = listing.rejected.len(),
            "some listing rows could not be parsed"
        );
    }

    let app = App::new(theme);

    match mode {
        Mode::Interactive => {
            let Some((container, chosen)) = choose_interactively(&app, listing.containers)? else {
                return Ok(());
            };

            let effect = action::resolve(chosen.as_str(), &container);
            let mut clipboard = clipboard::system_clipboard(config.clipboard);
            let outcome =
                action::perform(effect, clipboard.as_mut()).context("Error doing action")?;

            if let ActionOutcome::Copied(_) = outcome {
                println!("Container ID copied to clipboard");
            }
        }
        Mode::Run => {
            if let Some((_, chosen)) = choose_interactively(&app, listing.containers)? {
                println!("Action selected: {chosen}");
            }
        }
        Mode::Help => println!("{}", help_manual()),
        Mode::Version => println!("{}", env!("CARGO_PKG_VERSION")),
        Mode::Unrecognized => {}
    }

    Ok(())
}

/// Run both pickers on the real terminal.
fn choose_interactively(
    app: &App,
    containers: Vec<Container>,
) -> Result<Option<(Container, ActionLabel)>> {
    let _guard = RawModeGuard::enable()?;
    let mut event_reader = CrosstermEventReader;
    let mut stdout = io::stdout();
    choose_stages(app, containers, &mut event_reader, &mut stdout)
}

/// Container stage followed by action stage. `None` if either is cancelled.
fn choose_stages<W: Write>(
    app: &App,
    containers: Vec<Container>,
    event_reader: &mut dyn EventReader,
    out: &mut W,
) -> Result<Option<(Container, ActionLabel)>> {
    let Some(container) = app
        .choose_container(containers, event_reader, out)
        .context("Error choosing container")?
    else {
        return Ok(None);
    };

    tracing::debug!(
        id = %container.id,
        image = %container.image,
        command = %container.command,
        created = %container.created,
        status = %container.status,
        ports = %container.ports,
        name = %container.name,
        "container selected"
    );

    let Some(action) = app
        .choose_action(&container, event_reader, out)
        .context("Error choosing action")?
    else {
        return Ok(None);
    };

    Ok(Some((container, action)))
}
