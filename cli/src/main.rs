//! hideui - run the HideUI core against a simulated host.
//!
//! Each line read from stdin is one frame and lists the keys held during
//! it, e.g. `LeftControl H`. An empty line is a frame with nothing held.
//!
//! Commands:
//!   :status   print the current state without advancing a frame
//!   :flip     flip UI visibility by hand
//!   :quit     save the config and exit
//!
//! Edit the config file while this runs to see it reload.

mod sim_host;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use hideui_core::{HideUi, TickOutcome, default_config_path, input::acceptable_key_names};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;

use sim_host::{SimKeyboard, SimUi, parse_held_keys};

#[derive(Parser, Debug)]
#[command(name = "hideui", about = "Toggle host UI visibility with a hotkey")]
struct Args {
    /// Config file (defaults to $HIDEUI_CONFIG or the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames during which the simulated UI is still loading
    #[arg(long, default_value_t = 0)]
    loading_frames: u32,

    /// Print the accepted key names and exit
    #[arg(long)]
    list_keys: bool,
}

/// Initialize logging, appending to HIDEUI_LOG_PATH if set, otherwise stderr.
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("HIDEUI_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            return Some(guard);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    None
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.list_keys {
        println!("# Acceptable values: {}", acceptable_key_names());
        return Ok(());
    }

    let _log_guard = init_logging();

    let path = args.config.unwrap_or_else(default_config_path);
    let mut session = HideUi::start(&path)?;
    tracing::info!(path = %path.display(), "HideUI started");

    let mut keyboard = SimKeyboard::default();
    let mut ui = SimUi::new(args.loading_frames);
    let mut frame: u64 = 0;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        match line {
            ":quit" | ":q" => break,
            ":status" => {
                print_status(&mut stdout, frame, &session, &ui, None)?;
                continue;
            }
            ":flip" => {
                match session.controller().flip_visibility(&mut ui) {
                    Some(hidden) => writeln!(stdout, "UI hidden = {hidden}")?,
                    None => writeln!(stdout, "UI not loaded yet")?,
                }
                continue;
            }
            _ => {}
        }

        let keys = match parse_held_keys(line) {
            Ok(keys) => keys,
            Err(name) => {
                writeln!(stdout, "unknown key {name:?} (try --list-keys)")?;
                continue;
            }
        };

        frame += 1;
        keyboard.advance(keys);
        let outcome = session.tick(&keyboard, &mut ui);
        ui.advance();
        print_status(&mut stdout, frame, &session, &ui, Some(outcome))?;
    }

    session.shutdown()?;
    Ok(())
}

fn print_status(
    out: &mut impl Write,
    frame: u64,
    session: &HideUi,
    ui: &SimUi,
    outcome: Option<TickOutcome>,
) -> io::Result<()> {
    let snapshot = session.store().snapshot();
    let note = match outcome {
        Some(TickOutcome::Skipped) => " (loading)",
        Some(TickOutcome::Ran { toggled: Some(_), .. }) => " (toggled)",
        _ => "",
    };
    writeln!(
        out,
        "frame {frame}: hotkey={} toggle={} hidden={} combat_active={}{note}",
        snapshot.hotkey, snapshot.toggle, ui.menu.hide_ui, ui.combat.active
    )
}
