//! Headless tickoff host.
//!
//! Drives the library over a line-oriented JSON protocol so any UI shell, or
//! a test script, can sit on the other end of a pipe.
//!
//! # Protocol
//!
//! Each stdin line is one [`Event`], tagged by `type`:
//!
//! ```text
//! {"type":"add_todo","text":"Buy milk"}
//! {"type":"touch_start","id":"<uuid>","x":120.0}
//! ```
//!
//! Each handled line produces one stdout line:
//!
//! ```text
//! {"render":true,"actions":[...],"stats":{...}}
//! ```
//!
//! Lines that fail to decode produce `{"error":"..."}` and are otherwise
//! skipped. Blank lines are ignored.
//!
//! # Lifecycle
//!
//! 1. **Load**: Read the TOML config named by the first argument, if any
//! 2. **Trace**: Initialize logging (stderr or rotating file)
//! 3. **Initialize**: Build `AppState`, seeding onboarding todos if enabled
//! 4. **Loop**: Decode, handle, execute actions, reply
//!
//! Haptic actions are executed against a logging device.

#![allow(clippy::multiple_crate_versions)]

use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tickoff::analytics::StatisticsSnapshot;
use tickoff::app::execute;
use tickoff::gesture::LoggingHaptics;
use tickoff::{handle_event, Action, AppState, Config, Event, TickoffError};

/// Reply to a handled event.
#[derive(Debug, Serialize)]
struct Reply<'a> {
    render: bool,
    actions: &'a [Action],
    stats: StatisticsSnapshot,
}

/// Reply to a line that could not be decoded.
#[derive(Debug, Serialize)]
struct ErrorReply {
    error: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tickoff: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> tickoff::Result<()> {
    let config = load_config()?;
    tickoff::observability::init_tracing(&config);

    let span = tracing::debug_span!("host");
    let _guard = span.entered();

    let mut state = tickoff::initialize(&config);
    tracing::debug!(todos = state.store.len(), "app state initialized");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match decode(&line) {
            Ok(event) => reply(&mut out, &mut state, &event)?,
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping undecodable event");
                write_line(&mut out, &ErrorReply { error: e.to_string() })?;
            }
        }
    }

    tracing::debug!("input closed, exiting");
    Ok(())
}

fn load_config() -> tickoff::Result<Config> {
    std::env::args_os()
        .nth(1)
        .map_or_else(|| Ok(Config::default()), |path| Config::from_file(Path::new(&path)))
}

fn decode(line: &str) -> Result<Event, TickoffError> {
    Ok(serde_json::from_str(line)?)
}

fn reply(out: &mut impl Write, state: &mut AppState, event: &Event) -> io::Result<()> {
    let (render, actions) = handle_event(state, event);
    execute(&actions, Some(&LoggingHaptics));

    write_line(
        out,
        &Reply {
            render,
            actions: &actions,
            stats: state.statistics(),
        },
    )
}

fn write_line(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()
}
