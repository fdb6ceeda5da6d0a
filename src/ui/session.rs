//! # Picker Sessions
//!
//! Drives one [`ListModel`] from terminal input until it is committed or
//! cancelled, redrawing the whole frame after every event.
//!
//! ## Key Bindings
//!
//! - `Up` / `k` - Move selection up
//! - `Down` / `j` - Move selection down
//! - `Enter` - Commit the selection
//! - `q` / `Esc` / `Ctrl+c` - Cancel
//!
//! Reads block with no timeout; a session only ends through the operator.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};

use crate::ui::list::{ListEvent, ListModel, SessionState};

/// Trait for reading terminal events (allows dependency injection for testing)
pub trait EventReader {
    /// Block until the next event. `None` means the input is closed.
    fn read_event(&mut self) -> Result<Option<Event>>;
}

/// Production event reader that blocks on crossterm's event queue
pub struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self) -> Result<Option<Event>> {
        Ok(Some(
            event::read().context("Failed to read keyboard event")?,
        ))
    }
}

/// Map a terminal event to a list intent.
pub fn list_event(event: &Event) -> ListEvent {
    let Event::Key(key) = event else {
        return ListEvent::Ignored;
    };
    key_intent(key)
}

fn key_intent(key: &KeyEvent) -> ListEvent {
    if key.kind == KeyEventKind::Release {
        return ListEvent::Ignored;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => ListEvent::Cancel,
        KeyCode::Char('q') | KeyCode::Esc => ListEvent::Cancel,
        KeyCode::Up | KeyCode::Char('k') => ListEvent::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => ListEvent::MoveDown,
        KeyCode::Enter => ListEvent::Commit,
        _ => ListEvent::Ignored,
    }
}

/// Write a rendered frame. Raw mode disables newline translation, so line
/// feeds become CRLF here.
pub fn write_frame<W: Write>(out: &mut W, frame: &str) -> io::Result<()> {
    out.write_all(frame.replace('\n', "\r\n").as_bytes())?;
    out.flush()
}

/// Run a picker session to completion.
///
/// Returns the final state; the committed item is available from the model.
/// A commit on an empty list aborts the session with
/// [`crate::error::WhaleError::EmptySelection`].
pub fn run_session<T, W, F>(
    model: &mut ListModel<T>,
    reader: &mut dyn EventReader,
    out: &mut W,
    render: F,
) -> Result<SessionState>
where
    W: Write,
    F: Fn(&ListModel<T>) -> String,
{
    loop {
        write_frame(out, &render(model)).context("Failed to draw picker")?;

        if model.state().is_finished() {
            return Ok(model.state());
        }

        let intent = match reader.read_event()? {
            Some(event) => list_event(&event),
            None => ListEvent::Cancel,
        };

        model.handle(intent)?;
    }
}

/// Puts the terminal in raw mode for one session and restores it on drop.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode for terminal")?;
        execute!(io::stdout(), Hide).context("Failed to hide cursor")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show);
        let _ = disable_raw_mode();
    }
}

/// Restore the terminal from a panic hook.
pub fn restore_terminal() {
    let _ = execute!(io::stdout(), Show);
    let _ = disable_raw_mode();
}
