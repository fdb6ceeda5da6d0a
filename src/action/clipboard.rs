//! # Clipboard
//!
//! Backends that store one text payload as the system clipboard.
//!
//! | Backend | Mechanism |
//! |---------|-----------|
//! | `auto` | first installed of `pbcopy`, `wl-copy`, `xclip`, `xsel`, fed on stdin |
//! | `osc52` | OSC 52 escape sequence written to the terminal |
//!
//! OSC 52 works over SSH and inside tmux (with `set-clipboard on`) but the
//! terminal never confirms receipt, so a successful write is all it reports.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Result, WhaleError};

/// Which clipboard mechanism to use, from the `Clipboard` config key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    Osc52,
}

pub trait Clipboard {
    /// Store `text` as the clipboard contents.
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// A clipboard program that reads the payload from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, text: &str) -> io::Result<ExitStatus> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(text.as_bytes()) {
                // The program quit without reading; its exit status decides.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                other => other?,
            }
        }

        child.wait()
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let status = self.run(text).map_err(|e| {
            WhaleError::ClipboardUnavailable(format!("failed to run {}: {e}", self.program))
        })?;

        if !status.success() {
            return Err(WhaleError::ClipboardUnavailable(format!(
                "{} exited with {status}",
                self.program
            )));
        }
        Ok(())
    }
}

/// Tries each known clipboard program in turn, skipping missing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoClipboard {
    candidates: Vec<CommandClipboard>,
}

impl Default for AutoClipboard {
    fn default() -> Self {
        Self::with_candidates(vec![
            CommandClipboard::new("pbcopy", &[]),
            CommandClipboard::new("wl-copy", &[]),
            CommandClipboard::new("xclip", &["-selection", "clipboard"]),
            CommandClipboard::new("xsel", &["--clipboard", "--input"]),
        ])
    }
}

impl AutoClipboard {
    pub fn with_candidates(candidates: Vec<CommandClipboard>) -> Self {
        Self { candidates }
    }
}

impl Clipboard for AutoClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        for candidate in &self.candidates {
            match candidate.run(text) {
                Ok(status) if status.success() => {
                    tracing::debug!(program = candidate.program(), "copied to clipboard");
                    return Ok(());
                }
                Ok(status) => {
                    return Err(WhaleError::ClipboardUnavailable(format!(
                        "{} exited with {status}",
                        candidate.program()
                    )));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(program = candidate.program(), "clipboard program not found");
                }
                Err(e) => {
                    return Err(WhaleError::ClipboardUnavailable(format!(
                        "failed to run {}: {e}",
                        candidate.program()
                    )));
                }
            }
        }

        let tried: Vec<&str> = self.candidates.iter().map(CommandClipboard::program).collect();
        Err(WhaleError::ClipboardUnavailable(format!(
            "no clipboard program found (tried {})",
            tried.join(", ")
        )))
    }
}

/// Writes an OSC 52 set-clipboard sequence to a terminal.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| WhaleError::ClipboardUnavailable(format!("terminal write failed: {e}")))
    }
}

fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Build the clipboard for the configured backend.
pub fn system_clipboard(backend: ClipboardBackend) -> Box<dyn Clipboard> {
    match backend {
        ClipboardBackend::Auto => Box::new(AutoClipboard::default()),
        ClipboardBackend::Osc52 => Box::new(Osc52Clipboard::new(io::stdout())),
    }
}
