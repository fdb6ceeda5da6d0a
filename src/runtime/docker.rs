//! # Container Runtime CLI
//!
//! Thin wrapper around the runtime binary (`docker` by default). Each call
//! spawns one short-lived process and waits for it.
//!
//! | Check | Command |
//! |-------|---------|
//! | installed | `docker -v` |
//! | running | `docker container ls` |
//! | listing | `docker container ls -a` |

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

use crate::error::WhaleError;
use crate::runtime::record::{parse_listing, ParsedListing};

/// Default runtime binary.
pub const DOCKER_BINARY: &str = "docker";

/// Handle on a container runtime CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRuntime {
    binary: String,
    display_name: String,
}

impl Default for ContainerRuntime {
    fn default() -> Self {
        Self::docker()
    }
}

impl ContainerRuntime {
    pub fn docker() -> Self {
        Self::new(DOCKER_BINARY, "Docker")
    }

    /// Use a different binary that speaks the Docker CLI dialect.
    pub fn new(binary: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            display_name: display_name.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Check whether the runtime binary can be executed.
    pub fn is_installed(&self) -> bool {
        self.quiet_status(&["-v"])
    }

    /// Check whether the runtime daemon answers a listing request.
    pub fn is_running(&self) -> bool {
        self.quiet_status(&["container", "ls"])
    }

    /// Fail with a runtime error unless the binary exists and the daemon answers.
    pub fn ensure_available(&self) -> Result<(), WhaleError> {
        if !self.is_installed() {
            return Err(WhaleError::RuntimeNotInstalled(self.display_name.clone()));
        }
        if !self.is_running() {
            return Err(WhaleError::RuntimeNotRunning(self.display_name.clone()));
        }
        Ok(())
    }

    /// Run `container ls -a` and return its raw stdout.
    pub fn fetch_listing(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .args(["container", "ls", "-a"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to run {} container ls -a", self.binary))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WhaleError::ListingFailed(stderr.trim().to_string()).into());
        }

        let output_str = match String::from_utf8(output.stdout) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).to_string(),
        };

        Ok(output_str)
    }

    /// Fetch and parse the full container listing.
    pub fn list_containers(&self) -> Result<ParsedListing> {
        let output = self.fetch_listing()?;
        Ok(parse_listing(&output))
    }

    fn quiet_status(&self, args: &[&str]) -> bool {
        let status = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::debug!(
                    binary = %self.binary,
                    error = %e,
                    "runtime command failed to start"
                );
                false
            }
        }
    }
}
