//! # Theme
//!
//! Terminal styles used by the pickers. Each style is an ANSI SGR parameter
//! list (`"36"`, `"1;32"`, `"38;5;208"`) taken verbatim from the
//! configuration and painted as `ESC[<token>m text ESC[0m`.
//!
//! | Role | Config key | Used for |
//! |------|------------|----------|
//! | cursor | `cursorColor` | the `>` marker |
//! | branch | `branchColor` | the container name in the action header |
//! | container | `containerSelectedColor` | highlighted container row |
//! | action | `actionSelectedColor` | highlighted action row |

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{Result, WhaleError};

const RESET: &str = "\x1b[0m";

fn sgr_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{1,3}(;[0-9]{1,3})*$").expect("sgr parameter regex"))
}

/// A validated SGR parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleToken(String);

impl StyleToken {
    /// Validate `token` as an SGR parameter list.
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();
        if !sgr_pattern().is_match(token) {
            return Err(WhaleError::ConfigurationInvalid(format!(
                "style {token:?} is not an SGR parameter list such as \"36\" or \"1;32\""
            )));
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap `text` in this style followed by a reset.
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[{}m{}{}", self.0, text, RESET)
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four styles the pickers draw with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub cursor: StyleToken,
    pub branch: StyleToken,
    pub container_selected: StyleToken,
    pub action_selected: StyleToken,
}
