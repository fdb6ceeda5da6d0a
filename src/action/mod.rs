//! # Actions
//!
//! The second picker offers a closed set of [`ActionLabel`]s. Once one is
//! committed, [`resolve`] maps it to an [`ActionEffect`] for the chosen
//! container and [`perform`] carries the effect out.
//!
//! | Label | Effect |
//! |-------|--------|
//! | `Exit` | [`ActionEffect::RequestExit`] |
//! | `Copy container ID` | [`ActionEffect::RequestClipboardCopy`] with the container ID |

pub mod clipboard;

use crate::error::Result;
use crate::runtime::Container;
use clipboard::Clipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionLabel {
    Exit,
    CopyContainerId,
}

impl ActionLabel {
    /// Every action, in the order the picker shows them.
    pub const ALL: [ActionLabel; 2] = [ActionLabel::Exit, ActionLabel::CopyContainerId];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionLabel::Exit => "Exit",
            ActionLabel::CopyContainerId => "Copy container ID",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == label)
    }

    pub fn resolve(self, container: &Container) -> ActionEffect {
        match self {
            ActionLabel::Exit => ActionEffect::RequestExit,
            ActionLabel::CopyContainerId => {
                ActionEffect::RequestClipboardCopy(container.id.clone())
            }
        }
    }
}

impl std::fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a committed action asks the program to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
    RequestExit,
    RequestClipboardCopy(String),
    /// The label is not one of [`ActionLabel::ALL`].
    NoEffect,
}

/// What actually happened after [`perform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Exit,
    Copied(String),
    Nothing,
}

/// Map a label to its effect on `container`. Unknown labels resolve to
/// [`ActionEffect::NoEffect`] rather than an error.
pub fn resolve(label: &str, container: &Container) -> ActionEffect {
    ActionLabel::from_label(label)
        .map_or(ActionEffect::NoEffect, |action| action.resolve(container))
}

/// Execute an effect. Clipboard failures are returned, never retried.
pub fn perform(effect: ActionEffect, clipboard: &mut dyn Clipboard) -> Result<ActionOutcome> {
    match effect {
        ActionEffect::RequestExit => Ok(ActionOutcome::Exit),
        ActionEffect::RequestClipboardCopy(text) => {
            clipboard.copy(&text)?;
            Ok(ActionOutcome::Copied(text))
        }
        ActionEffect::NoEffect => Ok(ActionOutcome::Nothing),
    }
}
