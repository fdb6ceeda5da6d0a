//! # Selectable List
//!
//! [`ListModel`] is the cursor-over-list state machine behind both pickers
//! (containers, then actions). It only knows about positions; labels and
//! colors are the renderer's business.
//!
//! ```text
//!            MoveUp / MoveDown
//!              ┌──────────┐
//!              ▼          │
//!          ┌────────┐─────┘
//!          │ Active │──── Commit ───▶ Committed
//!          └────────┘──── Cancel ───▶ Cancelled
//! ```
//!
//! The cursor starts on the last item.

use crate::error::{Result, WhaleError};

/// Discrete operator intents fed into a [`ListModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    MoveUp,
    MoveDown,
    Commit,
    Cancel,
    /// Input with no meaning for a list (unbound keys, resizes, ...).
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Committed,
    Cancelled,
}

impl SessionState {
    pub fn is_finished(self) -> bool {
        self != SessionState::Active
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListModel<T> {
    items: Vec<T>,
    cursor: usize,
    state: SessionState,
    selected: Option<usize>,
}

impl<T> ListModel<T> {
    pub fn new(items: Vec<T>) -> Self {
        let cursor = items.len().saturating_sub(1);
        Self {
            items,
            cursor,
            state: SessionState::Active,
            selected: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cursor position, or `None` while the list is empty.
    pub fn cursor(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.cursor().and_then(|i| self.items.get(i))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The committed item, present only after a successful [`ListModel::commit`].
    pub fn selection(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Consume the model and hand back the committed item, if any.
    pub fn into_selection(mut self) -> Option<T> {
        let idx = self.selected?;
        Some(self.items.swap_remove(idx))
    }

    pub fn move_up(&mut self) {
        if self.state.is_finished() || self.items.is_empty() {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.items.len() - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn move_down(&mut self) {
        if self.state.is_finished() || self.items.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.items.len();
    }

    /// Fix the item under the cursor as the selection.
    ///
    /// Fails with [`WhaleError::EmptySelection`] on an empty list, leaving the
    /// model `Active`. Once finished, further commits change nothing.
    pub fn commit(&mut self) -> Result<()> {
        if self.state.is_finished() {
            return Ok(());
        }
        if self.items.is_empty() {
            return Err(WhaleError::EmptySelection);
        }
        self.selected = Some(self.cursor);
        self.state = SessionState::Committed;
        Ok(())
    }

    pub fn cancel(&mut self) {
        if self.state == SessionState::Active {
            self.state = SessionState::Cancelled;
        }
    }

    /// Apply one event and report the resulting state.
    pub fn handle(&mut self, event: ListEvent) -> Result<SessionState> {
        match event {
            ListEvent::MoveUp => self.move_up(),
            ListEvent::MoveDown => self.move_down(),
            ListEvent::Commit => self.commit()?,
            ListEvent::Cancel => self.cancel(),
            ListEvent::Ignored => {}
        }
        Ok(self.state)
    }
}
