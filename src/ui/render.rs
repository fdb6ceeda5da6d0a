//! # Rendering
//!
//! Pure functions from a [`ListModel`] to a full terminal frame. Nothing here
//! writes to the terminal; [`crate::ui::session`] does that.
//!
//! A frame looks like this (`>` and the highlighted label are colored):
//!
//! ```text
//! Container: web
//!
//!   Exit
//! > Copy container ID
//! ```

use crate::action::ActionLabel;
use crate::runtime::Container;
use crate::ui::list::ListModel;
use crate::ui::theme::{StyleToken, Theme};

/// Move the cursor home and clear the screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Marker drawn in front of the row under the cursor.
pub const CURSOR_GLYPH: &str = ">";

pub const CONTAINER_PROMPT: &str = "Choose a container:";

/// Styles for one picker.
#[derive(Debug, Clone, Copy)]
pub struct ListStyle<'a> {
    pub cursor: &'a StyleToken,
    pub highlight: &'a StyleToken,
}

/// Render a full frame: clear, header, blank line, then one row per item.
pub fn render_list<T, F>(
    model: &ListModel<T>,
    header: &str,
    label: F,
    style: ListStyle<'_>,
) -> String
where
    F: Fn(&T) -> String,
{
    let mut frame = String::from(CLEAR_SCREEN);
    frame.push_str(header);
    frame.push_str("\n\n");

    let cursor = model.cursor();
    for (i, item) in model.items().iter().enumerate() {
        let text = label(item);
        let row = if cursor == Some(i) {
            format!(
                "{} {}\n",
                style.cursor.paint(CURSOR_GLYPH),
                style.highlight.paint(&text)
            )
        } else {
            format!("  {text}\n")
        };
        frame.push_str(&row);
    }

    frame
}

/// Frame for the first stage: every container row as the runtime printed it.
pub fn render_container_picker(model: &ListModel<Container>, theme: &Theme) -> String {
    render_list(
        model,
        CONTAINER_PROMPT,
        |container| container.row.clone(),
        ListStyle {
            cursor: &theme.cursor,
            highlight: &theme.container_selected,
        },
    )
}

/// Frame for the second stage, headed by the chosen container's name.
pub fn render_action_picker(
    model: &ListModel<ActionLabel>,
    container: &Container,
    theme: &Theme,
) -> String {
    let header = format!("Container: {}", theme.branch.paint(&container.name));
    render_list(
        model,
        &header,
        |action| action.as_str().to_string(),
        ListStyle {
            cursor: &theme.cursor,
            highlight: &theme.action_selected,
        },
    )
}
