//! The two picker stages: first a container, then an action on it.

use anyhow::Result;
use std::io::Write;

use crate::action::ActionLabel;
use crate::runtime::Container;
use crate::ui::list::ListModel;
use crate::ui::render::{render_action_picker, render_container_picker};
use crate::ui::session::{run_session, EventReader};
use crate::ui::theme::Theme;

pub struct App {
    pub theme: Theme,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Let the operator pick a container. `None` when the picker is cancelled.
    pub fn choose_container<W: Write>(
        &self,
        containers: Vec<Container>,
        reader: &mut dyn EventReader,
        out: &mut W,
    ) -> Result<Option<Container>> {
        let mut model = ListModel::new(containers);
        run_session(&mut model, reader, out, |m| {
            render_container_picker(m, &self.theme)
        })?;
        Ok(model.into_selection())
    }

    /// Let the operator pick an action for `container`. `None` when cancelled.
    pub fn choose_action<W: Write>(
        &self,
        container: &Container,
        reader: &mut dyn EventReader,
        out: &mut W,
    ) -> Result<Option<ActionLabel>> {
        let mut model = ListModel::new(ActionLabel::ALL.to_vec());
        run_session(&mut model, reader, out, |m| {
            render_action_picker(m, container, &self.theme)
        })?;
        Ok(model.into_selection())
    }
}
