//! A column of field widgets bound to a [`FormController`].

use crate::form::{FieldSpec, FormController};
use crate::icons::IconService;
use crate::search::SearchConfig;
use crate::ui::components::inputs::{apply_outcome, FieldOutcome, FieldWidget};
use crate::ui::core::{Action, FieldKey, StoryKind};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

pub struct FormView {
    story: StoryKind,
    widgets: Vec<FieldWidget>,
    focus: usize,
}

impl FormView {
    pub fn new(story: StoryKind, specs: &[FieldSpec], form: &FormController, search: &SearchConfig) -> Self {
        Self {
            story,
            widgets: specs.iter().map(|spec| FieldWidget::from_spec(spec, form, search)).collect(),
            focus: 0,
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_name(&self) -> Option<&str> {
        self.widgets.get(self.focus).map(FieldWidget::name)
    }

    pub fn widget(&self, name: &str) -> Option<&FieldWidget> {
        self.widgets.iter().find(|w| w.name() == name)
    }

    fn widget_mut(&mut self, name: &str) -> Option<&mut FieldWidget> {
        self.widgets.iter_mut().find(|w| w.name() == name)
    }

    fn move_focus(&mut self, forward: bool, form: &FormController) {
        let len = self.widgets.len();
        if len == 0 {
            return;
        }
        if let Some(widget) = self.widgets.get_mut(self.focus) {
            let committed = form.display_value(widget.name());
            widget.on_blur(&committed);
        }
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
    }

    /// Route a key to the focused field and store what it produced in `form`
    pub fn handle_key(&mut self, key: KeyEvent, form: &mut FormController) -> Action {
        let Some(widget) = self.widgets.get_mut(self.focus) else {
            return Action::None;
        };

        // Row groups walk their own cells with Tab
        if !matches!(widget, FieldWidget::Rows(_)) {
            match key.code {
                KeyCode::Tab => {
                    self.move_focus(true, form);
                    return Action::None;
                }
                KeyCode::BackTab => {
                    self.move_focus(false, form);
                    return Action::None;
                }
                _ => {}
            }
        }

        let name = widget.name().to_string();
        let outcome = widget.handle_key(key);
        apply_outcome(form, &name, &outcome);

        let field = FieldKey::new(self.story, name);
        match outcome {
            FieldOutcome::Typed { handle, delay, .. } => Action::ArmDebounce { field, handle, delay },
            FieldOutcome::Selected { handle, delay, label } => Action::Batch(vec![
                Action::OptionSelected {
                    field: field.clone(),
                    label,
                },
                Action::ArmDebounce { field, handle, delay },
            ]),
            _ => Action::None,
        }
    }

    /// Feed a debounce or fetch result to the remote field it belongs to
    pub fn handle_search_action(&mut self, action: Action) -> Action {
        match action {
            Action::DebounceElapsed { field, handle } => {
                let Some(remote) = self.widget_mut(&field.field).and_then(FieldWidget::as_remote_mut) else {
                    return Action::None;
                };
                let current = remote.search().pending_timer() == Some(handle);
                match remote.timer_elapsed(handle) {
                    Some(ticket) => Action::FetchOptions { field, ticket },
                    // Query too short or cleared: nothing left to wait for
                    None if current => Action::CancelSearch { field },
                    None => Action::None,
                }
            }
            Action::OptionsLoaded { field, ticket, result } => {
                if let Some(remote) = self.widget_mut(&field.field).and_then(FieldWidget::as_remote_mut) {
                    remote.fetch_settled(&ticket, result);
                }
                Action::None
            }
            other => other,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, form: &FormController, icons: &IconService) {
        let constraints: Vec<Constraint> = self
            .widgets
            .iter()
            .enumerate()
            .map(|(index, w)| Constraint::Length(w.height(index == self.focus)))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let areas = Layout::vertical(constraints).split(area);

        for (index, (widget, field_area)) in self.widgets.iter().zip(areas.iter()).enumerate() {
            widget.render(f, *field_area, index == self.focus, form, icons);
        }
    }
}
