use super::combo_box::option_lines;
use super::field_label::{error_line, field_label};
use super::text_input::{InputEdit, TextInput};
use super::FieldOutcome;
use crate::constants::MESSAGE_FETCH_FAILED;
use crate::form::{FieldSpec, FieldValue};
use crate::icons::IconService;
use crate::search::{DebouncedSearch, FetchError, FetchTicket, RemoteOption, SearchConfig, SearchState, TimerHandle};
use crate::ui::components::common::{create_field_block, create_input_paragraph};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Combo box whose options come from a debounced remote search.
///
/// The field only drives the [`DebouncedSearch`] state machine; timers and
/// fetches are run by whoever receives the returned outcomes.
pub struct RemoteComboBoxField {
    spec: FieldSpec,
    input: TextInput,
    search: DebouncedSearch<RemoteOption>,
    highlighted: usize,
}

impl RemoteComboBoxField {
    pub fn new(spec: FieldSpec, config: SearchConfig, initial: &str) -> Self {
        Self {
            spec,
            input: TextInput::new(initial),
            search: DebouncedSearch::new(config),
            highlighted: 0,
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    pub fn search(&self) -> &DebouncedSearch<RemoteOption> {
        &self.search
    }

    pub fn state(&self) -> &SearchState<RemoteOption> {
        self.search.state()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FieldOutcome {
        let count = self.search.state().options.len();
        match key.code {
            KeyCode::Down => {
                if count > 0 {
                    self.highlighted = (self.highlighted + 1) % count;
                }
                return FieldOutcome::Handled;
            }
            KeyCode::Up => {
                if count > 0 {
                    self.highlighted = (self.highlighted + count - 1) % count;
                }
                return FieldOutcome::Handled;
            }
            KeyCode::Enter => {
                let picked = self.search.state().options.get(self.highlighted).cloned();
                return match picked {
                    Some(option) => self.select(Some(&option)),
                    None => FieldOutcome::Handled,
                };
            }
            KeyCode::Esc if !self.input.value().is_empty() => return self.select(None),
            _ => {}
        }

        match self.input.handle_key(key) {
            InputEdit::Changed => {
                self.highlighted = 0;
                let (handle, committed) = self.search.text_edited(self.input.value());
                FieldOutcome::Typed {
                    handle,
                    delay: self.search.config().debounce,
                    commit: committed.map(FieldValue::Text),
                }
            }
            InputEdit::Moved => FieldOutcome::Handled,
            InputEdit::Ignored => FieldOutcome::Ignored,
        }
    }

    /// Pick an option, or clear the selection with `None`
    pub fn select(&mut self, option: Option<&RemoteOption>) -> FieldOutcome {
        let (handle, label) = self.search.select_option(option);
        self.input.set_value(label.clone().unwrap_or_default());
        self.highlighted = 0;
        FieldOutcome::Selected {
            handle,
            delay: self.search.config().debounce,
            label,
        }
    }

    pub fn timer_elapsed(&mut self, handle: TimerHandle) -> Option<FetchTicket> {
        self.search.timer_elapsed(handle)
    }

    pub fn fetch_settled(&mut self, ticket: &FetchTicket, result: Result<Vec<RemoteOption>, FetchError>) -> bool {
        let applied = self.search.fetch_settled(ticket, result);
        if applied {
            self.highlighted = 0;
        }
        applied
    }

    pub fn on_blur(&mut self, committed: &str) {
        if !self.search.config().free_solo && self.input.value() != committed {
            self.input.set_value(committed);
        }
    }

    pub fn height(&self, focused: bool) -> u16 {
        if !focused {
            return 4;
        }
        let state = self.search.state();
        let rows = if state.loading || state.errored {
            1
        } else {
            state.options.len().min(crate::constants::COMBO_BOX_VISIBLE_OPTIONS)
        };
        4 + rows as u16
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool, error: Option<&str>, icons: &IconService) {
        let [box_area, error_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let state = self.search.state();
        let marker = if state.loading {
            Some((icons.loading(), Color::Yellow))
        } else if state.errored {
            Some((icons.warning(), Color::Yellow))
        } else {
            None
        };

        let title = field_label(&self.spec.label, self.spec.required, focused, marker);
        let block = create_field_block(title, focused, error.is_some());
        f.render_widget(
            create_input_paragraph(self.input.value(), self.input.cursor(), focused, block),
            box_area,
        );
        f.render_widget(Paragraph::new(error_line(error)), error_area);

        if !focused {
            return;
        }

        let lines = if state.loading {
            vec![Line::from(Span::styled(
                format!(" {} Loading…", icons.loading()),
                Style::default().fg(Color::Yellow),
            ))]
        } else if state.errored {
            vec![Line::from(Span::styled(
                format!(" {} {}", icons.warning(), MESSAGE_FETCH_FAILED),
                Style::default().fg(Color::Yellow),
            ))]
        } else {
            let labels: Vec<&str> = state.options.iter().map(|o| o.label.as_str()).collect();
            option_lines(&labels, self.highlighted, icons)
        };
        f.render_widget(Paragraph::new(lines), list_area);
    }
}
