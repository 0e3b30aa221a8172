use super::field_label::{error_line, field_label};
use super::text_input::{InputEdit, TextInput};
use super::FieldOutcome;
use crate::form::{FieldSpec, FormRow};
use crate::ui::components::common::{create_field_block, create_input_paragraph};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::BTreeMap;

/// Editable list of rows, one text input per column.
///
/// Ctrl+A appends a row, Ctrl+D removes the focused one, Tab walks the cells.
pub struct RowsField {
    spec: FieldSpec,
    columns: Vec<FieldSpec>,
    rows: Vec<Vec<TextInput>>,
    focused_row: usize,
    focused_column: usize,
}

impl RowsField {
    pub fn new(spec: FieldSpec, columns: Vec<FieldSpec>, initial: &[FormRow]) -> Self {
        let rows = initial
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| TextInput::new(row.get(&column.name).map(|v| v.display()).unwrap_or_default()))
                    .collect()
            })
            .collect();
        Self {
            spec,
            columns,
            rows,
            focused_row: 0,
            focused_column: 0,
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn focused_cell(&self) -> (usize, usize) {
        (self.focused_row, self.focused_column)
    }

    /// An empty row matching the columns
    pub fn empty_row(&self) -> FormRow {
        FormRow::new(self.columns.iter().map(|c| (c.name.clone(), c.empty_value())))
    }

    fn cell_count(&self) -> usize {
        self.rows.len() * self.columns.len()
    }

    fn move_focus(&mut self, forward: bool) {
        let total = self.cell_count();
        if total == 0 {
            return;
        }
        let current = self.focused_row * self.columns.len() + self.focused_column;
        let next = if forward {
            (current + 1) % total
        } else {
            (current + total - 1) % total
        };
        self.focused_row = next / self.columns.len();
        self.focused_column = next % self.columns.len();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FieldOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.rows.push(self.columns.iter().map(|_| TextInput::default()).collect());
                    self.focused_row = self.rows.len() - 1;
                    self.focused_column = 0;
                    FieldOutcome::RowAdded(self.empty_row())
                }
                KeyCode::Char('d') if !self.rows.is_empty() => {
                    let index = self.focused_row;
                    self.rows.remove(index);
                    self.focused_row = self.focused_row.min(self.rows.len().saturating_sub(1));
                    FieldOutcome::RowRemoved(index)
                }
                _ => FieldOutcome::Ignored,
            };
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down if !self.rows.is_empty() => {
                self.move_focus(true);
                return FieldOutcome::Handled;
            }
            KeyCode::BackTab | KeyCode::Up if !self.rows.is_empty() => {
                self.move_focus(false);
                return FieldOutcome::Handled;
            }
            _ => {}
        }

        let (row, column) = (self.focused_row, self.focused_column);
        let Some(input) = self.rows.get_mut(row).and_then(|cells| cells.get_mut(column)) else {
            return FieldOutcome::Ignored;
        };
        match input.handle_key(key) {
            InputEdit::Changed => {
                let spec = &self.columns[column];
                FieldOutcome::CellChanged {
                    row,
                    column: spec.name.clone(),
                    value: spec.value_from_input(input.value()),
                }
            }
            InputEdit::Moved => FieldOutcome::Handled,
            InputEdit::Ignored => FieldOutcome::Ignored,
        }
    }

    pub fn height(&self) -> u16 {
        // header + 4 per row + group message
        2 + 4 * self.rows.len().max(1) as u16
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool, errors: &BTreeMap<String, String>) {
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(self.rows.iter().map(|_| Constraint::Length(4)));
        if self.rows.is_empty() {
            constraints.push(Constraint::Length(4));
        }
        constraints.push(Constraint::Length(1));
        let areas = Layout::vertical(constraints).split(area);

        let header = field_label(&self.spec.label, self.spec.required, focused, None);
        f.render_widget(Paragraph::new(header), areas[0]);

        if self.rows.is_empty() {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "  No rows yet, press Ctrl+A to add one",
                    Style::default().fg(Color::DarkGray),
                ))),
                areas[1],
            );
        }

        for (row_index, cells) in self.rows.iter().enumerate() {
            let row_area = areas[row_index + 1];
            let [boxes_area, errors_area] =
                Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(row_area);
            let cell_areas = Layout::horizontal(
                std::iter::once(Constraint::Length(5))
                    .chain(self.columns.iter().map(|_| Constraint::Fill(1))),
            )
            .split(boxes_area);

            f.render_widget(
                Paragraph::new(format!("\n #{}", row_index + 1)).style(Style::default().fg(Color::DarkGray)),
                cell_areas[0],
            );

            let mut row_errors = Vec::new();
            for (column_index, (column, input)) in self.columns.iter().zip(cells).enumerate() {
                let path = format!("{}.{}.{}", self.spec.name, row_index, column.name);
                let error = errors.get(&path);
                if let Some(message) = error {
                    row_errors.push(message.as_str());
                }
                let cell_focused = focused && row_index == self.focused_row && column_index == self.focused_column;
                let title = field_label(&column.label, column.required, cell_focused, None);
                let block = create_field_block(title, cell_focused, error.is_some());
                f.render_widget(
                    create_input_paragraph(input.value(), input.cursor(), cell_focused, block),
                    cell_areas[column_index + 1],
                );
            }

            let message = (!row_errors.is_empty()).then(|| row_errors.join(", "));
            f.render_widget(Paragraph::new(error_line(message.as_deref())), errors_area);
        }

        let group_error = errors.get(&self.spec.name).map(String::as_str);
        if let Some(last) = areas.last() {
            f.render_widget(Paragraph::new(error_line(group_error)), *last);
        }
    }
}
