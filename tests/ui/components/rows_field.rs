use super::screen_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gallerist::form::{FieldKind, FieldSpec, FieldValue, FormRow, NumberValue};
use gallerist::ui::components::inputs::{FieldOutcome, RowsField};
use ratatui::{backend::TestBackend, Terminal};
use std::collections::BTreeMap;

fn friends_field() -> RowsField {
    let columns = vec![
        FieldSpec::new("name", "Name", FieldKind::Text).required(),
        FieldSpec::new("phone", "Phone Number", FieldKind::Number).required(),
    ];
    let spec = FieldSpec::new(
        "friends",
        "Friends",
        FieldKind::Rows {
            columns: columns.clone(),
        },
    );
    let first = FormRow::new([
        ("name".to_string(), FieldValue::text("")),
        ("phone".to_string(), FieldValue::Number(NumberValue::Valid(0))),
    ]);
    RowsField::new(spec, columns, &[first])
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_typing_reports_cell_changes() {
    let mut field = friends_field();
    assert_eq!(field.row_count(), 1);
    assert_eq!(field.focused_cell(), (0, 0));

    assert_eq!(
        field.handle_key(key(KeyCode::Char('A'))),
        FieldOutcome::CellChanged {
            row: 0,
            column: "name".to_string(),
            value: FieldValue::text("A"),
        }
    );

    field.handle_key(key(KeyCode::Tab));
    assert_eq!(field.focused_cell(), (0, 1));
    // The seeded zero is still in the box
    assert_eq!(
        field.handle_key(key(KeyCode::Char('7'))),
        FieldOutcome::CellChanged {
            row: 0,
            column: "phone".to_string(),
            value: FieldValue::Number(NumberValue::Valid(7)),
        }
    );
}

#[test]
fn test_add_and_remove_rows() {
    let mut field = friends_field();

    let FieldOutcome::RowAdded(row) = field.handle_key(ctrl('a')) else {
        panic!("Ctrl+A adds a row");
    };
    assert_eq!(row.get("name"), Some(&FieldValue::text("")));
    assert_eq!(row.get("phone"), Some(&FieldValue::Number(NumberValue::Valid(0))));
    assert_eq!(field.row_count(), 2);
    assert_eq!(field.focused_cell(), (1, 0));

    field.handle_key(key(KeyCode::BackTab));
    assert_eq!(field.focused_cell(), (0, 1));

    assert_eq!(field.handle_key(ctrl('d')), FieldOutcome::RowRemoved(0));
    assert_eq!(field.row_count(), 1);
    assert_eq!(field.handle_key(ctrl('d')), FieldOutcome::RowRemoved(0));
    assert_eq!(field.handle_key(ctrl('d')), FieldOutcome::Ignored);
    assert_eq!(field.handle_key(key(KeyCode::Char('x'))), FieldOutcome::Ignored);
}

#[test]
fn test_render_shows_row_and_group_errors() {
    let field = friends_field();
    let errors = BTreeMap::from([
        ("friends".to_string(), "Error: Need at least 2 friends!".to_string()),
        ("friends.0.name".to_string(), "Required".to_string()),
    ]);

    let mut terminal = Terminal::new(TestBackend::new(60, field.height())).unwrap();
    terminal
        .draw(|f| field.render(f, f.area(), true, &errors))
        .unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("Friends"));
    assert!(text.contains("#1"));
    assert!(text.contains("Required"));
    assert!(text.contains("Error: Need at least 2 friends!"));
}
