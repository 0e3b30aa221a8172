use super::screen_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gallerist::icons::{IconService, IconTheme, NavIcon};
use gallerist::ui::components::{Panel, SplitLayoutComponent};
use gallerist::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, Terminal};

fn layout(initial: Option<&str>, minimum: usize) -> SplitLayoutComponent {
    SplitLayoutComponent::new(
        vec![
            Panel::new("one", NavIcon::Snowflake, "One"),
            Panel::new("two", NavIcon::Account, "Two"),
            Panel::new("three", NavIcon::Api, "Three"),
        ],
        initial,
        minimum,
        None,
        IconService::new(IconTheme::Ascii),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_number_keys_toggle_panels() {
    let mut layout = layout(Some("one"), 1);

    let action = layout.handle_key_events(key(KeyCode::Char('3')));
    assert_eq!(action, Action::TogglePanel("three".to_string()));
    assert_eq!(layout.cursor(), 2);
    assert_eq!(layout.update(action), Action::Status("Panels: one, three".to_string()));
    assert_eq!(layout.selection().active(), ["one".to_string(), "three".to_string()]);

    assert_eq!(layout.handle_key_events(key(KeyCode::Char('9'))), Action::None);
}

#[test]
fn test_rejected_toggle_reports_bounds() {
    let mut layout = layout(Some("one"), 1);
    let action = layout.handle_key_events(key(KeyCode::Char(' ')));
    assert_eq!(
        layout.update(action),
        Action::Status("Panels: toggling 'one' rejected (1..=3 active)".to_string())
    );
    assert!(layout.selection().is_active("one"));
}

#[test]
fn test_cursor_wraps() {
    let mut layout = layout(None, 0);
    layout.handle_key_events(key(KeyCode::Left));
    assert_eq!(layout.cursor(), 2);
    layout.handle_key_events(key(KeyCode::Right));
    assert_eq!(layout.cursor(), 0);
}

#[test]
fn test_render_placeholder_and_panels() {
    let mut layout = layout(None, 0);
    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();

    terminal.draw(|f| layout.render(f, f.area())).unwrap();
    assert!(screen_text(&terminal).contains("No Panels selected!"));

    let action = layout.handle_key_events(key(KeyCode::Char('2')));
    layout.update(action);
    terminal.draw(|f| layout.render(f, f.area())).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains(" @ two "));
    assert!(text.contains("Two"));
    assert!(!text.contains("No Panels selected!"));
}

#[test]
fn test_click_on_toggle() {
    let mut layout = layout(None, 0);
    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
    terminal.draw(|f| layout.render(f, f.area())).unwrap();

    // Toggles read " * one  @ two  & three "
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 9,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(layout.handle_mouse_events(click), Action::TogglePanel("two".to_string()));
    assert_eq!(layout.cursor(), 1);

    let below = MouseEvent { row: 3, ..click };
    assert_eq!(layout.handle_mouse_events(below), Action::None);
}

#[test]
fn test_click_hits_use_display_width() {
    // Emoji glyphs take two columns each
    let mut layout = SplitLayoutComponent::new(
        vec![
            Panel::new("one", NavIcon::Account, "One"),
            Panel::new("two", NavIcon::Api, "Two"),
            Panel::new("three", NavIcon::Account, "Three"),
        ],
        None,
        0,
        None,
        IconService::new(IconTheme::Emoji),
    );
    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
    terminal.draw(|f| layout.render(f, f.area())).unwrap();

    // Toggles span columns 0..7, 8..15 and 16..26
    let click = |column| MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(layout.handle_mouse_events(click(14)), Action::TogglePanel("two".to_string()));
    assert_eq!(layout.handle_mouse_events(click(15)), Action::None);
    assert_eq!(layout.handle_mouse_events(click(25)), Action::TogglePanel("three".to_string()));
    assert_eq!(layout.cursor(), 2);
}
