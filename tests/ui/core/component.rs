use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use gallerist::ui::core::component::contains;
use gallerist::ui::core::{Action, Component};
use ratatui::{layout::Rect, Frame};

/// Quits on 'x' and passes everything else through
struct Passive;

impl Component for Passive {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('x') => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, _f: &mut Frame, _rect: Rect) {}
}

#[test]
fn test_default_methods() {
    let mut passive = Passive;
    assert!(!passive.captures_input());
    assert_eq!(passive.update(Action::ToggleLogs), Action::ToggleLogs);

    let key = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
    assert_eq!(passive.handle_events(Some(key)), Action::Quit);
    assert_eq!(passive.handle_events(None), Action::None);
}

#[test]
fn test_contains() {
    let area = Rect::new(2, 3, 4, 2);
    assert!(contains(area, 2, 3));
    assert!(contains(area, 5, 4));
    assert!(!contains(area, 6, 4));
    assert!(!contains(area, 2, 5));
    assert!(!contains(area, 1, 3));
}
