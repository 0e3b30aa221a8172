use super::screen_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gallerist::icons::{IconService, IconTheme, NavIcon};
use gallerist::navigation::NavItem;
use gallerist::ui::components::NavBarComponent;
use gallerist::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn nav() -> NavBarComponent {
    NavBarComponent::new(
        vec![
            NavItem::new("home", "Home", Action::NavActivated("Home".to_string())).with_icon(NavIcon::Home),
            NavItem::new("search", "Search", Action::NavActivated("Search".to_string())).with_icon(NavIcon::Search),
        ],
        IconService::new(IconTheme::Ascii),
    )
}

#[test]
fn test_keyboard_selection_wraps() {
    let mut nav = nav();
    assert_eq!(nav.selected(), Some(0));

    nav.handle_key_events(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    assert_eq!(nav.selected(), Some(1));
    assert_eq!(
        nav.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        Action::NavActivated("Search".to_string())
    );
}

#[test]
fn test_compact_threshold() {
    assert!(NavBarComponent::is_compact(11));
    assert!(!NavBarComponent::is_compact(12));
}

#[test]
fn test_render_full_and_compact() {
    let mut nav = nav();
    let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();

    terminal.draw(|f| nav.render(f, Rect::new(0, 0, 20, 4))).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("H  Home"));
    assert!(text.contains("S  Search"));

    terminal.draw(|f| nav.render(f, Rect::new(0, 0, 6, 4))).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains('H'));
    assert!(!text.contains("Home"));
}

#[test]
fn test_click_activates_item() {
    let mut nav = nav();
    let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
    terminal.draw(|f| nav.render(f, f.area())).unwrap();

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 3,
        row: 2,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(nav.handle_mouse_events(click), Action::NavActivated("Search".to_string()));
    assert_eq!(nav.selected(), Some(1));

    // The border row is not an item
    let border = MouseEvent { row: 0, ..click };
    assert_eq!(nav.handle_mouse_events(border), Action::None);
}
