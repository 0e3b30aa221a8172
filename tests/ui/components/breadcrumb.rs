use super::screen_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gallerist::icons::{IconService, IconTheme, NavIcon};
use gallerist::navigation::NavItem;
use gallerist::ui::components::BreadcrumbComponent;
use gallerist::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, Terminal};

fn crumb() -> BreadcrumbComponent {
    let mut crumb = BreadcrumbComponent::new(">", IconService::new(IconTheme::Ascii));
    crumb.set_items(
        ["One", "Two", "Three"]
            .iter()
            .enumerate()
            .map(|(i, label)| NavItem::new(label.to_lowercase(), *label, Action::BreadcrumbSelected(i)))
            .collect(),
    );
    crumb
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_trail_text() {
    let mut crumb = crumb();
    assert_eq!(crumb.trail_text(), "One > Two > Three");
    assert_eq!(crumb.highlighted(), 2);

    let mut items = crumb.items().to_vec();
    items[0] = items[0].clone().with_icon(NavIcon::Home);
    crumb.set_items(items);
    assert_eq!(crumb.trail_text(), "H One > Two > Three");
}

#[test]
fn test_keyboard_highlight_and_activate() {
    let mut crumb = crumb();
    assert_eq!(
        crumb.handle_key_events(key(KeyCode::Left)),
        Action::Status("Breadcrumb: Two".to_string())
    );
    assert_eq!(crumb.handle_key_events(key(KeyCode::Enter)), Action::BreadcrumbSelected(1));

    // Highlight stops at both ends
    crumb.handle_key_events(key(KeyCode::Left));
    crumb.handle_key_events(key(KeyCode::Left));
    assert_eq!(crumb.highlighted(), 0);
    for _ in 0..5 {
        crumb.handle_key_events(key(KeyCode::Right));
    }
    assert_eq!(crumb.highlighted(), 2);
}

#[test]
fn test_render_and_click() {
    let mut crumb = crumb();
    let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
    terminal.draw(|f| crumb.render(f, f.area())).unwrap();
    assert!(screen_text(&terminal).starts_with("One > Two > Three"));

    let click = |column| MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(crumb.handle_mouse_events(click(7)), Action::BreadcrumbSelected(1));
    assert_eq!(crumb.highlighted(), 1);
    // On a separator
    assert_eq!(crumb.handle_mouse_events(click(4)), Action::None);
}

#[test]
fn test_empty_trail_ignores_keys() {
    let mut crumb = BreadcrumbComponent::new("/", IconService::default());
    assert_eq!(crumb.handle_key_events(key(KeyCode::Left)), Action::None);
    assert_eq!(crumb.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(crumb.separator(), "/");
}
