use super::screen_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gallerist::ui::components::SidebarComponent;
use gallerist::ui::core::{Action, Component, StoryKind};
use ratatui::{backend::TestBackend, Terminal};

#[test]
fn test_shift_arrows_step_through_stories() {
    let mut sidebar = SidebarComponent::new(StoryKind::Form);

    let down = KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT);
    assert_eq!(sidebar.handle_key_events(down), Action::SelectStory(StoryKind::MultiForm));

    // Plain arrows belong to the story
    let plain = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
    assert_eq!(sidebar.handle_key_events(plain), Action::None);

    sidebar.update(Action::SelectStory(StoryKind::Breadcrumb));
    assert_eq!(sidebar.selection, StoryKind::Breadcrumb);
    let up = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
    assert_eq!(sidebar.handle_key_events(up), Action::SelectStory(StoryKind::SplitLayout));
}

#[test]
fn test_render_and_click() {
    let mut sidebar = SidebarComponent::new(StoryKind::Form);
    let mut terminal = Terminal::new(TestBackend::new(24, 8)).unwrap();
    terminal.draw(|f| sidebar.render(f, f.area())).unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("Stories"));
    assert!(text.contains("▸ Form"));
    assert!(text.contains("ToggleSplitLayout"));

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 3,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(sidebar.handle_mouse_events(click), Action::SelectStory(StoryKind::Breadcrumb));

    // Below the last story
    let empty_row = MouseEvent { row: 6, ..click };
    assert_eq!(sidebar.handle_mouse_events(empty_row), Action::None);

    let wheel = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        ..click
    };
    assert_eq!(sidebar.handle_mouse_events(wheel), Action::SelectStory(StoryKind::MultiForm));
}
