use super::screen_text;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gallerist::icons::{IconService, IconTheme};
use gallerist::ui::components::StepperComponent;
use gallerist::ui::core::{Action, Component};
use gallerist::wizard::WizardState;
use ratatui::{backend::TestBackend, Terminal};

fn stepper(active_index: usize) -> StepperComponent {
    StepperComponent::new(
        vec!["Personal".to_string(), "Address".to_string(), "Friends".to_string()],
        WizardState {
            active_index,
            step_count: 3,
        },
        IconService::new(IconTheme::Ascii),
    )
}

#[test]
fn test_render_marks_steps() {
    let mut stepper = stepper(1);
    let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
    terminal.draw(|f| stepper.render(f, f.area())).unwrap();

    let text = screen_text(&terminal);
    assert!(text.starts_with("[x] 1. Personal ── [>] 2. Address ── [ ] 3. Friends"));

    stepper.set_state(WizardState {
        active_index: 2,
        step_count: 3,
    });
    terminal.draw(|f| stepper.render(f, f.area())).unwrap();
    assert!(screen_text(&terminal).contains("[>] 3. Friends"));
}

#[test]
fn test_click_requests_jump() {
    let mut stepper = stepper(0);
    let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
    terminal.draw(|f| stepper.render(f, f.area())).unwrap();

    let click = |column| MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(stepper.handle_mouse_events(click(40)), Action::WizardGoTo(2));
    assert_eq!(stepper.handle_mouse_events(click(2)), Action::WizardGoTo(0));
    // On the connector between steps
    assert_eq!(stepper.handle_mouse_events(click(16)), Action::None);
}
