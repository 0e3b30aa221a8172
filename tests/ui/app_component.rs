use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gallerist::config::Config;
use gallerist::constants::{STATUS_FORM_INVALID, STATUS_FORM_SUBMITTED, STATUS_STEP_BLOCKED};
use gallerist::form::FieldValue;
use gallerist::logger::Logger;
use gallerist::search::{MockOptionApi, SearchPhase};
use gallerist::ui::components::inputs::FieldWidget;
use gallerist::ui::core::{Action, AppContext, Component, EventType, StoryKind};
use gallerist::ui::AppComponent;
use std::sync::Arc;
use std::time::Duration;

fn gallery(initial: StoryKind) -> AppComponent {
    AppComponent::new(AppContext::new(Config::default(), Logger::new()), initial).unwrap()
}

async fn press_with(app: &mut AppComponent, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(EventType::Key(KeyEvent::new(code, modifiers)))
        .await
        .unwrap();
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE).await;
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

/// Feed everything background tasks reported back into the gallery
async fn drain(app: &mut AppComponent) {
    for action in app.process_background_actions() {
        let action = app.update(action);
        app.handle_app_action(action).await;
    }
}

#[tokio::test]
async fn test_opens_on_requested_story() {
    let app = gallery(StoryKind::NavBar);
    assert_eq!(app.active_story(), StoryKind::NavBar);
    assert!(!app.should_quit());
    assert!(!app.is_log_panel_visible());
    assert_eq!(app.active_task_count(), 0);
}

#[tokio::test]
async fn test_shift_arrows_switch_stories() {
    let mut app = gallery(StoryKind::Form);

    press_with(&mut app, KeyCode::Down, KeyModifiers::SHIFT).await;
    assert_eq!(app.active_story(), StoryKind::MultiForm);
    assert_eq!(app.status_message(), Some("📖 MultiForm"));

    press_with(&mut app, KeyCode::Up, KeyModifiers::SHIFT).await;
    press_with(&mut app, KeyCode::Up, KeyModifiers::SHIFT).await;
    assert_eq!(app.active_story(), StoryKind::Breadcrumb);
}

#[tokio::test]
async fn test_q_quits_outside_text_input() {
    let mut app = gallery(StoryKind::NavBar);
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_focused_form_keeps_printable_keys() {
    let mut app = gallery(StoryKind::Form);
    type_text(&mut app, "qGi").await;

    assert!(!app.should_quit());
    assert!(!app.is_log_panel_visible());
    assert_eq!(app.form().form().value("textField"), Some(&FieldValue::text("qGi")));

    // Ctrl+C always quits
    press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL).await;
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_log_panel_takes_keys_while_open() {
    let mut app = gallery(StoryKind::Form);
    press_with(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL).await;
    assert!(app.is_log_panel_visible());

    // Keys scroll the log instead of reaching the form
    type_text(&mut app, "jq").await;
    assert!(!app.should_quit());
    assert_eq!(app.form().form().value("textField"), Some(&FieldValue::text("")));

    press(&mut app, KeyCode::Esc).await;
    assert!(!app.is_log_panel_visible());

    let mut app = gallery(StoryKind::NavBar);
    press(&mut app, KeyCode::Char('G')).await;
    assert!(app.is_log_panel_visible());
    press(&mut app, KeyCode::Char('G')).await;
    assert!(!app.is_log_panel_visible());
}

#[tokio::test]
async fn test_icon_theme_cycles() {
    let mut app = gallery(StoryKind::NavBar);
    let before = app.context().icons.theme();

    press(&mut app, KeyCode::Char('i')).await;
    assert_ne!(app.context().icons.theme(), before);
    assert!(app.status_message().unwrap().starts_with("Icons: "));
}

#[tokio::test]
async fn test_nav_bar_activation() {
    let mut app = gallery(StoryKind::NavBar);
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.nav_bar().last_activated(), Some("Search"));
    assert_eq!(app.status_message(), Some("NavBar: Search"));
}

#[tokio::test]
async fn test_breadcrumb_back_next_and_select() {
    let mut app = gallery(StoryKind::Breadcrumb);
    assert_eq!(app.breadcrumb().content_label(), "Three");

    press(&mut app, KeyCode::Char('b')).await;
    assert_eq!(app.breadcrumb().trail().current(), Some(1));
    assert_eq!(app.status_message(), Some("Breadcrumb: Content Two"));
    assert_eq!(app.breadcrumb().crumb().items().len(), 2);

    press(&mut app, KeyCode::Char('n')).await;
    assert_eq!(app.breadcrumb().content_label(), "Three");

    // Choosing a crumb jumps back to it
    press(&mut app, KeyCode::Left).await;
    press(&mut app, KeyCode::Left).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.breadcrumb().content_label(), "One");
    assert_eq!(app.breadcrumb().crumb().items().len(), 1);
}

#[tokio::test]
async fn test_split_layout_toggles() {
    let mut app = gallery(StoryKind::SplitLayout);
    press(&mut app, KeyCode::Char('2')).await;
    assert_eq!(app.status_message(), Some("Panels: two"));

    press(&mut app, KeyCode::Char('1')).await;
    assert_eq!(
        app.split_layout().layout().selection().active(),
        ["one".to_string(), "two".to_string()]
    );
}

#[tokio::test]
async fn test_split_layout_respects_configured_minimum() {
    let mut config = Config::default();
    config.split_layout.initial_panel = Some("one".to_string());
    config.split_layout.minimum_panels = 1;
    let mut app = AppComponent::new(AppContext::new(config, Logger::new()), StoryKind::SplitLayout).unwrap();

    press(&mut app, KeyCode::Char('1')).await;
    assert!(app.split_layout().layout().selection().is_active("one"));
    assert!(app.status_message().unwrap().contains("rejected"));
}

#[tokio::test]
async fn test_form_submit_with_errors() {
    let mut app = gallery(StoryKind::Form);
    press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL).await;

    assert_eq!(app.status_message(), Some(STATUS_FORM_INVALID));
    assert_eq!(app.form().form().errors().len(), 4);
    assert_eq!(
        app.form().form().error("textField"),
        Some("textField is a required field")
    );
}

#[tokio::test]
async fn test_form_submit_reports_payload() {
    let mut app = gallery(StoryKind::Form);

    type_text(&mut app, "hello").await;
    press(&mut app, KeyCode::Tab).await;
    type_text(&mut app, "N").await;
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Tab).await;
    type_text(&mut app, "2025-06-01").await;
    press(&mut app, KeyCode::Tab).await;
    type_text(&mut app, "custom").await;

    press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL).await;
    assert_eq!(app.status_message(), Some(STATUS_FORM_SUBMITTED));

    drain(&mut app).await;
    let payload = app.form().last_submission().expect("submission reported back");
    let json: serde_json::Value = serde_json::from_str(payload).unwrap();
    assert_eq!(json["textField"], "hello");
    assert_eq!(json["combobox"], "N/A");
    assert_eq!(json["date"], "2025-06-01T00:00:00.000Z");
    assert_eq!(json["externalCombobox"], "custom");
}

#[tokio::test(start_paused = true)]
async fn test_remote_search_round_trip() {
    let api = Arc::new(MockOptionApi::new(Duration::from_millis(1000)));
    let context = AppContext::with_fetcher(Config::default(), Logger::new(), api.clone());
    let mut app = AppComponent::new(context, StoryKind::Form).unwrap();

    for _ in 0..3 {
        press(&mut app, KeyCode::Tab).await;
    }
    assert_eq!(app.form().view().focused_name(), Some("externalCombobox"));

    type_text(&mut app, "abc").await;
    assert_eq!(app.active_task_count(), 1);
    assert!(app.is_busy());

    tokio::time::sleep(Duration::from_millis(600)).await;
    drain(&mut app).await;
    assert!(api.queries().is_empty(), "fetch starts inside a task");

    tokio::time::sleep(Duration::from_millis(1100)).await;
    drain(&mut app).await;
    assert_eq!(api.queries(), vec!["abc"]);

    let Some(FieldWidget::RemoteComboBox(remote)) = app.form().view().widget("externalCombobox") else {
        panic!("externalCombobox is a remote combo box");
    };
    let labels: Vec<&str> = remote.state().options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["abc-one", "abc-two", "abc-three"]);
    assert_eq!(remote.state().phase, SearchPhase::Success);

    // Picking an option stores its label
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(
        app.form().form().value("externalCombobox"),
        Some(&FieldValue::text("abc-two"))
    );
}

#[tokio::test(start_paused = true)]
async fn test_remote_search_error() {
    let mut app = gallery(StoryKind::Form);
    for _ in 0..3 {
        press(&mut app, KeyCode::Tab).await;
    }
    type_text(&mut app, "error").await;

    tokio::time::sleep(Duration::from_millis(600)).await;
    drain(&mut app).await;
    tokio::task::yield_now().await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    drain(&mut app).await;

    let Some(FieldWidget::RemoteComboBox(remote)) = app.form().view().widget("externalCombobox") else {
        panic!("externalCombobox is a remote combo box");
    };
    assert!(remote.state().errored);
    assert!(remote.state().options.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_short_query_aborts_running_fetch() {
    let api = Arc::new(MockOptionApi::new(Duration::from_secs(5)));
    let context = AppContext::with_fetcher(Config::default(), Logger::new(), api.clone());
    let mut app = AppComponent::new(context, StoryKind::Form).unwrap();
    for _ in 0..3 {
        press(&mut app, KeyCode::Tab).await;
    }

    type_text(&mut app, "abcd").await;
    tokio::time::sleep(Duration::from_millis(600)).await;
    drain(&mut app).await;
    assert_eq!(app.active_task_count(), 1, "fetch for 'abcd' is running");

    press(&mut app, KeyCode::Backspace).await;
    press(&mut app, KeyCode::Backspace).await;
    tokio::time::sleep(Duration::from_millis(600)).await;
    drain(&mut app).await;

    assert_eq!(app.active_task_count(), 0);
    assert!(!app.is_busy());

    // The aborted fetch never reports back
    tokio::time::sleep(Duration::from_secs(6)).await;
    drain(&mut app).await;
    let Some(FieldWidget::RemoteComboBox(remote)) = app.form().view().widget("externalCombobox") else {
        panic!("externalCombobox is a remote combo box");
    };
    assert_eq!(remote.state().phase, SearchPhase::Idle);
    assert!(remote.state().options.is_empty());
    assert!(remote.search().in_flight().is_none());
}

#[tokio::test]
async fn test_multi_form_wizard_flow() {
    let mut app = gallery(StoryKind::MultiForm);

    press(&mut app, KeyCode::PageDown).await;
    assert_eq!(app.status_message(), Some(STATUS_STEP_BLOCKED));
    assert_eq!(app.multi_form().wizard().active_index(), 0);
    assert_eq!(app.multi_form().form().error("firstName"), Some("Required"));
    // Later steps are not validated yet
    assert_eq!(app.multi_form().form().error("street"), None);

    type_text(&mut app, "Ana").await;
    press(&mut app, KeyCode::Tab).await;
    type_text(&mut app, "Lee").await;
    press(&mut app, KeyCode::Tab).await;
    type_text(&mut app, "ana@example.com").await;

    press(&mut app, KeyCode::PageDown).await;
    assert_eq!(app.multi_form().wizard().active_index(), 1);
    assert_eq!(app.status_message(), Some("MultiForm: step Address"));

    press(&mut app, KeyCode::PageUp).await;
    assert_eq!(app.multi_form().wizard().active_index(), 0);

    // Jumping ahead only validates the step being left
    press(&mut app, KeyCode::F(3)).await;
    assert_eq!(app.multi_form().wizard().active_index(), 2);
    assert_eq!(app.status_message(), Some("MultiForm: step Friends"));
}

#[tokio::test]
async fn test_unhandled_actions_settle() {
    let mut app = gallery(StoryKind::Form);
    // Nobody handles a stray nav activation; processing must still finish
    let result = app
        .handle_app_action(Action::Batch(vec![
            Action::NavActivated("Home".to_string()),
            Action::TogglePanel("one".to_string()),
        ]))
        .await;
    assert_eq!(result, Action::None);

    assert_eq!(app.handle_app_action(Action::Quit).await, Action::Quit);
    assert!(app.should_quit());
}
