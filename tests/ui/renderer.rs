use gallerist::config::Config;
use gallerist::icons::IconTheme;
use gallerist::logger::Logger;
use gallerist::ui::core::{Action, AppContext, Component, StoryKind};
use gallerist::ui::AppComponent;
use ratatui::{backend::TestBackend, Terminal};

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn ascii_gallery(initial: StoryKind) -> AppComponent {
    let mut config = Config::default();
    config.ui.icon_theme = IconTheme::Ascii;
    AppComponent::new(AppContext::new(config, Logger::new()), initial).unwrap()
}

#[tokio::test]
async fn test_every_story_renders() {
    let expected = [
        (StoryKind::Breadcrumb, "Content Three"),
        (StoryKind::Form, "Text Field Label"),
        (StoryKind::MultiForm, "1. Personal"),
        (StoryKind::NavBar, "Last activated"),
        (StoryKind::SplitLayout, "No Panels selected!"),
    ];

    let mut app = ascii_gallery(StoryKind::Form);
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

    for (story, marker) in expected {
        app.handle_app_action(Action::SelectStory(story)).await;
        terminal.draw(|f| app.render(f, f.area())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Stories"), "sidebar missing on {:?}", story);
        assert!(text.contains(marker), "{:?} did not render {:?}", story, marker);
    }
}

#[tokio::test]
async fn test_status_line_and_log_overlay() {
    let mut app = ascii_gallery(StoryKind::NavBar);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    app.handle_app_action(Action::Status("hello from the status line".to_string()))
        .await;
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    assert!(screen_text(&terminal).contains("hello from the status line"));

    app.logger().log("an entry for the overlay".to_string());
    app.handle_app_action(Action::ToggleLogs).await;
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Logs"));
    assert!(text.contains("an entry for the overlay"));
}

#[tokio::test]
async fn test_tiny_terminal_does_not_panic() {
    let mut app = ascii_gallery(StoryKind::MultiForm);
    let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
}
