use gallerist::config::Config;
use gallerist::icons::IconTheme;
use gallerist::logger::Logger;
use gallerist::search::OptionFetcher;
use gallerist::ui::core::context::AppContext;

#[tokio::test(start_paused = true)]
async fn test_context_uses_configured_theme_and_mock_api() {
    let mut config = Config::default();
    config.ui.icon_theme = IconTheme::Ascii;

    let context = AppContext::new(config, Logger::new());
    assert_eq!(context.icons.theme(), IconTheme::Ascii);

    let options = context.fetcher.fetch("abc").await.unwrap();
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["abc-one", "abc-two", "abc-three"]);
    assert!(context.fetcher.fetch("error").await.is_err());
}
