use anyhow::{Context, Result};
use clap::Parser;
use gallerist::config::Config;
use gallerist::logger::Logger;
use gallerist::ui::core::{AppContext, StoryKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse terminal form and navigation widgets as interactive stories.")]
struct Cli {
    /// Configuration file to use instead of the default lookup
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Story to open first (breadcrumb, form, multi-form, nav-bar, split-layout)
    #[arg(long, value_name = "NAME")]
    story: Option<String>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    generate_config: Option<PathBuf>,

    /// Print the available stories and exit
    #[arg(long)]
    list_stories: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = if path.as_os_str().is_empty() {
            Config::get_default_config_path()?
        } else {
            path
        };
        return Config::generate_default_config(path);
    }

    if cli.list_stories {
        for story in StoryKind::all() {
            println!("{:<14} {}", story.slug(), story.title());
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let story_name = cli.story.as_deref().unwrap_or(&config.ui.default_story);
    let initial = StoryKind::from_slug(story_name).with_context(|| {
        let available: Vec<&str> = StoryKind::all().iter().map(|s| s.slug()).collect();
        format!("Unknown story '{}'. Available stories: {}", story_name, available.join(", "))
    })?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install()?;
    log::info!("Starting gallerist with the {} story", initial.title());

    let context = AppContext::new(config, logger);
    gallerist::ui::run_app(context, initial).await
}
