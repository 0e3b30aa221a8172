//! Configuration management for Gallerist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    DEFAULT_BREADCRUMB_SEPARATOR, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_LENGTH, DEFAULT_MOCK_LATENCY_MS,
    MAX_DELAY_MS, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH, STATUS_CONFIG_GENERATED,
};
use crate::icons::IconTheme;
use crate::search::SearchConfig;
use crate::ui::core::StoryKind;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub search: SearchSettings,
    pub split_layout: SplitLayoutConfig,
    pub breadcrumb: BreadcrumbConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Story shown on startup
    /// Options: "breadcrumb", "form", "multi-form", "nav-bar", "split-layout"
    pub default_story: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Sidebar width in columns
    pub sidebar_width: u16,
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Debounced remote search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Quiet period after the last keystroke before fetching
    pub debounce_ms: u64,
    /// Queries shorter than this never reach the option API
    pub min_query_length: usize,
    /// Simulated latency of the mock option API
    pub mock_latency_ms: u64,
}

/// Toggleable split layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitLayoutConfig {
    pub minimum_panels: usize,
    /// Defaults to the number of panels when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_panels: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_panel: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    pub separator: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file in the data directory
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_story: StoryKind::Form.slug().to_string(),
            mouse_enabled: true,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
        }
    }
}

impl SearchSettings {
    /// Search parameters for one remote combo box
    pub fn search_config(&self, free_solo: bool) -> SearchConfig {
        SearchConfig {
            debounce: Duration::from_millis(self.debounce_ms),
            min_query_length: self.min_query_length,
            free_solo,
        }
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}

impl Default for SplitLayoutConfig {
    fn default() -> Self {
        Self {
            minimum_panels: 0,
            maximum_panels: None,
            initial_panel: None,
        }
    }
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_BREADCRUMB_SEPARATOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("gallerist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("gallerist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        if StoryKind::from_slug(&self.ui.default_story).is_none() {
            let available: Vec<&str> = StoryKind::all().iter().map(|s| s.slug()).collect();
            anyhow::bail!(
                "default_story '{}' not found. Available stories: {}",
                self.ui.default_story,
                available.join(", ")
            );
        }

        if self.search.debounce_ms > MAX_DELAY_MS {
            anyhow::bail!("debounce_ms cannot exceed {}", MAX_DELAY_MS);
        }
        if self.search.mock_latency_ms > MAX_DELAY_MS {
            anyhow::bail!("mock_latency_ms cannot exceed {}", MAX_DELAY_MS);
        }
        if self.search.min_query_length == 0 {
            anyhow::bail!("min_query_length must be at least 1");
        }

        if let Some(maximum) = self.split_layout.maximum_panels {
            if maximum < self.split_layout.minimum_panels {
                anyhow::bail!(
                    "maximum_panels ({}) cannot be lower than minimum_panels ({})",
                    maximum,
                    self.split_layout.minimum_panels
                );
            }
        }

        if self.breadcrumb.separator.trim().is_empty() {
            anyhow::bail!("breadcrumb separator cannot be empty");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Gallerist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::INPUT_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", STATUS_CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("gallerist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
