//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the gallery,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Icons available to navigation items and panel toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    Home,
    Search,
    Assignment,
    Snowflake,
    Account,
    Api,
}

/// Navigation icons
#[derive(Debug, Clone)]
pub struct NavIcons {
    pub home: &'static str,
    pub search: &'static str,
    pub assignment: &'static str,
    pub snowflake: &'static str,
    pub account: &'static str,
    pub api: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub warning: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub loading: &'static str,
    pub selected: &'static str,
}

/// Stepper markers
#[derive(Debug, Clone)]
pub struct StepIcons {
    pub done: &'static str,
    pub active: &'static str,
    pub pending: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub nav: NavIcons,
    pub ui: UiIcons,
    pub step: StepIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                home: "🏠",
                search: "🔍",
                assignment: "📋",
                snowflake: "❄️",
                account: "👤",
                api: "🔌",
            },
            ui: UiIcons {
                warning: "⚠️",
                error: "❌",
                success: "✅",
                loading: "⏳",
                selected: "👉",
            },
            step: StepIcons {
                done: "✅",
                active: "🔵",
                pending: "⚪",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                home: "⌂",
                search: "⌕",
                assignment: "☰",
                snowflake: "❄",
                account: "◉",
                api: "⚙",
            },
            ui: UiIcons {
                warning: "⚠",
                error: "✗",
                success: "✓",
                loading: "⟳",
                selected: "▸",
            },
            step: StepIcons {
                done: "●",
                active: "◉",
                pending: "○",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                home: "H",
                search: "S",
                assignment: "T",
                snowflake: "*",
                account: "@",
                api: "&",
            },
            ui: UiIcons {
                warning: "!",
                error: "X",
                success: "+",
                loading: "...",
                selected: ">",
            },
            step: StepIcons {
                done: "[x]",
                active: "[>]",
                pending: "[ ]",
            },
        }
    }

    #[must_use]
    pub fn nav(&self, icon: NavIcon) -> &'static str {
        let nav = self.icons().nav;
        match icon {
            NavIcon::Home => nav.home,
            NavIcon::Search => nav.search,
            NavIcon::Assignment => nav.assignment,
            NavIcon::Snowflake => nav.snowflake,
            NavIcon::Account => nav.account,
            NavIcon::Api => nav.api,
        }
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn loading(&self) -> &'static str {
        self.icons().ui.loading
    }

    #[must_use]
    pub fn selected(&self) -> &'static str {
        self.icons().ui.selected
    }

    /// Marker for a stepper entry relative to the active step
    #[must_use]
    pub fn step(&self, index: usize, active: usize) -> &'static str {
        let step = self.icons().step;
        match index.cmp(&active) {
            std::cmp::Ordering::Less => step.done,
            std::cmp::Ordering::Equal => step.active,
            std::cmp::Ordering::Greater => step.pending,
        }
    }
}
