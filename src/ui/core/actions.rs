use crate::search::{FetchError, FetchTicket, RemoteOption, TimerHandle};
use std::time::Duration;

/// The stories listed in the gallery sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoryKind {
    Breadcrumb,
    #[default]
    Form,
    MultiForm,
    NavBar,
    SplitLayout,
}

impl StoryKind {
    pub fn all() -> &'static [StoryKind] {
        &[
            StoryKind::Breadcrumb,
            StoryKind::Form,
            StoryKind::MultiForm,
            StoryKind::NavBar,
            StoryKind::SplitLayout,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            StoryKind::Breadcrumb => "Breadcrumb",
            StoryKind::Form => "Form",
            StoryKind::MultiForm => "MultiForm",
            StoryKind::NavBar => "NavBar",
            StoryKind::SplitLayout => "ToggleSplitLayout",
        }
    }

    /// Name used on the command line and in the config file
    pub fn slug(&self) -> &'static str {
        match self {
            StoryKind::Breadcrumb => "breadcrumb",
            StoryKind::Form => "form",
            StoryKind::MultiForm => "multi-form",
            StoryKind::NavBar => "nav-bar",
            StoryKind::SplitLayout => "split-layout",
        }
    }

    /// Accepts either the slug or the title, case-insensitively
    pub fn from_slug(name: &str) -> Option<StoryKind> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|story| story.slug().eq_ignore_ascii_case(name) || story.title().eq_ignore_ascii_case(name))
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Identifies a debounced search field across async round trips
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub story: StoryKind,
    pub field: String,
}

impl FieldKey {
    pub fn new(story: StoryKind, field: impl Into<String>) -> Self {
        Self {
            story,
            field: field.into(),
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.story.slug(), self.field)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Gallery navigation
    SelectStory(StoryKind),

    // Navigation components
    BreadcrumbSelected(usize),
    NavActivated(String),
    TogglePanel(String),

    // Forms
    WizardNext,
    WizardBack,
    WizardGoTo(usize),
    SubmitForm,
    FormSubmitted {
        story: StoryKind,
        payload: String,
    },

    // Debounced remote search
    ArmDebounce {
        field: FieldKey,
        handle: TimerHandle,
        delay: Duration,
    },
    DebounceElapsed {
        field: FieldKey,
        handle: TimerHandle,
    },
    FetchOptions {
        field: FieldKey,
        ticket: FetchTicket,
    },
    OptionsLoaded {
        field: FieldKey,
        ticket: FetchTicket,
        result: Result<Vec<RemoteOption>, FetchError>,
    },
    CancelSearch {
        field: FieldKey,
    },
    OptionSelected {
        field: FieldKey,
        label: Option<String>,
    },

    // UI operations
    ToggleLogs,
    CycleIconTheme,
    Status(String),
    Batch(Vec<Action>),

    // App control
    Quit,
    None,
}

impl Action {
    /// The story an action reported by a background task belongs to
    pub fn target_story(&self) -> Option<StoryKind> {
        match self {
            Action::DebounceElapsed { field, .. }
            | Action::OptionsLoaded { field, .. }
            | Action::OptionSelected { field, .. } => Some(field.story),
            Action::FormSubmitted { story, .. } => Some(*story),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
