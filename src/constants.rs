//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Debounced search defaults
/// Delay between the last keystroke and the remote fetch, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
/// Minimum number of characters before a remote fetch is issued
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 3;
/// Simulated latency of the mock option API, in milliseconds
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1000;
/// Upper bound accepted for any configured delay
pub const MAX_DELAY_MS: u64 = 60_000;

// Breadcrumb defaults
pub const DEFAULT_BREADCRUMB_SEPARATOR: &str = ">";

// Form messages
pub const MESSAGE_INVALID_DATE: &str = "Invalid Date";
pub const MESSAGE_FETCH_FAILED: &str = "Error retrieving data";
pub const MESSAGE_NEED_TWO_FRIENDS: &str = "Error: Need at least 2 friends!";
pub const MESSAGE_NO_PANELS: &str = "No Panels selected!";

// Status messages
pub const STATUS_FORM_SUBMITTED: &str = "✅ Form submitted";
pub const STATUS_FORM_INVALID: &str = "❌ Form has validation errors";
pub const STATUS_STEP_BLOCKED: &str = "❌ Fix the highlighted fields to continue";
pub const STATUS_CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Dialog titles
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or Ctrl+L to close";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
/// Below this width the vertical nav bar only shows icons
pub const NAV_BAR_COMPACT_WIDTH: u16 = 12;
/// Number of option rows shown under a combo box
pub const COMBO_BOX_VISIBLE_OPTIONS: usize = 5;
