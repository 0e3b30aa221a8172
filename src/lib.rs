//! Gallerist - a terminal gallery of form and navigation components
//!
//! This library provides the state machines behind a small set of UI
//! components (a multi-step form wizard, a debounced remote search, a
//! toggleable split layout, breadcrumb and navigation bar) together with a
//! Ratatui front end that shows each of them as a story.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`form`] - Form values, validation schema and the form controller
//! * [`wizard`] - Multi-step wizard state machine
//! * [`search`] - Debounced remote option search
//! * [`panels`] - Active-panel selection for the split layout
//! * [`navigation`] - Navigation items and the breadcrumb trail
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Form state, validation and submission
pub mod form;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Navigation items and breadcrumb state
pub mod navigation;

/// Active panel selection with bounds
pub mod panels;

/// Debounced search over a remote option source
pub mod search;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

/// Multi-step form wizard
pub mod wizard;
