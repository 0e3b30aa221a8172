//! Core UI functionality for the gallery.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, component abstractions, and background task
//! management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and the story catalogue
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Services shared by all stories
//! - [`event_handler`] - Keyboard, mouse and tick events
//! - [`task_manager`] - Debounce timers and option fetches run as tokio tasks
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Context** provides configuration and services
//! 4. **Events** are processed through the [`EventHandler`] system
//! 5. **Tasks** report back through the [`TaskManager`] action channel

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, FieldKey, StoryKind};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager, TaskSlot};
