//! UI module for the gallery
//!
//! This module handles the story pages, the reusable components they are
//! built from, rendering, and user interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;
pub mod stories;

pub use app_component::AppComponent;
pub use renderer::{run_app, run_app_loop};
