//! Utility modules for the gallery.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date parsing and normalization for date input fields

pub mod datetime;
