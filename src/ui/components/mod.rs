//! Reusable UI components

pub mod common;
pub mod inputs;

// Component architecture
pub mod breadcrumb;
pub mod form_view;
pub mod log_panel;
pub mod nav_bar;
pub mod sidebar_component;
pub mod split_layout;
pub mod status_bar;
pub mod stepper;

// Component exports
pub use breadcrumb::BreadcrumbComponent;
pub use form_view::FormView;
pub use log_panel::LogPanel;
pub use nav_bar::NavBarComponent;
pub use sidebar_component::SidebarComponent;
pub use split_layout::{Panel, SplitLayoutComponent};
pub use status_bar::StatusBar;
pub use stepper::StepperComponent;
