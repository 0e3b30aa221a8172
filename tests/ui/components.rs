#[path = "components/breadcrumb.rs"]
mod breadcrumb;

#[path = "components/nav_bar.rs"]
mod nav_bar;

#[path = "components/rows_field.rs"]
mod rows_field;

#[path = "components/sidebar_component.rs"]
mod sidebar_component;

#[path = "components/split_layout.rs"]
mod split_layout;

#[path = "components/stepper.rs"]
mod stepper;

use ratatui::{backend::TestBackend, Terminal};

/// Rendered screen as plain text, one line per row
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
