use crate::icons::IconService;
use crate::navigation::{BreadcrumbTrail, NavItem};
use crate::ui::components::common::{create_instructions_paragraph, create_story_block, shortcuts};
use crate::ui::components::BreadcrumbComponent;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const LEVELS: [&str; 3] = ["One", "Two", "Three"];

/// A breadcrumb over three levels with Back/Next controls.
///
/// The trail always shows the levels up to the current one; choosing a crumb
/// jumps back to that level.
pub struct BreadcrumbStory {
    trail: BreadcrumbTrail,
    crumb: BreadcrumbComponent,
}

impl BreadcrumbStory {
    pub fn new(separator: &str, icons: IconService) -> Self {
        let mut story = Self {
            trail: BreadcrumbTrail::new(LEVELS.len()),
            crumb: BreadcrumbComponent::new(separator, icons),
        };
        story.rebuild_items();
        story
    }

    pub fn trail(&self) -> &BreadcrumbTrail {
        &self.trail
    }

    pub fn crumb(&self) -> &BreadcrumbComponent {
        &self.crumb
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.crumb.set_icons(icons);
    }

    /// Label of the current level, shown as the content heading
    pub fn content_label(&self) -> &'static str {
        self.trail
            .current()
            .and_then(|index| LEVELS.get(index).copied())
            .unwrap_or("Unknown")
    }

    fn rebuild_items(&mut self) {
        let items = LEVELS
            .iter()
            .take(self.trail.visible())
            .enumerate()
            .map(|(index, label)| NavItem::new(label.to_lowercase(), *label, Action::BreadcrumbSelected(index)))
            .collect();
        self.crumb.set_items(items);
    }

    fn moved(&mut self) -> Action {
        self.rebuild_items();
        Action::Status(format!("Breadcrumb: Content {}", self.content_label()))
    }
}

impl Component for BreadcrumbStory {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::PageUp | KeyCode::Char('b') => {
                if self.trail.back() {
                    self.moved()
                } else {
                    Action::None
                }
            }
            KeyCode::PageDown | KeyCode::Char('n') => {
                if self.trail.next() {
                    self.moved()
                } else {
                    Action::None
                }
            }
            _ => {
                let action = self.crumb.handle_key_events(key);
                self.update(action)
            }
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let action = self.crumb.handle_mouse_events(mouse);
        self.update(action)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::BreadcrumbSelected(index) => {
                if self.trail.select(index) {
                    self.moved()
                } else {
                    Action::None
                }
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_story_block(" Breadcrumb ", Color::Cyan);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [crumb_area, _, content_area, _, buttons_area, _, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.crumb.render(f, crumb_area);

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("Content {}", self.content_label()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )))
            .wrap(Wrap { trim: true }),
            content_area,
        );

        let button = |label: &'static str, enabled: bool| {
            let style = if enabled {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("[ {} ]", label), style)
        };
        f.render_widget(
            Paragraph::new(Line::from(vec![
                button("Back", self.trail.can_go_back()),
                Span::raw("  "),
                button("Next", self.trail.can_go_next()),
            ])),
            buttons_area,
        );

        f.render_widget(
            create_instructions_paragraph(&[
                shortcuts::ARROWS_MOVE,
                shortcuts::SEPARATOR,
                shortcuts::ENTER_SELECT,
                shortcuts::SEPARATOR,
                shortcuts::PAGE_UP_BACK,
                shortcuts::SEPARATOR,
                shortcuts::PAGE_DOWN_NEXT,
            ]),
            help_area,
        );
    }
}
