use crate::icons::{IconService, NavIcon};
use crate::navigation::NavItem;
use crate::ui::components::common::create_story_block;
use crate::ui::components::NavBarComponent;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const FULL_WIDTH: u16 = 16;
const COMPACT_WIDTH: u16 = 6;

pub struct NavBarStory {
    nav: NavBarComponent,
    compact: bool,
    last_activated: Option<String>,
}

impl NavBarStory {
    pub fn new(icons: IconService) -> Self {
        let items = vec![
            NavItem::new("home", "Home", Action::NavActivated("Home".to_string())).with_icon(NavIcon::Home),
            NavItem::new("search", "Search", Action::NavActivated("Search".to_string())).with_icon(NavIcon::Search),
            NavItem::new("tasks", "Tasks", Action::NavActivated("Tasks".to_string())).with_icon(NavIcon::Assignment),
        ];
        Self {
            nav: NavBarComponent::new(items, icons),
            compact: false,
            last_activated: None,
        }
    }

    pub fn nav(&self) -> &NavBarComponent {
        &self.nav
    }

    pub fn last_activated(&self) -> Option<&str> {
        self.last_activated.as_deref()
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.nav.set_icons(icons);
    }
}

impl Component for NavBarStory {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') {
            self.compact = !self.compact;
            return Action::Status(format!("NavBar: compact {}", if self.compact { "on" } else { "off" }));
        }
        let action = self.nav.handle_key_events(key);
        self.update(action)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let action = self.nav.handle_mouse_events(mouse);
        self.update(action)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NavActivated(label) => {
                log::info!("NavBar: {}", label);
                self.last_activated = Some(label.clone());
                Action::Status(format!("NavBar: {}", label))
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_story_block(" NavBar ", Color::Cyan);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let width = if self.compact { COMPACT_WIDTH } else { FULL_WIDTH };
        let [nav_area, content_area] =
            Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(inner);
        self.nav.render(f, nav_area);

        let mut lines = vec![Line::from(format!(
            " Last activated: {}",
            self.last_activated.as_deref().unwrap_or("nothing yet")
        ))];
        lines.push(Line::default());
        lines.push(Line::styled(
            " ↑/↓ move • Enter activate • c compact",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(Paragraph::new(lines), content_area);
    }
}
