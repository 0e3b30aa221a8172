use crate::config::SplitLayoutConfig;
use crate::icons::{IconService, NavIcon};
use crate::ui::components::common::{create_instructions_paragraph, create_story_block, shortcuts};
use crate::ui::components::{Panel, SplitLayoutComponent};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Color,
    Frame,
};

pub struct SplitLayoutStory {
    layout: SplitLayoutComponent,
}

impl SplitLayoutStory {
    pub fn new(config: &SplitLayoutConfig, icons: IconService) -> Self {
        let panels = vec![
            Panel::new("one", NavIcon::Snowflake, "One"),
            Panel::new("two", NavIcon::Account, "Two"),
            Panel::new("three", NavIcon::Api, "Three"),
        ];
        Self {
            layout: SplitLayoutComponent::new(
                panels,
                config.initial_panel.as_deref(),
                config.minimum_panels,
                config.maximum_panels,
                icons,
            ),
        }
    }

    pub fn layout(&self) -> &SplitLayoutComponent {
        &self.layout
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.layout.set_icons(icons);
    }
}

impl Component for SplitLayoutStory {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let action = self.layout.handle_key_events(key);
        self.layout.update(action)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let action = self.layout.handle_mouse_events(mouse);
        self.layout.update(action)
    }

    fn update(&mut self, action: Action) -> Action {
        self.layout.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_story_block(" ToggleSplitLayout ", Color::Cyan);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [layout_area, help_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        self.layout.render(f, layout_area);
        f.render_widget(
            create_instructions_paragraph(&[
                shortcuts::ARROWS_MOVE,
                shortcuts::SEPARATOR,
                shortcuts::SPACE_TOGGLE,
                shortcuts::SEPARATOR,
                ("1-3", Color::Cyan, " Toggle panel"),
            ]),
            help_area,
        );
    }
}
