use crate::logger::Logger;
use crate::ui::components::{LogPanel, SidebarComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, StoryKind},
    event_handler::EventType,
    task_manager::TaskManager,
    AppContext, Component,
};
use crate::ui::stories::{BreadcrumbStory, FormStory, MultiFormStory, NavBarStory, SplitLayoutStory};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use std::collections::VecDeque;
use tokio::sync::mpsc;

/// The gallery: a story list on the left, the active story on the right and
/// a status line underneath.
///
/// Keys go to the log overlay when it is open, then to the sidebar, then to
/// the active story. Single-letter shortcuts only fire when the story does
/// not hold a text field with focus.
pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    status_bar: StatusBar,
    log_panel: LogPanel,

    // Stories
    breadcrumb: BreadcrumbStory,
    form: FormStory,
    multi_form: MultiFormStory,
    nav_bar: NavBarStory,
    split_layout: SplitLayoutStory,
    active: StoryKind,

    // Services
    context: AppContext,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(context: AppContext, initial: StoryKind) -> anyhow::Result<Self> {
        let (task_manager, background_action_rx) = TaskManager::new();
        let sender = task_manager.action_sender();
        let config = &context.config;
        let icons = context.icons.clone();
        let search = config.search.search_config(false);

        let mut app = Self {
            sidebar: SidebarComponent::new(initial),
            status_bar: StatusBar::new(),
            log_panel: LogPanel::default(),
            breadcrumb: BreadcrumbStory::new(&config.breadcrumb.separator, icons.clone()),
            form: FormStory::new(&search, icons.clone(), sender.clone()),
            multi_form: MultiFormStory::new(&search, icons.clone(), sender)?,
            nav_bar: NavBarStory::new(icons.clone()),
            split_layout: SplitLayoutStory::new(&config.split_layout, icons),
            active: initial,
            context,
            task_manager,
            background_action_rx,
            should_quit: false,
        };
        app.story_mut(initial).on_focus();
        log::info!("Gallery: opened on {}", initial.title());
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_story(&self) -> StoryKind {
        self.active
    }

    pub fn logger(&self) -> &Logger {
        &self.context.logger
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_bar.message()
    }

    pub fn is_log_panel_visible(&self) -> bool {
        self.log_panel.is_visible()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    pub fn breadcrumb(&self) -> &BreadcrumbStory {
        &self.breadcrumb
    }

    pub fn form(&self) -> &FormStory {
        &self.form
    }

    pub fn multi_form(&self) -> &MultiFormStory {
        &self.multi_form
    }

    pub fn nav_bar(&self) -> &NavBarStory {
        &self.nav_bar
    }

    pub fn split_layout(&self) -> &SplitLayoutStory {
        &self.split_layout
    }

    fn story_mut(&mut self, story: StoryKind) -> &mut dyn Component {
        match story {
            StoryKind::Breadcrumb => &mut self.breadcrumb,
            StoryKind::Form => &mut self.form,
            StoryKind::MultiForm => &mut self.multi_form,
            StoryKind::NavBar => &mut self.nav_bar,
            StoryKind::SplitLayout => &mut self.split_layout,
        }
    }

    fn story(&self, story: StoryKind) -> &dyn Component {
        match story {
            StoryKind::Breadcrumb => &self.breadcrumb,
            StoryKind::Form => &self.form,
            StoryKind::MultiForm => &self.multi_form,
            StoryKind::NavBar => &self.nav_bar,
            StoryKind::SplitLayout => &self.split_layout,
        }
    }

    /// Keys nobody else used. Letters are skipped while the story takes text.
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if self.story(self.active).captures_input() {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                log::debug!("Global key: {:?} - quitting", key.code);
                Action::Quit
            }
            KeyCode::Char('G') => Action::ToggleLogs,
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.log_panel.is_visible() {
            return match key.code {
                KeyCode::Char('c') if ctrl => Action::Quit,
                KeyCode::Char('l') if ctrl => Action::ToggleLogs,
                KeyCode::Esc | KeyCode::Char('G') => Action::ToggleLogs,
                _ => {
                    self.log_panel.handle_key(key);
                    Action::None
                }
            };
        }

        let sidebar_action = self.sidebar.handle_key_events(key);
        if !sidebar_action.is_none() {
            return sidebar_action;
        }

        match key.code {
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Char('l') if ctrl => return Action::ToggleLogs,
            _ => {}
        }

        let story_action = self.story_mut(self.active).handle_key_events(key);
        if !story_action.is_none() {
            return story_action;
        }

        self.handle_global_key(key)
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.log_panel.is_visible() {
            return Action::None;
        }
        let sidebar_action = self.sidebar.handle_mouse_events(mouse);
        if !sidebar_action.is_none() {
            return sidebar_action;
        }
        self.story_mut(self.active).handle_mouse_events(mouse)
    }

    fn select_story(&mut self, story: StoryKind) {
        if story != self.active {
            self.story_mut(self.active).on_blur();
            self.active = story;
            self.story_mut(story).on_focus();
        }
        self.sidebar.update(Action::SelectStory(story));
        self.status_bar.set_message(format!("📖 {}", story.title()));
        log::info!("Gallery: showing {}", story.title());
    }

    fn cycle_icon_theme(&mut self) {
        self.context.icons.cycle_icon_theme();
        let icons = self.context.icons.clone();
        self.breadcrumb.set_icons(icons.clone());
        self.form.set_icons(icons.clone());
        self.multi_form.set_icons(icons.clone());
        self.nav_bar.set_icons(icons.clone());
        self.split_layout.set_icons(icons);
        self.status_bar
            .set_message(format!("Icons: {:?}", self.context.icons.theme()));
    }

    /// Handle app-level actions, including whatever they lead to.
    ///
    /// Returns [`Action::Quit`] once a quit was requested.
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            match self.apply_action(action).await {
                Action::None => {}
                Action::Batch(actions) => queue.extend(actions),
                follow_up => queue.push_back(follow_up),
            }
        }

        if self.should_quit {
            Action::Quit
        } else {
            Action::None
        }
    }

    async fn apply_action(&mut self, action: Action) -> Action {
        match action {
            Action::None => Action::None,
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                Action::None
            }
            Action::Batch(actions) => Action::Batch(actions),
            Action::SelectStory(story) => {
                self.select_story(story);
                Action::None
            }
            Action::ToggleLogs => {
                self.log_panel.toggle();
                Action::None
            }
            Action::CycleIconTheme => {
                self.cycle_icon_theme();
                Action::None
            }
            Action::Status(message) => {
                log::info!("Status: {}", message);
                self.status_bar.set_message(message);
                Action::None
            }

            // Wizard navigation awaits the form's validation
            Action::WizardNext => self.multi_form.go_next().await,
            Action::WizardBack => self.multi_form.go_back(),
            Action::WizardGoTo(step) => self.multi_form.go_to_step(step).await,
            Action::SubmitForm => self.form.submit().await,

            // Background work
            Action::ArmDebounce { field, handle, delay } => {
                self.task_manager.spawn_debounce(field, handle, delay);
                Action::None
            }
            Action::FetchOptions { field, ticket } => {
                log::info!("Search: fetching options for {} with '{}'", field, ticket.query());
                let fetcher = self.context.fetcher.clone();
                self.task_manager.spawn_fetch(field, ticket, fetcher);
                Action::None
            }
            Action::CancelSearch { field } => {
                log::debug!("Search: nothing to fetch for {}", field);
                self.task_manager.cancel_field(&field);
                Action::None
            }
            Action::OptionSelected { field, label } => {
                log::info!("Search: {} option changed to {:?}", field, label);
                Action::None
            }
            Action::FormSubmitted { story, payload } => {
                log::info!("Form: {} submitted", story.title());
                self.route_to_story(story, Action::FormSubmitted { story, payload })
            }

            other => {
                let story = other.target_story().unwrap_or(self.active);
                self.route_to_story(story, other)
            }
        }
    }

    /// Hand an action to a story. A story that passes it back unchanged had
    /// no use for it.
    fn route_to_story(&mut self, story: StoryKind, action: Action) -> Action {
        match self.story_mut(story).update(action.clone()) {
            unchanged if unchanged == action => {
                log::debug!("Gallery: {} ignored {:?}", story.title(), unchanged);
                Action::None
            }
            follow_up => follow_up,
        }
    }

    /// Drain actions reported by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {:?}", action);
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", completed_tasks.len());
        }

        actions
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action).await;
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.route_mouse(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        self.sidebar.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let sidebar_width = self.context.config.ui.sidebar_width.min(rect.width / 2);
        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(rect);
        let [story_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(main_area);

        self.sidebar.render(f, sidebar_area);
        let active = self.active;
        self.story_mut(active).render(f, story_area);

        self.status_bar.set_busy(self.task_manager.task_count());
        self.status_bar.render(f, status_area);

        if self.log_panel.is_visible() {
            self.log_panel.render(f, rect, &self.context.logger);
        }
    }
}
