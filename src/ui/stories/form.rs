use super::submit::ChannelSubmitHandler;
use crate::constants::{STATUS_FORM_INVALID, STATUS_FORM_SUBMITTED};
use crate::form::{FieldKind, FieldSpec, FormCollaborator, FormController, FormData, Rule, Schema};
use crate::icons::IconService;
use crate::search::SearchConfig;
use crate::ui::components::common::{create_instructions_paragraph, create_story_block, shortcuts};
use crate::ui::components::FormView;
use crate::ui::core::{Action, Component, StoryKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

fn form_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("textField", "Text Field Label", FieldKind::Text).required(),
        FieldSpec::new(
            "combobox",
            "Combobox Label",
            FieldKind::ComboBox {
                options: vec!["1".to_string(), "2".to_string(), "N/A".to_string()],
                free_solo: false,
            },
        )
        .required(),
        FieldSpec::new("date", "Date Field Label", FieldKind::Date).required(),
        FieldSpec::new("externalCombobox", "Combobox Label", FieldKind::RemoteComboBox { free_solo: true }).required(),
    ]
}

fn form_schema() -> Schema {
    Schema::new()
        .field("textField", vec![Rule::Required, Rule::MinLength(5)])
        .field("combobox", vec![Rule::Required])
        .field("date", vec![Rule::Required, Rule::ValidDate])
        .field("externalCombobox", vec![Rule::Required])
}

/// Single-page form with one input of each kind and a submit shortcut.
pub struct FormStory {
    form: FormController,
    view: FormView,
    icons: IconService,
    last_submission: Option<String>,
}

impl FormStory {
    pub fn new(search: &SearchConfig, icons: IconService, sender: mpsc::UnboundedSender<Action>) -> Self {
        let fields = form_fields();
        let defaults: FormData = fields
            .iter()
            .map(|spec| (spec.name.clone(), spec.empty_value()))
            .collect();
        let form = FormController::new(
            form_schema(),
            defaults,
            Box::new(ChannelSubmitHandler::new(StoryKind::Form, sender)),
        );
        let view = FormView::new(StoryKind::Form, &fields, &form, search);
        Self {
            form,
            view,
            icons,
            last_submission: None,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn last_submission(&self) -> Option<&str> {
        self.last_submission.as_deref()
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Validate everything and hand the data to the submit handler
    pub async fn submit(&mut self) -> Action {
        if self.form.handle_submit().await {
            Action::Status(STATUS_FORM_SUBMITTED.to_string())
        } else {
            Action::Status(STATUS_FORM_INVALID.to_string())
        }
    }
}

impl Component for FormStory {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return Action::SubmitForm;
        }
        self.view.handle_key(key, &mut self.form)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FormSubmitted { payload, .. } => {
                self.last_submission = Some(payload);
                Action::None
            }
            other => self.view.handle_search_action(other),
        }
    }

    fn captures_input(&self) -> bool {
        true
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_story_block(" Form ", Color::Cyan);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [fields_area, summary_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        self.view.render(f, fields_area, &self.form, &self.icons);

        let summary = match (&self.last_submission, self.form.submit_count()) {
            (Some(_), count) => format!(" Submitted {} time(s); see logs for the data", count),
            (None, _) if self.form.has_errors() => format!(" {} field(s) need attention", self.form.errors().len()),
            _ => String::new(),
        };
        f.render_widget(
            Paragraph::new(Line::styled(summary, Style::default().fg(Color::DarkGray))),
            summary_area,
        );

        f.render_widget(
            create_instructions_paragraph(&[
                shortcuts::TAB_FOCUS,
                shortcuts::SEPARATOR,
                shortcuts::ENTER_SELECT,
                shortcuts::SEPARATOR,
                shortcuts::CTRL_S_SUBMIT,
            ]),
            help_area,
        );
    }
}
