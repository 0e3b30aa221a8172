use super::submit::ChannelSubmitHandler;
use crate::constants::{MESSAGE_NEED_TWO_FRIENDS, STATUS_FORM_SUBMITTED, STATUS_STEP_BLOCKED};
use crate::form::{FieldKind, FieldRules, FieldSpec, FieldValue, FormController, FormData, FormRow, NumberValue, Rule, Schema};
use crate::icons::IconService;
use crate::search::SearchConfig;
use crate::ui::components::common::{create_instructions_paragraph, create_story_block, shortcuts};
use crate::ui::components::{FormView, StepperComponent};
use crate::ui::core::{Action, Component, StoryKind};
use crate::wizard::{Step, StepOutcome, StepWizard, WizardState};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::{mpsc, watch};

fn required() -> Rule {
    Rule::RequiredWith("Required".to_string())
}

fn friend_columns() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", "Name", FieldKind::Text).required(),
        FieldSpec::new("phone", "Phone Number", FieldKind::Number).required(),
    ]
}

fn wizard_steps() -> Vec<Step> {
    vec![
        Step::new(
            "Personal",
            ["firstName", "lastName", "email"],
            vec![
                FieldSpec::new("firstName", "First Name", FieldKind::Text).required(),
                FieldSpec::new("lastName", "Last Name", FieldKind::Text).required(),
                FieldSpec::new("email", "email", FieldKind::Text).required(),
            ],
        ),
        Step::new(
            "Address",
            ["street", "city", "zip"],
            vec![
                FieldSpec::new("street", "Address Line", FieldKind::Text).required(),
                FieldSpec::new("city", "city", FieldKind::Text).required(),
                FieldSpec::new("zip", "Zip", FieldKind::Number).required(),
            ],
        ),
        Step::new(
            "Friends",
            ["friends"],
            vec![FieldSpec::new(
                "friends",
                "Friends",
                FieldKind::Rows {
                    columns: friend_columns(),
                },
            )],
        ),
    ]
}

fn wizard_schema() -> Schema {
    Schema::new()
        .field("firstName", vec![required()])
        .field("lastName", vec![required()])
        .field("email", vec![required()])
        .field("street", vec![required()])
        .field("city", vec![required()])
        .field("zip", vec![required()])
        .field(
            "friends",
            vec![
                required(),
                Rule::MinItems {
                    min: 2,
                    message: MESSAGE_NEED_TWO_FRIENDS.to_string(),
                },
                Rule::Each(vec![
                    FieldRules::new("name", vec![required()]),
                    FieldRules::new("phone", vec![required()]),
                ]),
            ],
        )
}

fn wizard_defaults() -> FormData {
    let text = |name: &str| (name.to_string(), FieldValue::text(""));
    let first_friend = FormRow::new([
        ("name".to_string(), FieldValue::text("")),
        ("phone".to_string(), FieldValue::Number(NumberValue::Valid(0))),
    ]);
    FormData::from([
        text("firstName"),
        text("lastName"),
        text("email"),
        text("street"),
        text("city"),
        ("zip".to_string(), FieldValue::Number(NumberValue::Valid(0))),
        ("friends".to_string(), FieldValue::Rows(vec![first_friend])),
    ])
}

/// Three-step wizard (Personal, Address, Friends) over one shared form.
pub struct MultiFormStory {
    wizard: StepWizard,
    form: FormController,
    views: Vec<FormView>,
    stepper: StepperComponent,
    state_rx: watch::Receiver<WizardState>,
    icons: IconService,
}

impl MultiFormStory {
    pub fn new(search: &SearchConfig, icons: IconService, sender: mpsc::UnboundedSender<Action>) -> anyhow::Result<Self> {
        let wizard = StepWizard::new(wizard_steps())?;
        let form = FormController::new(
            wizard_schema(),
            wizard_defaults(),
            Box::new(ChannelSubmitHandler::new(StoryKind::MultiForm, sender)),
        );
        let views = wizard
            .steps()
            .iter()
            .map(|step| FormView::new(StoryKind::MultiForm, step.form(), &form, search))
            .collect();
        let labels = wizard.steps().iter().map(|step| step.label().to_string()).collect();
        let stepper = StepperComponent::new(labels, wizard.state(), icons.clone());
        let state_rx = wizard.subscribe();

        Ok(Self {
            wizard,
            form,
            views,
            stepper,
            state_rx,
            icons,
        })
    }

    pub fn wizard(&self) -> &StepWizard {
        &self.wizard
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.stepper.set_icons(icons.clone());
        self.icons = icons;
    }

    pub async fn go_next(&mut self) -> Action {
        let outcome = self.wizard.go_next(&mut self.form).await;
        self.report(outcome)
    }

    pub fn go_back(&mut self) -> Action {
        let outcome = self.wizard.go_back();
        self.report(outcome)
    }

    pub async fn go_to_step(&mut self, target: usize) -> Action {
        let outcome = self.wizard.go_to_step(target, &mut self.form).await;
        self.report(outcome)
    }

    fn report(&mut self, outcome: StepOutcome) -> Action {
        self.sync_stepper();
        match outcome {
            StepOutcome::Moved { to, .. } => {
                Action::Status(format!("MultiForm: step {}", self.wizard.steps()[to].label()))
            }
            StepOutcome::Blocked => Action::Status(STATUS_STEP_BLOCKED.to_string()),
            StepOutcome::Submitted => Action::Status(STATUS_FORM_SUBMITTED.to_string()),
            StepOutcome::Unchanged => Action::None,
        }
    }

    fn sync_stepper(&mut self) {
        if self.state_rx.has_changed().unwrap_or(false) {
            let state = *self.state_rx.borrow_and_update();
            self.stepper.set_state(state);
        }
    }

    fn active_view(&mut self) -> Option<&mut FormView> {
        self.views.get_mut(self.wizard.active_index())
    }
}

impl Component for MultiFormStory {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::PageDown => Action::WizardNext,
            KeyCode::PageUp => Action::WizardBack,
            KeyCode::F(n) if (1..=9).contains(&n) => Action::WizardGoTo(usize::from(n - 1)),
            _ => {
                let index = self.wizard.active_index();
                match self.views.get_mut(index) {
                    Some(view) => view.handle_key(key, &mut self.form),
                    None => Action::None,
                }
            }
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.stepper.handle_mouse_events(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        match self.active_view() {
            Some(view) => view.handle_search_action(action),
            None => action,
        }
    }

    fn captures_input(&self) -> bool {
        true
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.sync_stepper();

        let block = create_story_block(" MultiForm ", Color::Cyan);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [stepper_area, divider_area, title_area, form_area, buttons_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.stepper.render(f, stepper_area);
        f.render_widget(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
            divider_area,
        );

        let step = self.wizard.active_step();
        f.render_widget(
            Paragraph::new(Line::styled(
                step.label().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            title_area,
        );

        if let Some(view) = self.views.get(self.wizard.active_index()) {
            view.render(f, form_area, &self.form, &self.icons);
        }

        let back_style = if self.wizard.can_go_back() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let next_label = if self.wizard.is_last_step() { "Finish" } else { "Next" };
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[ Back ]", back_style),
                Span::raw("  "),
                Span::styled(
                    format!("[ {} ]", next_label),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]))
            .right_aligned(),
            buttons_area,
        );

        let mut help = vec![
            shortcuts::TAB_FOCUS,
            shortcuts::SEPARATOR,
            shortcuts::PAGE_UP_BACK,
            shortcuts::SEPARATOR,
            shortcuts::PAGE_DOWN_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::F_KEYS_JUMP,
        ];
        if self.wizard.is_last_step() {
            help.extend([
                shortcuts::SEPARATOR,
                shortcuts::CTRL_A_ADD,
                shortcuts::SEPARATOR,
                shortcuts::CTRL_D_REMOVE,
            ]);
        }
        f.render_widget(create_instructions_paragraph(&help), help_area);
    }
}
