//! Multi-step wizard state machine.
//!
//! The wizard owns nothing but the active step index. Validation and
//! submission are delegated to a [`FormCollaborator`]; when validation fails
//! the wizard simply stays where it is and the collaborator is responsible for
//! surfacing the errors.
//!
//! Every transition publishes a [`WizardState`] snapshot on a watch channel so
//! renderers can observe the wizard without borrowing it.

use crate::form::{FieldSpec, FormCollaborator};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("a wizard needs at least one step")]
    NoSteps,
}

/// One page of a multi-page form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    label: String,
    field_names: Vec<String>,
    form: Vec<FieldSpec>,
}

impl Step {
    pub fn new<I, S>(label: impl Into<String>, field_names: I, form: Vec<FieldSpec>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            field_names: field_names.into_iter().map(Into::into).collect(),
            form,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Fields validated before leaving this step
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    pub fn form(&self) -> &[FieldSpec] {
        &self.form
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    pub active_index: usize,
    pub step_count: usize,
}

impl WizardState {
    pub fn is_last_step(&self) -> bool {
        self.active_index + 1 == self.step_count
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { from: usize, to: usize },
    /// Validation (or the final submit validation) failed
    Blocked,
    /// The last step advanced and the form was submitted
    Submitted,
    /// Nothing to do (back at the first step, or an out-of-range target)
    Unchanged,
}

pub struct StepWizard {
    steps: Vec<Step>,
    active_index: usize,
    state_tx: watch::Sender<WizardState>,
}

impl StepWizard {
    pub fn new(steps: Vec<Step>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::NoSteps);
        }
        let (state_tx, _) = watch::channel(WizardState {
            active_index: 0,
            step_count: steps.len(),
        });
        Ok(Self {
            steps,
            active_index: 0,
            state_tx,
        })
    }

    pub fn state(&self) -> WizardState {
        WizardState {
            active_index: self.active_index,
            step_count: self.steps.len(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<WizardState> {
        self.state_tx.subscribe()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_step(&self) -> &Step {
        &self.steps[self.active_index]
    }

    pub fn is_last_step(&self) -> bool {
        self.active_index + 1 == self.steps.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.active_index > 0
    }

    /// Validate the current step and advance, or submit on the last step.
    pub async fn go_next<F>(&mut self, form: &mut F) -> StepOutcome
    where
        F: FormCollaborator + ?Sized,
    {
        if !self.validate_current(form).await {
            return StepOutcome::Blocked;
        }

        if self.is_last_step() {
            return if form.handle_submit().await {
                log::info!("Wizard: submitted from step {}", self.active_index);
                StepOutcome::Submitted
            } else {
                StepOutcome::Blocked
            };
        }

        self.move_to(self.active_index + 1)
    }

    /// Go back one step. Never validates.
    pub fn go_back(&mut self) -> StepOutcome {
        if self.active_index == 0 {
            return StepOutcome::Unchanged;
        }
        self.move_to(self.active_index - 1)
    }

    /// Jump to a step. Backward jumps are immediate; any other jump first
    /// validates the current step.
    pub async fn go_to_step<F>(&mut self, target: usize, form: &mut F) -> StepOutcome
    where
        F: FormCollaborator + ?Sized,
    {
        if target >= self.steps.len() {
            log::debug!("Wizard: ignoring jump to missing step {}", target);
            return StepOutcome::Unchanged;
        }

        if target < self.active_index {
            return self.move_to(target);
        }

        if !self.validate_current(form).await {
            return StepOutcome::Blocked;
        }
        self.move_to(target)
    }

    async fn validate_current<F>(&self, form: &mut F) -> bool
    where
        F: FormCollaborator + ?Sized,
    {
        let fields = self.active_step().field_names().to_vec();
        let passed = form.trigger(&fields).await;
        if !passed {
            log::debug!("Wizard: step {} blocked by validation", self.active_index);
        }
        passed
    }

    fn move_to(&mut self, target: usize) -> StepOutcome {
        let from = self.active_index;
        self.active_index = target;
        self.state_tx.send_replace(self.state());
        log::debug!("Wizard: step {} -> {}", from, target);
        StepOutcome::Moved { from, to: target }
    }
}
