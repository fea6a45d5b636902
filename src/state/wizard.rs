/// Step tracking for the intake forms
///
/// A wizard owns a form's field bag plus a 1-based step index. Steps are
/// totally ordered with linear forward/back navigation. Each step validates
/// only its own fields before the wizard moves on; submission happens from
/// the last step and either completes or leaves everything in place for a retry.
use std::collections::BTreeMap;

/// A validation failure keyed by field name
pub type FieldErrors = BTreeMap<&'static str, String>;

/// A form that can be split into ordered steps
pub trait StepForm: Default {
    /// Titles of the steps, in order; the length is the step count
    const STEPS: &'static [&'static str];

    /// Check the required fields of a single step (1-based)
    fn validate_step(&self, step: usize) -> FieldErrors;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
    /// The last submission was rejected; the form is still editable
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Wizard<F> {
    step: usize,
    phase: Phase,
    errors: FieldErrors,
    pub form: F,
}

impl<F: StepForm> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: StepForm> Wizard<F> {
    pub fn new() -> Self {
        Self::with_form(F::default())
    }

    pub fn with_form(form: F) -> Self {
        Self {
            step: 1,
            phase: Phase::Editing,
            errors: FieldErrors::new(),
            form,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        F::STEPS.len()
    }

    pub fn step_title(&self) -> &'static str {
        F::STEPS[self.step - 1]
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_last_step(&self) -> bool {
        self.step == self.step_count()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// Errors from the most recent validation of the current step
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Edit access to the field bag; clears a stale submission error
    pub fn form_mut(&mut self) -> &mut F {
        if matches!(self.phase, Phase::Failed(_)) {
            self.phase = Phase::Editing;
        }
        &mut self.form
    }

    /// Validate the current step and move forward.
    ///
    /// Returns `false` (and records errors) when the step is incomplete or
    /// when already on the last step.
    pub fn advance(&mut self) -> bool {
        if !self.is_editable() || self.is_last_step() {
            return false;
        }
        self.errors = self.form.validate_step(self.step);
        if !self.errors.is_empty() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Move one step back; never validates
    pub fn back(&mut self) {
        if self.is_editable() && self.step > 1 {
            self.step -= 1;
            self.errors.clear();
        }
    }

    /// Start a submission from the last step.
    ///
    /// Returns `false` when not on the last step, when a submission is
    /// already in flight, or when the last step fails validation.
    pub fn begin_submit(&mut self) -> bool {
        if !self.is_editable() || !self.is_last_step() {
            return false;
        }
        self.errors = self.form.validate_step(self.step);
        if !self.errors.is_empty() {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Record the collaborator's answer for an in-flight submission
    pub fn finish(&mut self, outcome: Result<(), String>) {
        if self.phase != Phase::Submitting {
            return;
        }
        self.phase = match outcome {
            Ok(()) => Phase::Submitted,
            Err(message) => Phase::Failed(message),
        };
    }

    /// Back to a blank first step
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn is_editable(&self) -> bool {
        matches!(self.phase, Phase::Editing | Phase::Failed(_))
    }
}
