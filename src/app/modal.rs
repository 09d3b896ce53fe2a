//! Registration modal state.

use crate::domain::Job;
use crate::registration::{apply_link, Field, FieldErrors, RegistrationForm};

/// Registration modal opened on one job.
///
/// Lifecycle: fields are edited until a submit passes validation, at which
/// point `apply_link` is filled in and the form becomes read-only. `reset`
/// returns to an empty form for the same job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationModal {
    pub job: Job,
    pub form: RegistrationForm,
    pub focus: Field,
    pub errors: FieldErrors,
    pub apply_link: Option<String>,
}

impl RegistrationModal {
    #[must_use]
    pub fn new(job: Job) -> Self {
        Self {
            job,
            form: RegistrationForm::default(),
            focus: Field::default(),
            errors: FieldErrors::default(),
            apply_link: None,
        }
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.apply_link.is_some()
    }

    /// Appends to the focused field and clears its error message.
    pub fn push_char(&mut self, c: char) {
        if self.is_submitted() {
            return;
        }
        self.form.value_mut(self.focus).push(c);
        self.errors.clear(self.focus);
    }

    pub fn pop_char(&mut self) {
        if self.is_submitted() {
            return;
        }
        self.form.value_mut(self.focus).pop();
        self.errors.clear(self.focus);
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Validates the form; on success synthesizes the apply link.
    ///
    /// On failure focus moves to the first invalid field.
    pub fn submit(&mut self, base_url: &str) -> bool {
        match self.form.validate() {
            Ok(()) => {
                let link = apply_link(base_url, &self.job.id, &self.form.email);
                tracing::debug!(job_id = %self.job.id, "registration accepted");
                self.errors = FieldErrors::default();
                self.apply_link = Some(link);
                true
            }
            Err(errors) => {
                tracing::debug!(?errors, "registration rejected");
                if let Some(first) = [Field::Email, Field::Password, Field::ConfirmPassword]
                    .into_iter()
                    .find(|field| errors.get(*field).is_some())
                {
                    self.focus = first;
                }
                self.errors = errors;
                false
            }
        }
    }

    /// Clears the form for another application to the same job.
    pub fn reset(&mut self) {
        let job = self.job.clone();
        *self = Self::new(job);
    }
}
