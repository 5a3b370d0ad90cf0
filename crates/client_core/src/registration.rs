use shared::domain::{Credentials, RegistrationDraft};
use tracing::debug;

use crate::validation;

pub type RegisterListener = Box<dyn FnMut(Credentials)>;

/// Registration form: a mutable draft plus values derived from it.
#[derive(Default)]
pub struct RegistrationState {
    draft: RegistrationDraft,
    on_register: Option<RegisterListener>,
}

impl std::fmt::Debug for RegistrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationState")
            .field("user", &self.draft.user)
            .field("pass_len", &self.draft.pass.chars().count())
            .field("has_listener", &self.on_register.is_some())
            .finish()
    }
}

impl RegistrationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previously registered listener.
    pub fn on_register(&mut self, listener: impl FnMut(Credentials) + 'static) {
        self.on_register = Some(Box::new(listener));
    }

    pub fn set_user(&mut self, value: impl Into<String>) {
        self.draft.user = value.into();
        debug!(
            user_len = self.draft.user.chars().count(),
            form_valid = self.form_valid(),
            "registration user updated"
        );
    }

    pub fn set_pass(&mut self, value: impl Into<String>) {
        self.draft.pass = value.into();
        debug!(
            pass_len = self.draft.pass.chars().count(),
            form_valid = self.form_valid(),
            "registration pass updated"
        );
    }

    pub fn user(&self) -> &str {
        &self.draft.user
    }

    pub fn pass(&self) -> &str {
        &self.draft.pass
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn user_error(&self) -> Option<&'static str> {
        validation::user_error(&self.draft.user)
    }

    pub fn pass_error(&self) -> Option<&'static str> {
        validation::pass_error(&self.draft.pass)
    }

    pub fn form_valid(&self) -> bool {
        validation::is_form_valid(&self.draft.user, &self.draft.pass)
    }

    /// Emits the current draft whether or not the form is valid; gating the
    /// submit control on [`Self::form_valid`] is left to the caller.
    pub fn submit(&mut self) -> Credentials {
        let credentials = self.draft.to_credentials();
        debug!(form_valid = self.form_valid(), "registration submitted");
        if let Some(listener) = self.on_register.as_mut() {
            listener(credentials.clone());
        }
        credentials
    }
}

#[cfg(test)]
#[path = "tests/registration_tests.rs"]
mod tests;
