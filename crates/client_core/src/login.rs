use shared::{
    domain::{Credentials, LoginAttempt},
    error::CoreError,
};
use tracing::{debug, info};

pub const LOGIN_MISMATCH: &str = "Usuario o contraseña incorrectos";

pub type LoginSuccessListener = Box<dyn FnMut()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Rejected,
}

/// Login form checked against the credentials it was configured with.
///
/// There is no terminal state: every submit compares again, so a rejected
/// attempt can be corrected and an authenticated one re-checked.
pub struct LoginState {
    expected: Credentials,
    attempt: LoginAttempt,
    on_success: Option<LoginSuccessListener>,
}

impl std::fmt::Debug for LoginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginState")
            .field("expected_user", &self.expected.user)
            .field("user", &self.attempt.user)
            .field("error_message", &self.attempt.error_message)
            .field("has_listener", &self.on_success.is_some())
            .finish()
    }
}

/// Collects the required inputs before a [`LoginState`] can exist.
#[derive(Debug, Default)]
pub struct LoginStateBuilder {
    expected_user: Option<String>,
    expected_pass: Option<String>,
}

impl LoginStateBuilder {
    pub fn expected_user(mut self, user: impl Into<String>) -> Self {
        self.expected_user = Some(user.into());
        self
    }

    pub fn expected_pass(mut self, pass: impl Into<String>) -> Self {
        self.expected_pass = Some(pass.into());
        self
    }

    pub fn build(self) -> Result<LoginState, CoreError> {
        let user = self
            .expected_user
            .ok_or_else(|| CoreError::missing("expected_user"))?;
        let pass = self
            .expected_pass
            .ok_or_else(|| CoreError::missing("expected_pass"))?;
        Ok(LoginState::new(Credentials::new(user, pass)))
    }
}

impl LoginState {
    pub fn new(expected: Credentials) -> Self {
        Self {
            expected,
            attempt: LoginAttempt::default(),
            on_success: None,
        }
    }

    pub fn builder() -> LoginStateBuilder {
        LoginStateBuilder::default()
    }

    /// Last call wins; the current attempt is left untouched.
    pub fn configure(&mut self, expected: Credentials) {
        debug!(expected_user = %expected.user, "login expectations configured");
        self.expected = expected;
    }

    pub fn on_login_success(&mut self, listener: impl FnMut() + 'static) {
        self.on_success = Some(Box::new(listener));
    }

    pub fn set_user(&mut self, value: impl Into<String>) {
        self.attempt.user = value.into();
    }

    pub fn set_pass(&mut self, value: impl Into<String>) {
        self.attempt.pass = value.into();
    }

    pub fn user(&self) -> &str {
        &self.attempt.user
    }

    pub fn pass(&self) -> &str {
        &self.attempt.pass
    }

    pub fn expected(&self) -> &Credentials {
        &self.expected
    }

    pub fn attempt(&self) -> &LoginAttempt {
        &self.attempt
    }

    /// Empty string when the last comparison succeeded or none has run.
    pub fn error_message(&self) -> &str {
        &self.attempt.error_message
    }

    /// Exact, case-sensitive comparison of both fields; no trimming.
    pub fn submit(&mut self) -> LoginOutcome {
        if self.attempt.matches(&self.expected) {
            self.attempt.error_message.clear();
            info!(user = %self.attempt.user, "login accepted");
            if let Some(listener) = self.on_success.as_mut() {
                listener();
            }
            LoginOutcome::Authenticated
        } else {
            self.attempt.error_message = LOGIN_MISMATCH.to_string();
            info!(user = %self.attempt.user, "login rejected");
            LoginOutcome::Rejected
        }
    }
}

#[cfg(test)]
#[path = "tests/login_tests.rs"]
mod tests;
