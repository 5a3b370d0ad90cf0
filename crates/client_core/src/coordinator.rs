//! Top-level state of the auth demo: which screen is active and the
//! credentials captured by registration.

use shared::{
    domain::{Credentials, Screen},
    error::CoreError,
    signal::UiSignal,
};
use tracing::{debug, info};

use crate::{
    login::{LoginOutcome, LoginState},
    registration::RegistrationState,
    signals::SignalSink,
};

#[derive(Debug)]
pub struct ScreenCoordinator<S> {
    screen: Screen,
    stored: Option<Credentials>,
    session_started: bool,
    registration: RegistrationState,
    // Only exists once credentials are stored.
    login: Option<LoginState>,
    sink: S,
}

impl<S: SignalSink> ScreenCoordinator<S> {
    pub fn new(sink: S) -> Self {
        Self {
            screen: Screen::Register,
            stored: None,
            session_started: false,
            registration: RegistrationState::new(),
            login: None,
            sink,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    pub fn stored_credentials(&self) -> Option<&Credentials> {
        self.stored.as_ref()
    }

    pub fn session_started(&self) -> bool {
        self.session_started
    }

    pub fn registration(&self) -> &RegistrationState {
        &self.registration
    }

    pub fn login(&self) -> Option<&LoginState> {
        self.login.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Input events for the registration form; rejected once the login
    /// screen is showing.
    pub fn registration_mut(&mut self) -> Result<&mut RegistrationState, CoreError> {
        self.expect_screen(Screen::Register)?;
        Ok(&mut self.registration)
    }

    pub fn login_mut(&mut self) -> Result<&mut LoginState, CoreError> {
        self.expect_screen(Screen::Login)?;
        self.login.as_mut().ok_or(CoreError::WrongScreen {
            expected: Screen::Login,
            actual: Screen::Register,
        })
    }

    /// Stores `creds` (replacing any earlier ones), hands them to the login
    /// form and switches to the login screen, all before returning.
    pub fn on_registration_complete(&mut self, creds: Credentials) {
        info!(user = %creds.user, "registration completed");
        self.stored = Some(creds.clone());
        match self.login.as_mut() {
            Some(login) => login.configure(creds.clone()),
            None => self.login = Some(LoginState::new(creds.clone())),
        }
        if self.screen != Screen::Login {
            debug!(from = %self.screen, to = %Screen::Login, "screen transition");
            self.screen = Screen::Login;
        }
        self.sink
            .deliver(UiSignal::RegistrationCompleted { credentials: creds });
    }

    /// Submits the registration form and routes its emission here.
    pub fn submit_registration(&mut self) -> Result<Credentials, CoreError> {
        let creds = self.registration_mut()?.submit();
        self.on_registration_complete(creds.clone());
        Ok(creds)
    }

    pub fn submit_login(&mut self) -> Result<LoginOutcome, CoreError> {
        let outcome = self.login_mut()?.submit();
        if outcome == LoginOutcome::Authenticated {
            self.session_started = true;
            self.sink.deliver(UiSignal::LoginSucceeded);
        }
        Ok(outcome)
    }

    fn expect_screen(&self, expected: Screen) -> Result<(), CoreError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(CoreError::WrongScreen {
                expected,
                actual: self.screen,
            })
        }
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
