//! Headless state for the greeting and register/login demos.
//!
//! Input events mutate the state objects synchronously; observers read the
//! current values back and receive outward signals through a [`SignalSink`].

pub mod coordinator;
pub mod greeting;
pub mod login;
pub mod registration;
pub mod signals;
pub mod validation;

pub use coordinator::ScreenCoordinator;
pub use greeting::{Counter, GreetingHost, UserCard};
pub use login::{LoginOutcome, LoginState};
pub use registration::RegistrationState;
pub use signals::{RecordedSignals, SignalSink};

pub use shared::{
    domain::{Credentials, LoginAttempt, RegistrationDraft, Screen},
    error::CoreError,
    signal::UiSignal,
};
