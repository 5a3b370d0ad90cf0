use std::{cell::RefCell, rc::Rc};

use super::*;

fn collecting(state: &mut RegistrationState) -> Rc<RefCell<Vec<Credentials>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    state.on_register(move |creds| sink.borrow_mut().push(creds));
    seen
}

#[test]
fn fresh_state_shows_no_errors_and_is_invalid() {
    let state = RegistrationState::new();
    assert_eq!(state.user(), "");
    assert_eq!(state.pass(), "");
    assert_eq!(state.user_error(), None);
    assert_eq!(state.pass_error(), None);
    assert!(!state.form_valid());
}

#[test]
fn short_user_with_valid_pass() {
    let mut state = RegistrationState::new();
    state.set_user("ab");
    state.set_pass("123456");

    assert_eq!(state.user_error(), Some("Muy corto"));
    assert_eq!(state.pass_error(), None);
    assert!(!state.form_valid());
}

#[test]
fn derived_values_follow_each_mutation() {
    let mut state = RegistrationState::new();
    state.set_user("ab");
    assert_eq!(state.user_error(), Some("Muy corto"));
    state.set_user("abc");
    assert_eq!(state.user_error(), None);
    state.set_pass("123");
    assert_eq!(state.pass_error(), Some("Mínimo 6 caracteres"));
    assert!(!state.form_valid());
    state.set_pass("123456");
    assert!(state.form_valid());
    state.set_user("");
    assert_eq!(state.user_error(), None);
    assert!(!state.form_valid());
}

#[test]
fn valid_submit_emits_draft() {
    let mut state = RegistrationState::new();
    let seen = collecting(&mut state);
    state.set_user("abc");
    state.set_pass("123456");

    assert!(state.form_valid());
    let creds = state.submit();

    assert_eq!(creds, Credentials::new("abc", "123456"));
    assert_eq!(*seen.borrow(), vec![Credentials::new("abc", "123456")]);
}

#[test]
fn invalid_form_can_still_be_submitted() {
    let mut state = RegistrationState::new();
    let seen = collecting(&mut state);
    state.set_user("x");

    let creds = state.submit();

    assert_eq!(creds, Credentials::new("x", ""));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn repeated_submit_emits_equal_credentials() {
    let mut state = RegistrationState::new();
    let seen = collecting(&mut state);
    state.set_user("abc");
    state.set_pass("123456");

    let first = state.submit();
    let second = state.submit();

    assert_eq!(first, second);
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(seen.borrow()[0], seen.borrow()[1]);
}

#[test]
fn later_listener_replaces_earlier_one() {
    let mut state = RegistrationState::new();
    let first = collecting(&mut state);
    let second = collecting(&mut state);

    state.submit();

    assert!(first.borrow().is_empty());
    assert_eq!(second.borrow().len(), 1);
}

#[test]
fn debug_output_hides_password() {
    let mut state = RegistrationState::new();
    state.set_user("abc");
    state.set_pass("secret-value");
    let rendered = format!("{state:?}");
    assert!(rendered.contains("abc"));
    assert!(!rendered.contains("secret-value"));
}
