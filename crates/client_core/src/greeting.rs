//! Greeting demo: a user card that says hello, the host that renames it,
//! and a click counter.

use std::{cell::RefCell, rc::Rc};

use shared::{error::CoreError, signal::UiSignal};
use tracing::debug;

use crate::signals::SignalSink;

pub const DEFAULT_TITLE: &str = "Mi primer angular";
const FIRST_NAME: &str = "Pepe";
const SECOND_NAME: &str = "Juan";

pub type GreetListener = Box<dyn FnMut(&str)>;

pub fn greeting_for(name: &str) -> String {
    format!("Hola desde el componente de {name}")
}

pub struct UserCard {
    name: String,
    age: u32,
    on_greet: Option<GreetListener>,
}

impl std::fmt::Debug for UserCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCard")
            .field("name", &self.name)
            .field("age", &self.age)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct UserCardBuilder {
    name: Option<String>,
    age: Option<u32>,
}

impl UserCardBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn build(self) -> Result<UserCard, CoreError> {
        let name = self.name.ok_or_else(|| CoreError::missing("name"))?;
        Ok(UserCard {
            name,
            age: self.age.unwrap_or_default(),
            on_greet: None,
        })
    }
}

impl UserCard {
    pub fn builder() -> UserCardBuilder {
        UserCardBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn on_greet(&mut self, listener: impl FnMut(&str) + 'static) {
        self.on_greet = Some(Box::new(listener));
    }

    pub fn notify(&mut self) -> String {
        let message = greeting_for(&self.name);
        if let Some(listener) = self.on_greet.as_mut() {
            listener(&message);
        }
        message
    }
}

/// Owns the card's name and forwards its greetings to the alert sink.
#[derive(Debug)]
pub struct GreetingHost<S> {
    title: String,
    user_name: String,
    toggled: bool,
    // Greetings heard from bound cards, not yet forwarded.
    heard: Rc<RefCell<Vec<String>>>,
    sink: S,
}

impl<S: SignalSink> GreetingHost<S> {
    pub fn new(sink: S) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            user_name: FIRST_NAME.to_string(),
            toggled: false,
            heard: Rc::default(),
            sink,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Pepe -> Juan -> Pepe ...
    pub fn toggle_name(&mut self) -> &str {
        self.toggled = !self.toggled;
        self.user_name = if self.toggled { SECOND_NAME } else { FIRST_NAME }.to_string();
        debug!(name = %self.user_name, "card name toggled");
        &self.user_name
    }

    pub fn card(&self) -> UserCard {
        UserCard {
            name: self.user_name.clone(),
            age: 0,
            on_greet: None,
        }
    }

    /// Card for the current name whose `on_greet` output is bound to this
    /// host. Heard greetings reach the sink on [`Self::flush_greetings`].
    pub fn bound_card(&self) -> UserCard {
        let mut card = self.card();
        let heard = Rc::clone(&self.heard);
        card.on_greet(move |message| heard.borrow_mut().push(message.to_string()));
        card
    }

    pub fn handle_greeting(&mut self, message: impl Into<String>) {
        self.sink.deliver(UiSignal::Greeting {
            message: message.into(),
        });
    }

    /// Forwards every greeting heard since the last flush, oldest first.
    pub fn flush_greetings(&mut self) -> usize {
        let heard = std::mem::take(&mut *self.heard.borrow_mut());
        let count = heard.len();
        for message in heard {
            self.handle_greeting(message);
        }
        count
    }

    /// Clicks the current card's greet button.
    pub fn greet(&mut self) -> String {
        let message = self.bound_card().notify();
        self.flush_greetings();
        message
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) -> i64 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.saturating_sub(1);
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
#[path = "tests/greeting_tests.rs"]
mod tests;
