//! Applies typed input events to the core state and renders the result.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use client_core::{Counter, GreetingHost, LoginOutcome, Screen, ScreenCoordinator, UiSignal};
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

use crate::controller::commands::{parse_line, CommandError, InputCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One of the two demos, driven by line commands.
pub trait Demo {
    fn name(&self) -> &'static str;
    fn help(&self) -> &'static str;
    fn apply(&mut self, cmd: InputCommand, out: &mut dyn Write) -> Result<Flow>;
    fn render(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct AuthDemo {
    coord: ScreenCoordinator<Sender<UiSignal>>,
}

impl AuthDemo {
    pub fn new(signals: Sender<UiSignal>) -> Self {
        Self {
            coord: ScreenCoordinator::new(signals),
        }
    }

    fn set_field(&mut self, cmd: InputCommand) -> Result<(), client_core::CoreError> {
        match (self.coord.current_screen(), cmd) {
            (Screen::Register, InputCommand::SetUser(v)) => {
                self.coord.registration_mut()?.set_user(v);
            }
            (Screen::Register, InputCommand::SetPass(v)) => {
                self.coord.registration_mut()?.set_pass(v);
            }
            (Screen::Login, InputCommand::SetUser(v)) => self.coord.login_mut()?.set_user(v),
            (Screen::Login, InputCommand::SetPass(v)) => self.coord.login_mut()?.set_pass(v),
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self, out: &mut dyn Write) -> Result<()> {
        match self.coord.current_screen() {
            Screen::Register => {
                let creds = self.coord.submit_registration()?;
                writeln!(out, "registered '{}'; switched to login", creds.user)?;
            }
            Screen::Login => match self.coord.submit_login()? {
                LoginOutcome::Authenticated => writeln!(out, "welcome, session started")?,
                LoginOutcome::Rejected => {}
            },
        }
        Ok(())
    }
}

fn masked(pass: &str) -> String {
    "*".repeat(pass.chars().count())
}

impl Demo for AuthDemo {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn help(&self) -> &'static str {
        "commands: user <value>, pass <value>, submit, show, help, quit"
    }

    fn apply(&mut self, cmd: InputCommand, out: &mut dyn Write) -> Result<Flow> {
        match cmd {
            InputCommand::SetUser(_) | InputCommand::SetPass(_) => {
                self.set_field(cmd)?;
                self.render(out)?;
            }
            InputCommand::Submit => {
                self.submit(out)?;
                self.render(out)?;
            }
            InputCommand::Show => self.render(out)?,
            InputCommand::Help => writeln!(out, "{}", self.help())?,
            InputCommand::Quit => return Ok(Flow::Quit),
            other => writeln!(out, "'{}' is not available in the auth demo", other.name())?,
        }
        Ok(Flow::Continue)
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        match self.coord.current_screen() {
            Screen::Register => {
                let form = self.coord.registration();
                writeln!(
                    out,
                    "[register] user=\"{}\" pass={}",
                    form.user(),
                    masked(form.pass())
                )?;
                if let Some(msg) = form.user_error() {
                    writeln!(out, "  user: {msg}")?;
                }
                if let Some(msg) = form.pass_error() {
                    writeln!(out, "  pass: {msg}")?;
                }
                writeln!(
                    out,
                    "  form valid: {}",
                    if form.form_valid() { "yes" } else { "no" }
                )?;
            }
            Screen::Login => {
                let Some(form) = self.coord.login() else {
                    return Ok(());
                };
                writeln!(
                    out,
                    "[login] user=\"{}\" pass={}",
                    form.user(),
                    masked(form.pass())
                )?;
                if !form.error_message().is_empty() {
                    writeln!(out, "  error: {}", form.error_message())?;
                }
                if self.coord.session_started() {
                    writeln!(out, "  session started")?;
                }
            }
        }
        Ok(())
    }
}

pub struct GreetDemo {
    host: GreetingHost<Sender<UiSignal>>,
    counter: Counter,
}

impl GreetDemo {
    pub fn new(signals: Sender<UiSignal>) -> Self {
        Self {
            host: GreetingHost::new(signals),
            counter: Counter::new(),
        }
    }
}

impl Demo for GreetDemo {
    fn name(&self) -> &'static str {
        "greet"
    }

    fn help(&self) -> &'static str {
        "commands: toggle, greet, inc, dec, reset, show, help, quit"
    }

    fn apply(&mut self, cmd: InputCommand, out: &mut dyn Write) -> Result<Flow> {
        match cmd {
            InputCommand::Toggle => {
                self.host.toggle_name();
                self.render(out)?;
            }
            InputCommand::Greet => {
                self.host.greet();
            }
            InputCommand::Increment => {
                self.counter.increment();
                self.render(out)?;
            }
            InputCommand::Decrement => {
                self.counter.decrement();
                self.render(out)?;
            }
            InputCommand::Reset => {
                self.counter.reset();
                self.render(out)?;
            }
            InputCommand::Show => self.render(out)?,
            InputCommand::Help => writeln!(out, "{}", self.help())?,
            InputCommand::Quit => return Ok(Flow::Quit),
            other => writeln!(out, "'{}' is not available in the greet demo", other.name())?,
        }
        Ok(Flow::Continue)
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        let card = self.host.card();
        writeln!(out, "{}", self.host.title())?;
        writeln!(out, "  card: {} (age {})", card.name(), card.age())?;
        writeln!(out, "  counter: {}", self.counter.value())?;
        Ok(())
    }
}

pub fn render_signal(signal: &UiSignal, emit_json: bool) -> Result<String> {
    if emit_json {
        return serde_json::to_string(signal).context("failed to encode signal");
    }
    Ok(match signal {
        UiSignal::RegistrationCompleted { credentials } => {
            format!("<- registration completed for '{}'", credentials.user)
        }
        UiSignal::LoginSucceeded => "<- login succeeded".to_string(),
        UiSignal::Greeting { message } => format!("[alert] {message}"),
    })
}

fn drain_signals(
    signals: &Receiver<UiSignal>,
    out: &mut dyn Write,
    emit_json: bool,
) -> Result<()> {
    for signal in signals.try_iter() {
        writeln!(out, "{}", render_signal(&signal, emit_json)?)?;
    }
    Ok(())
}

/// Feeds each input line to `demo` until `quit` or end of input.
///
/// Core faults such as an event for the hidden screen are reported to the
/// user and do not end the session; I/O failures do.
pub fn run(
    demo: &mut dyn Demo,
    signals: &Receiver<UiSignal>,
    input: impl BufRead,
    out: &mut dyn Write,
    emit_json: bool,
) -> Result<()> {
    writeln!(out, "{} demo ({})", demo.name(), demo.help())?;
    demo.render(out)?;

    for line in input.lines() {
        let line = line.context("failed to read input line")?;
        let cmd = match parse_line(&line) {
            Ok(cmd) => cmd,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };
        debug!(demo = demo.name(), command = cmd.name(), "applying input");

        let flow = match demo.apply(cmd, out) {
            Ok(flow) => flow,
            Err(err) => match err.downcast_ref::<client_core::CoreError>() {
                Some(core_err) => {
                    warn!(demo = demo.name(), error = %core_err, "input rejected");
                    writeln!(out, "error: {core_err}")?;
                    Flow::Continue
                }
                None => return Err(err),
            },
        };
        drain_signals(signals, out, emit_json)?;
        out.flush()?;

        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/session_tests.rs"]
mod tests;
