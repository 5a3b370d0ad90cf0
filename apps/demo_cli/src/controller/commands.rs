//! Line-oriented input events typed at the terminal.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    SetUser(String),
    SetPass(String),
    Submit,
    Toggle,
    Greet,
    Increment,
    Decrement,
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' takes no argument")]
    UnexpectedArgument(&'static str),
}

impl InputCommand {
    pub fn name(&self) -> &'static str {
        match self {
            InputCommand::SetUser(_) => "user",
            InputCommand::SetPass(_) => "pass",
            InputCommand::Submit => "submit",
            InputCommand::Toggle => "toggle",
            InputCommand::Greet => "greet",
            InputCommand::Increment => "inc",
            InputCommand::Decrement => "dec",
            InputCommand::Reset => "reset",
            InputCommand::Show => "show",
            InputCommand::Help => "help",
            InputCommand::Quit => "quit",
        }
    }
}

/// Field values keep everything after the first space verbatim, so
/// leading/trailing blanks reach the form untouched. `user` alone clears the
/// field.
pub fn parse_line(line: &str) -> Result<InputCommand, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line, None),
    };

    let no_arg = |cmd: InputCommand, name: &'static str| match rest {
        Some(arg) if !arg.trim().is_empty() => Err(CommandError::UnexpectedArgument(name)),
        _ => Ok(cmd),
    };

    match word {
        "" => Err(CommandError::Empty),
        "user" => Ok(InputCommand::SetUser(rest.unwrap_or_default().to_string())),
        "pass" => Ok(InputCommand::SetPass(rest.unwrap_or_default().to_string())),
        "submit" => no_arg(InputCommand::Submit, "submit"),
        "toggle" => no_arg(InputCommand::Toggle, "toggle"),
        "greet" => no_arg(InputCommand::Greet, "greet"),
        "inc" | "+" => no_arg(InputCommand::Increment, "inc"),
        "dec" | "-" => no_arg(InputCommand::Decrement, "dec"),
        "reset" => no_arg(InputCommand::Reset, "reset"),
        "show" => no_arg(InputCommand::Show, "show"),
        "help" | "?" => no_arg(InputCommand::Help, "help"),
        "quit" | "exit" => no_arg(InputCommand::Quit, "quit"),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
#[path = "../tests/commands_tests.rs"]
mod tests;
