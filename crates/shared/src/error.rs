use thiserror::Error;

use crate::domain::Screen;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("missing required input '{field}'")]
    MissingInput { field: &'static str },
    #[error("event targets the {expected} screen but {actual} is active")]
    WrongScreen { expected: Screen, actual: Screen },
}

impl CoreError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingInput { field }
    }
}
