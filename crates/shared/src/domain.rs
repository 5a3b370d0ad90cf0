use serde::{Deserialize, Serialize};

/// Snapshot of a completed registration. Never mutated once created; a
/// later registration replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "u")]
    pub user: String,
    #[serde(rename = "p")]
    pub pass: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            pass: pass.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Register,
    Login,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Register => f.write_str("register"),
            Screen::Login => f.write_str("login"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub user: String,
    pub pass: String,
}

impl RegistrationDraft {
    pub fn to_credentials(&self) -> Credentials {
        Credentials::new(self.user.clone(), self.pass.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub user: String,
    pub pass: String,
    /// Empty unless the most recent comparison failed.
    pub error_message: String,
}

impl LoginAttempt {
    pub fn matches(&self, expected: &Credentials) -> bool {
        self.user == expected.user && self.pass == expected.pass
    }
}
