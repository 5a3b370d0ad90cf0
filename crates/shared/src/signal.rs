use serde::{Deserialize, Serialize};

use crate::domain::Credentials;

/// Outward notifications handed from the core to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum UiSignal {
    RegistrationCompleted { credentials: Credentials },
    LoginSucceeded,
    /// Message for the collaborator's user-facing alert.
    Greeting { message: String },
}

impl UiSignal {
    pub fn name(&self) -> &'static str {
        match self {
            UiSignal::RegistrationCompleted { .. } => "registration_completed",
            UiSignal::LoginSucceeded => "login_succeeded",
            UiSignal::Greeting { .. } => "greeting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_signal_uses_tagged_layout() {
        let signal = UiSignal::RegistrationCompleted {
            credentials: Credentials::new("abc", "123456"),
        };
        let value = serde_json::to_value(&signal).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "type": "registration_completed",
                "payload": { "credentials": { "u": "abc", "p": "123456" } }
            })
        );
    }

    #[test]
    fn login_signal_has_no_payload() {
        let value = serde_json::to_value(UiSignal::LoginSucceeded).expect("serialize");
        assert_eq!(value, serde_json::json!({ "type": "login_succeeded" }));
    }

    #[test]
    fn greeting_signal_parses_back() {
        let raw = r#"{"type":"greeting","payload":{"message":"hola"}}"#;
        let signal: UiSignal = serde_json::from_str(raw).expect("parse");
        assert_eq!(
            signal,
            UiSignal::Greeting {
                message: "hola".into()
            }
        );
        assert_eq!(signal.name(), "greeting");
    }
}
