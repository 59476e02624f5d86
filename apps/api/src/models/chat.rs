//! Chat and notification types for the job-seeker assistant.

use serde::{Deserialize, Serialize};

/// Which persona the assistant speaks as. Determines the system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    RecruiterAssistant,
    CareerCoach,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of a chat exchange. History lives only in the caller's
/// transient state — the full list is passed in with every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Viewed,
    Invited,
    Rejected,
}

/// A mock activity notification shown on the job-seeker dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub company: String,
    pub message: String,
    pub time: String,
    pub status: NotificationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_deserializes_kebab_case() {
        let p: Persona = serde_json::from_str(r#""recruiter-assistant""#).unwrap();
        assert_eq!(p, Persona::RecruiterAssistant);
        let p: Persona = serde_json::from_str(r#""career-coach""#).unwrap();
        assert_eq!(p, Persona::CareerCoach);
    }

    #[test]
    fn test_chat_role_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&ChatRole::Model).unwrap(), r#""model""#);
        let r: ChatRole = serde_json::from_str(r#""user""#).unwrap();
        assert_eq!(r, ChatRole::User);
    }

    #[test]
    fn test_notification_status_deserializes() {
        let s: NotificationStatus = serde_json::from_str(r#""invited""#).unwrap();
        assert_eq!(s, NotificationStatus::Invited);
    }
}
