//! Job-seeker assistant: persona chat, profile analysis, mock notifications.
//!
//! Mirrors the extraction/explanation strategy split — an LLM-backed
//! implementation and a scripted fallback, chosen once at startup.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::{Content, LlmClient, LlmError};
use crate::models::chat::{ChatMessage, ChatRole, Notification, NotificationStatus, Persona};

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use prompts::{
    CAREER_COACH_SYSTEM, NOTIFICATIONS_PROMPT_TEMPLATE, PROFILE_ANALYSIS_PROMPT_TEMPLATE,
    PROFILE_ANALYSIS_SYSTEM, RECRUITER_ASSISTANT_SYSTEM,
};

/// Strategy seam for the assistant features.
/// Carried in `AppState` as `Arc<dyn Assistant>`.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Answers one chat turn. History is the caller's full transient
    /// append-only log, passed in with every call — no server-side sessions.
    async fn chat(
        &self,
        persona: Persona,
        history: &[ChatMessage],
        question: &str,
    ) -> Result<String, AppError>;

    /// Short encouraging analysis of a job-seeker's profile summary.
    async fn profile_analysis(
        &self,
        user_name: &str,
        profile_summary: &str,
    ) -> Result<String, AppError>;

    /// 3-4 mock dashboard notifications for a job seeker.
    async fn notifications(&self, user_name: &str) -> Result<Vec<Notification>, AppError>;
}

fn map_llm(err: LlmError) -> AppError {
    match err {
        LlmError::RateLimited => AppError::RateLimited,
        other => AppError::Internal(anyhow::anyhow!("assistant call failed: {other}")),
    }
}

fn persona_system(persona: Persona) -> &'static str {
    match persona {
        Persona::RecruiterAssistant => RECRUITER_ASSISTANT_SYSTEM,
        Persona::CareerCoach => CAREER_COACH_SYSTEM,
    }
}

#[derive(Debug, Deserialize)]
struct NotificationsOutput {
    notifications: Vec<Notification>,
}

/// LLM-backed assistant. Chat is a direct pass-through of the full
/// history plus the new question under a persona system prompt.
pub struct LlmAssistant(pub LlmClient);

#[async_trait]
impl Assistant for LlmAssistant {
    async fn chat(
        &self,
        persona: Persona,
        history: &[ChatMessage],
        question: &str,
    ) -> Result<String, AppError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|m| match m.role {
                ChatRole::User => Content::user(m.content.clone()),
                ChatRole::Model => Content::model(m.content.clone()),
            })
            .collect();
        contents.push(Content::user(question));

        self.0
            .generate(persona_system(persona), &contents)
            .await
            .map_err(map_llm)
    }

    async fn profile_analysis(
        &self,
        user_name: &str,
        profile_summary: &str,
    ) -> Result<String, AppError> {
        let prompt = PROFILE_ANALYSIS_PROMPT_TEMPLATE
            .replace("{user_name}", user_name)
            .replace("{profile_summary}", profile_summary);

        self.0
            .call_text(&prompt, PROFILE_ANALYSIS_SYSTEM)
            .await
            .map_err(map_llm)
    }

    async fn notifications(&self, user_name: &str) -> Result<Vec<Notification>, AppError> {
        let prompt = NOTIFICATIONS_PROMPT_TEMPLATE.replace("{user_name}", user_name);

        let output: NotificationsOutput = self
            .0
            .call_json(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(map_llm)?;

        Ok(output.notifications)
    }
}

/// Scripted fallback. Fixed replies, never fails, never touches the network.
pub struct ScriptedAssistant;

#[async_trait]
impl Assistant for ScriptedAssistant {
    async fn chat(
        &self,
        persona: Persona,
        _history: &[ChatMessage],
        _question: &str,
    ) -> Result<String, AppError> {
        let reply = match persona {
            Persona::RecruiterAssistant => {
                "Thank you for your question. AI-powered chat is currently in a simplified \
                 mode. For now, focus on providing a detailed job description to get the \
                 best results."
            }
            Persona::CareerCoach => {
                "Thanks for asking! AI-powered career coaching is in a simplified mode. \
                 I recommend ensuring your GitHub and LinkedIn profiles are connected and \
                 up-to-date for an accurate score."
            }
        };
        Ok(reply.to_string())
    }

    async fn profile_analysis(
        &self,
        _user_name: &str,
        profile_summary: &str,
    ) -> Result<String, AppError> {
        Ok(format!(
            "Your profile summary shows: \"{profile_summary}\". To improve, consider adding \
             more projects to your GitHub that showcase a variety of technologies. A detailed \
             README for each project is also highly recommended. (Note: This is a generic \
             analysis as AI features are currently disabled.)"
        ))
    }

    async fn notifications(&self, _user_name: &str) -> Result<Vec<Notification>, AppError> {
        Ok(vec![
            Notification {
                id: 1,
                company: "Innovate Inc.".to_string(),
                message: "has viewed your profile.".to_string(),
                time: "2h ago".to_string(),
                status: NotificationStatus::Viewed,
            },
            Notification {
                id: 2,
                company: "Tech Solutions".to_string(),
                message: "sent you an interview invitation.".to_string(),
                time: "1d ago".to_string(),
                status: NotificationStatus::Invited,
            },
            Notification {
                id: 3,
                company: "DataCorp".to_string(),
                message: "is no longer considering your application.".to_string(),
                time: "3d ago".to_string(),
                status: NotificationStatus::Rejected,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_chat_replies_differ_by_persona() {
        let assistant = ScriptedAssistant;
        let recruiter = assistant
            .chat(Persona::RecruiterAssistant, &[], "How do I rank candidates?")
            .await
            .unwrap();
        let coach = assistant
            .chat(Persona::CareerCoach, &[], "How do I improve my score?")
            .await
            .unwrap();

        assert_ne!(recruiter, coach);
        assert!(recruiter.contains("job description"));
        assert!(coach.contains("career coaching"));
    }

    #[tokio::test]
    async fn test_scripted_analysis_quotes_the_summary() {
        let assistant = ScriptedAssistant;
        let analysis = assistant
            .profile_analysis("Asha", "Excellent profile with strong Problem Solving skills.")
            .await
            .unwrap();
        assert!(analysis.contains("Excellent profile with strong Problem Solving skills."));
    }

    #[tokio::test]
    async fn test_scripted_notifications_are_fixed_three() {
        let assistant = ScriptedAssistant;
        let notifications = assistant.notifications("Asha").await.unwrap();
        assert_eq!(notifications.len(), 3);
        assert_eq!(notifications[0].status, NotificationStatus::Viewed);
        assert_eq!(notifications[1].status, NotificationStatus::Invited);
        assert_eq!(notifications[2].status, NotificationStatus::Rejected);
    }

    #[test]
    fn test_notifications_output_deserializes_llm_schema() {
        let json = r#"{
            "notifications": [
                {"id": 1, "company": "Acme", "message": "has viewed your profile.",
                 "time": "4h ago", "status": "viewed"}
            ]
        }"#;
        let parsed: NotificationsOutput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.notifications.len(), 1);
        assert_eq!(parsed.notifications[0].company, "Acme");
    }
}
