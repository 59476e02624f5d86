//! Axum route handlers for chat and notifications.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::chat::{ChatMessage, Notification, Persona};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub persona: Persona,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/v1/chat
///
/// One chat turn. The caller owns the history and sends it in full each time.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let reply = state
        .assistant
        .chat(request.persona, &request.history, &request.question)
        .await?;

    Ok(Json(ChatResponse { reply }))
}

/// GET /api/v1/notifications
///
/// Mock dashboard notifications for the demo job seeker.
pub async fn handle_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let user = state
        .corpus
        .first()
        .ok_or_else(|| AppError::NotFound("candidate corpus is empty".to_string()))?;

    let notifications = state.assistant.notifications(&user.name).await?;

    Ok(Json(notifications))
}
