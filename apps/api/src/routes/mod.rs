pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant_handlers;
use crate::profile::handlers as profile_handlers;
use crate::ranking::handlers as ranking_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recruiter side
        .route(
            "/api/v1/candidates/rank",
            post(ranking_handlers::handle_rank_candidates),
        )
        // Job-seeker side
        .route("/api/v1/profile", get(profile_handlers::handle_get_profile))
        .route(
            "/api/v1/profile/strength",
            get(profile_handlers::handle_profile_strength),
        )
        .route(
            "/api/v1/profile/analysis",
            post(profile_handlers::handle_profile_analysis),
        )
        .route(
            "/api/v1/notifications",
            get(assistant_handlers::handle_notifications),
        )
        // Shared assistant chat
        .route("/api/v1/chat", post(assistant_handlers::handle_chat))
        .with_state(state)
}
