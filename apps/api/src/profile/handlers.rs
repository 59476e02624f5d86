//! Axum route handlers for the job-seeker Profile API.
//!
//! The original app has no real user store — the first corpus record stands
//! in for the logged-in job seeker. Identity is delegated externally and is
//! out of scope here.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::candidate::CandidateProfile;
use crate::profile::strength::{profile_strength, ProfileStrength};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileAnalysisResponse {
    pub analysis: String,
}

fn demo_user(state: &AppState) -> Result<&CandidateProfile, AppError> {
    state
        .corpus
        .first()
        .ok_or_else(|| AppError::NotFound("candidate corpus is empty".to_string()))
}

/// GET /api/v1/profile
///
/// Returns the demo user's full profile record.
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<CandidateProfile>, AppError> {
    let user = demo_user(&state)?;
    Ok(Json(user.clone()))
}

/// GET /api/v1/profile/strength
///
/// Returns the demo user's profile-strength score and templated summary.
pub async fn handle_profile_strength(
    State(state): State<AppState>,
) -> Result<Json<ProfileStrength>, AppError> {
    let user = demo_user(&state)?;
    Ok(Json(profile_strength(user, &state.corpus)))
}

/// POST /api/v1/profile/analysis
///
/// Computes the strength summary server-side, then asks the assistant for
/// a short narrative analysis of it.
pub async fn handle_profile_analysis(
    State(state): State<AppState>,
) -> Result<Json<ProfileAnalysisResponse>, AppError> {
    let user = demo_user(&state)?;
    let strength = profile_strength(user, &state.corpus);

    let analysis = state
        .assistant
        .profile_analysis(&user.name, &strength.summary)
        .await?;

    Ok(Json(ProfileAnalysisResponse { analysis }))
}
