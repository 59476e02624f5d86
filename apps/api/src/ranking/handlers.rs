//! Axum route handlers for the recruiter-side Ranking API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::candidate::RankedCandidate;
use crate::ranking::pipeline::rank_candidates;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(rename = "jobDescription")]
    pub job_description: String,
}

/// POST /api/v1/candidates/rank
///
/// The sole recruiter entry point: job description in, ranked candidates out.
/// Blank input returns an empty list rather than an error.
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<Vec<RankedCandidate>>, AppError> {
    let ranked = rank_candidates(
        &request.job_description,
        &state.corpus,
        state.extractor.as_ref(),
        state.explainer.as_ref(),
    )
    .await?;

    Ok(Json(ranked))
}
