use std::sync::Arc;

use crate::assistant::Assistant;
use crate::config::Config;
use crate::models::candidate::CandidateProfile;
use crate::ranking::explanation::ExplanationWriter;
use crate::ranking::extraction::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The candidate corpus is loaded once at startup and shared read-only; the
/// three collaborator seams are picked at startup from `ENABLE_AI_FEATURES`
/// (LLM-backed or local fallback), never per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub corpus: Arc<[CandidateProfile]>,
    pub extractor: Arc<dyn SkillExtractor>,
    pub explainer: Arc<dyn ExplanationWriter>,
    pub assistant: Arc<dyn Assistant>,
}
