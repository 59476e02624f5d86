mod assistant;
mod config;
mod corpus;
mod errors;
mod llm_client;
mod models;
mod profile;
mod ranking;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::{Assistant, LlmAssistant, ScriptedAssistant};
use crate::config::Config;
use crate::corpus::load_corpus;
use crate::llm_client::LlmClient;
use crate::models::candidate::CandidateProfile;
use crate::ranking::explanation::{
    ExplanationWriter, LlmExplanationWriter, TemplateExplanationWriter,
};
use crate::ranking::extraction::{KeywordSkillExtractor, LlmSkillExtractor, SkillExtractor};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on inconsistent env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillRank API v{}", env!("CARGO_PKG_VERSION"));

    // Load the static candidate corpus (read-only for the process lifetime)
    let corpus: Arc<[CandidateProfile]> = load_corpus(&config.candidate_data_path)?.into();

    // Pick collaborator strategies once, from config — never per request
    let (extractor, explainer, assistant) = build_collaborators(&config);

    // Build app state
    let state = AppState {
        config: config.clone(),
        corpus,
        extractor,
        explainer,
        assistant,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the three collaborator seams from config.
///
/// AI mode wires every seam to the LLM client; fallback mode wires the
/// keyword tokenizer, fixed-template explainer, and scripted assistant,
/// none of which touch the network or fail.
fn build_collaborators(
    config: &Config,
) -> (
    Arc<dyn SkillExtractor>,
    Arc<dyn ExplanationWriter>,
    Arc<dyn Assistant>,
) {
    match (config.ai_enabled, &config.google_api_key) {
        (true, Some(api_key)) => {
            let llm = LlmClient::new(api_key.clone());
            info!("AI features enabled (model: {})", llm_client::MODEL);
            let extractor: Arc<dyn SkillExtractor> = Arc::new(LlmSkillExtractor(llm.clone()));
            let explainer: Arc<dyn ExplanationWriter> = Arc::new(LlmExplanationWriter(llm.clone()));
            let assistant: Arc<dyn Assistant> = Arc::new(LlmAssistant(llm));
            (extractor, explainer, assistant)
        }
        _ => {
            info!("AI features disabled — using keyword/template fallbacks");
            let extractor: Arc<dyn SkillExtractor> = Arc::new(KeywordSkillExtractor);
            let explainer: Arc<dyn ExplanationWriter> = Arc::new(TemplateExplanationWriter);
            let assistant: Arc<dyn Assistant> = Arc::new(ScriptedAssistant);
            (extractor, explainer, assistant)
        }
    }
}
