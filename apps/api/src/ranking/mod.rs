// Candidate ranking: skill extraction, weighted scoring, explanation attachment.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod explanation;
pub mod extraction;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod scoring;
