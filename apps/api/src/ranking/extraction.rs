//! Skill extraction — turns raw job-description text into requirement terms.
//!
//! Two interchangeable strategies behind one trait, chosen at startup:
//! `LlmSkillExtractor` (structured extraction via Gemini) and
//! `KeywordSkillExtractor` (naive tokenizer, never fails).

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::candidate::JobRequirements;
use crate::ranking::prompts::{SKILL_EXTRACTION_PROMPT_TEMPLATE, SKILL_EXTRACTION_SYSTEM};

/// Structured output of the LLM extraction prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSkills {
    #[serde(rename = "requiredSkills")]
    pub required_skills: Vec<String>,
    #[serde(rename = "experienceKeywords")]
    pub experience_keywords: Vec<String>,
    pub technologies: Vec<String>,
}

impl JobSkills {
    /// Unions the three arrays, lower-cased, into requirement terms.
    pub fn into_requirements(self) -> JobRequirements {
        JobRequirements::from_terms(
            self.required_skills
                .into_iter()
                .chain(self.experience_keywords)
                .chain(self.technologies),
        )
    }
}

/// Strategy seam for requirement-term extraction.
/// Carried in `AppState` as `Arc<dyn SkillExtractor>`.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, job_text: &str) -> Result<JobRequirements, AppError>;
}

/// Extraction via the LLM with a schema prompt requesting three string arrays.
pub struct LlmSkillExtractor(pub LlmClient);

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract(&self, job_text: &str) -> Result<JobRequirements, AppError> {
        let prompt = SKILL_EXTRACTION_PROMPT_TEMPLATE.replace("{job_description}", job_text);
        let skills: JobSkills = self
            .0
            .call_json(&prompt, SKILL_EXTRACTION_SYSTEM)
            .await
            .map_err(AppError::from_extraction)?;
        Ok(skills.into_requirements())
    }
}

/// Fallback extraction: lower-case, split on whitespace and punctuation,
/// drop tokens of length 3 or less. Never fails.
pub struct KeywordSkillExtractor;

#[async_trait]
impl SkillExtractor for KeywordSkillExtractor {
    async fn extract(&self, job_text: &str) -> Result<JobRequirements, AppError> {
        Ok(split_into_terms(job_text))
    }
}

fn split_into_terms(text: &str) -> JobRequirements {
    let lowered = text.to_lowercase();
    JobRequirements::from_terms(
        lowered
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | ';' | ':' | '(' | ')'))
            .filter(|token| token.len() > 3),
    )
}
