//! Explanation collaborator — narrative attached to each ranked candidate.
//!
//! Presentation-only: runs after sorting and must never influence scores
//! or ranks. LLM and fixed-template strategies behind one trait.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::candidate::{CandidateProfile, ScoreDetails};
use crate::ranking::prompts::{EXPLANATION_PROMPT_TEMPLATE, EXPLANATION_SYSTEM};

/// Narrative output for one ranked candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Explanation {
    pub explanation: String,
    #[serde(rename = "keyStrengthsSummary")]
    pub key_strength_summary: String,
}

/// Everything the collaborator may look at for one candidate.
/// The breakdown is passed by reference and is already final.
pub struct ExplanationInput<'a> {
    pub candidate: &'a CandidateProfile,
    pub total_score: u32,
    pub job_text: &'a str,
    pub details: &'a ScoreDetails,
}

/// Strategy seam for narrative generation.
/// Carried in `AppState` as `Arc<dyn ExplanationWriter>`.
#[async_trait]
pub trait ExplanationWriter: Send + Sync {
    async fn explain(&self, input: ExplanationInput<'_>) -> Result<Explanation, AppError>;
}

/// Narrative generation via the LLM with a fixed prompt template.
pub struct LlmExplanationWriter(pub LlmClient);

#[async_trait]
impl ExplanationWriter for LlmExplanationWriter {
    async fn explain(&self, input: ExplanationInput<'_>) -> Result<Explanation, AppError> {
        let repositories = input
            .candidate
            .repositories
            .iter()
            .map(|r| format!("\"{}\" [{}]", r.name, r.technologies.join(", ")))
            .collect::<Vec<_>>()
            .join("; ");

        let prompt = EXPLANATION_PROMPT_TEMPLATE
            .replace("{candidate_name}", &input.candidate.name)
            .replace("{total_score}", &input.total_score.to_string())
            .replace("{job_description}", input.job_text)
            .replace("{matched_terms}", &input.details.skills.matched_skills.join(", "))
            .replace(
                "{problems_solved}",
                &input.candidate.problems_solved.to_string(),
            )
            .replace("{repositories}", &repositories)
            .replace("{skills}", &input.candidate.professional_skills.join(", "));

        self.0
            .call_json(&prompt, EXPLANATION_SYSTEM)
            .await
            .map_err(AppError::from_explanation)
    }
}

/// Fallback: a fixed template referencing the candidate's name only.
/// Never fails, so fallback-mode ranking requests cannot abort here.
pub struct TemplateExplanationWriter;

#[async_trait]
impl ExplanationWriter for TemplateExplanationWriter {
    async fn explain(&self, input: ExplanationInput<'_>) -> Result<Explanation, AppError> {
        Ok(Explanation {
            explanation: format!(
                "Based on a direct keyword analysis of the job description, {}'s profile \
                 shows a strong correlation with the required skills. Their experience in \
                 relevant technologies and a solid problem-solving background contribute to \
                 their high score. (Note: This is a simplified analysis as AI features are \
                 currently disabled.)",
                input.candidate.name
            ),
            key_strength_summary: "Matches key skills from job description.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{CodingDetail, RepositoryDetail, SkillDetail};

    fn demo_candidate() -> CandidateProfile {
        CandidateProfile {
            id: 1,
            name: "Priya Sharma".to_string(),
            avatar_url: "https://example.com/a/1.png".to_string(),
            avatar_hint: "portrait".to_string(),
            problems_solved: 120,
            repositories: vec![],
            professional_skills: vec!["Rust".to_string()],
        }
    }

    fn demo_details() -> ScoreDetails {
        ScoreDetails {
            coding: CodingDetail { score: 80, solved: 120 },
            repository: RepositoryDetail {
                score: 0,
                relevant_repos: vec![],
            },
            skills: SkillDetail {
                score: 50,
                matched_skills: vec!["rust".to_string()],
            },
        }
    }

    #[tokio::test]
    async fn test_template_writer_references_candidate_name() {
        let candidate = demo_candidate();
        let details = demo_details();
        let writer = TemplateExplanationWriter;
        let out = writer
            .explain(ExplanationInput {
                candidate: &candidate,
                total_score: 64,
                job_text: "Rust engineer",
                details: &details,
            })
            .await
            .unwrap();

        assert!(out.explanation.contains("Priya Sharma"));
        assert_eq!(
            out.key_strength_summary,
            "Matches key skills from job description."
        );
    }

    #[test]
    fn test_explanation_deserializes_llm_schema() {
        let json = r#"{
            "explanation": "Strong alignment with the role.",
            "keyStrengthsSummary": "Deep Rust experience."
        }"#;
        let parsed: Explanation = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.key_strength_summary, "Deep Rust experience.");
    }
}
