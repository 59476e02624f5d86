//! The ranking pipeline: extraction → pure scoring → sequential explanations.
//!
//! Explanations are requested strictly one at a time, in ranked order, so
//! the narrative-to-rank attachment stays deterministic. Any collaborator
//! failure aborts the whole request — no partial ranked lists.

use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::{
    CandidateProfile, CodingDetail, RankedCandidate, RepositoryDetail, ScoreDetails, SkillDetail,
};
use crate::ranking::explanation::{ExplanationInput, ExplanationWriter};
use crate::ranking::extraction::SkillExtractor;
use crate::ranking::scoring::{self, ScoredCandidate};

/// Ranks the corpus against a raw job description.
///
/// Blank job text and extractions that yield no terms both return an
/// empty list, never an error.
pub async fn rank_candidates(
    job_text: &str,
    corpus: &[CandidateProfile],
    extractor: &dyn SkillExtractor,
    explainer: &dyn ExplanationWriter,
) -> Result<Vec<RankedCandidate>, AppError> {
    if job_text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let requirements = extractor.extract(job_text).await?;
    if requirements.is_empty() {
        return Ok(Vec::new());
    }

    let scored = scoring::rank(&requirements, corpus);
    info!(
        terms = requirements.terms.len(),
        candidates = scored.len(),
        "ranked candidate corpus"
    );

    // One explanation call per candidate, awaited in ranked order.
    let mut ranked = Vec::with_capacity(scored.len());
    for entry in scored {
        ranked.push(present(entry, job_text, explainer).await?);
    }

    Ok(ranked)
}

/// Rounds scores for display and attaches the narrative.
/// Rounding happens only here — intermediate math stays f64.
async fn present(
    entry: ScoredCandidate<'_>,
    job_text: &str,
    explainer: &dyn ExplanationWriter,
) -> Result<RankedCandidate, AppError> {
    let candidate = entry.candidate;
    let breakdown = entry.breakdown;

    let total_score = breakdown.total_score.round() as u32;
    let details = ScoreDetails {
        coding: CodingDetail {
            score: breakdown.coding_score.round() as u32,
            solved: candidate.problems_solved,
        },
        repository: RepositoryDetail {
            score: breakdown.repository_score.round() as u32,
            relevant_repos: breakdown.relevant_repos,
        },
        skills: SkillDetail {
            score: breakdown.skill_score.round() as u32,
            matched_skills: breakdown.matched_skills,
        },
    };

    let narrative = explainer
        .explain(ExplanationInput {
            candidate,
            total_score,
            job_text,
            details: &details,
        })
        .await?;

    Ok(RankedCandidate {
        id: candidate.id,
        rank: entry.rank,
        name: candidate.name.clone(),
        avatar_url: candidate.avatar_url.clone(),
        avatar_hint: candidate.avatar_hint.clone(),
        total_score,
        key_strength: narrative.key_strength_summary,
        explanation: narrative.explanation,
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::models::candidate::{JobRequirements, Repository};
    use crate::ranking::explanation::{Explanation, TemplateExplanationWriter};
    use crate::ranking::extraction::KeywordSkillExtractor;

    fn corpus() -> Vec<CandidateProfile> {
        vec![
            CandidateProfile {
                id: 1,
                name: "Asha Patel".to_string(),
                avatar_url: "https://example.com/a/1.png".to_string(),
                avatar_hint: "portrait".to_string(),
                problems_solved: 50,
                repositories: vec![
                    Repository {
                        name: "inference-server".to_string(),
                        technologies: vec!["python".to_string()],
                    },
                    Repository {
                        name: "batch-jobs".to_string(),
                        technologies: vec!["cobol".to_string()],
                    },
                ],
                professional_skills: vec!["python".to_string(), "sql".to_string()],
            },
            CandidateProfile {
                id: 2,
                name: "Marcus Webb".to_string(),
                avatar_url: "https://example.com/a/2.png".to_string(),
                avatar_hint: "portrait".to_string(),
                problems_solved: 10,
                repositories: vec![],
                professional_skills: vec![],
            },
        ]
    }

    #[tokio::test]
    async fn test_blank_job_text_returns_empty_list() {
        let ranked = rank_candidates(
            "   ",
            &corpus(),
            &KeywordSkillExtractor,
            &TemplateExplanationWriter,
        )
        .await
        .unwrap();
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_no_usable_terms_returns_empty_list() {
        // Every token is 3 chars or shorter, so the fallback yields no terms.
        let ranked = rank_candidates(
            "a js it go",
            &corpus(),
            &KeywordSkillExtractor,
            &TemplateExplanationWriter,
        )
        .await
        .unwrap();
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_full_pipeline_ranks_and_rounds() {
        let ranked = rank_candidates(
            "Looking for python developers",
            &corpus(),
            &KeywordSkillExtractor,
            &TemplateExplanationWriter,
        )
        .await
        .unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[0].id, 1);
        // terms = {looking, python, developers}; Asha matches 1 of 3 skills.
        assert_eq!(ranked[0].details.skills.matched_skills, vec!["python"]);
        assert_eq!(ranked[0].details.repository.score, 50);
        assert_eq!(ranked[0].details.coding.score, 100);
        assert!(!ranked[0].explanation.is_empty());
        assert!(ranked[0].explanation.contains("Asha Patel"));
    }

    struct FailingWriter;

    #[async_trait]
    impl ExplanationWriter for FailingWriter {
        async fn explain(&self, _input: ExplanationInput<'_>) -> Result<Explanation, AppError> {
            Err(AppError::Explanation("no structured output".to_string()))
        }
    }

    #[tokio::test]
    async fn test_explanation_failure_aborts_whole_request() {
        let result = rank_candidates(
            "python engineer wanted",
            &corpus(),
            &KeywordSkillExtractor,
            &FailingWriter,
        )
        .await;
        assert!(matches!(result, Err(AppError::Explanation(_))));
    }

    struct CountingWriter(AtomicU32);

    #[async_trait]
    impl ExplanationWriter for CountingWriter {
        async fn explain(&self, input: ExplanationInput<'_>) -> Result<Explanation, AppError> {
            let n = self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Explanation {
                explanation: format!("call {} for {}", n, input.candidate.name),
                key_strength_summary: String::new(),
            })
        }
    }

    #[tokio::test]
    async fn test_explanations_attach_in_ranked_order() {
        let writer = CountingWriter(AtomicU32::new(0));
        let ranked = rank_candidates(
            "python engineer wanted",
            &corpus(),
            &KeywordSkillExtractor,
            &writer,
        )
        .await
        .unwrap();

        assert!(ranked[0].explanation.starts_with("call 0"));
        assert!(ranked[1].explanation.starts_with("call 1"));
    }

    struct FailingExtractor;

    #[async_trait]
    impl crate::ranking::extraction::SkillExtractor for FailingExtractor {
        async fn extract(&self, _job_text: &str) -> Result<JobRequirements, AppError> {
            Err(AppError::Extraction("no structured output".to_string()))
        }
    }

    #[tokio::test]
    async fn test_extraction_failure_propagates() {
        let result = rank_candidates(
            "python engineer wanted",
            &corpus(),
            &FailingExtractor,
            &TemplateExplanationWriter,
        )
        .await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
