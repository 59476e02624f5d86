//! Candidate scoring and ranking — the deterministic core.
//!
//! Pure arithmetic over well-formed inputs: this module never fails and
//! never touches the network. Scores stay `f64` here; rounding happens
//! at the presentation boundary in the pipeline.

use std::collections::HashSet;

use crate::models::candidate::{CandidateProfile, JobRequirements, Repository};

/// Weight of the coding-judge signal in the total score.
pub const WEIGHT_CODING: f64 = 0.3;
/// Weight of the repository-relevance signal.
pub const WEIGHT_REPOSITORY: f64 = 0.4;
/// Weight of the professional-skill signal.
pub const WEIGHT_SKILL: f64 = 0.3;

/// Unrounded per-candidate scores plus the matching evidence.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub coding_score: f64,
    pub repository_score: f64,
    pub skill_score: f64,
    pub total_score: f64,
    pub relevant_repos: Vec<Repository>,
    pub matched_skills: Vec<String>,
}

/// One candidate with its breakdown and 1-based rank.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a CandidateProfile,
    pub breakdown: ScoreBreakdown,
    pub rank: u32,
}

/// Ranks the corpus against the requirement terms.
///
/// Empty terms return an empty list — no work, no error. The sort is
/// stable, so candidates with equal totals keep their corpus order.
pub fn rank<'a>(
    requirements: &JobRequirements,
    corpus: &'a [CandidateProfile],
) -> Vec<ScoredCandidate<'a>> {
    if requirements.is_empty() {
        return Vec::new();
    }

    let term_set: HashSet<&str> = requirements.terms.iter().map(String::as_str).collect();

    // Floor of 1 so a corpus of all-zero solvers doesn't divide by zero.
    let max_problems = corpus
        .iter()
        .map(|c| c.problems_solved)
        .max()
        .unwrap_or(0)
        .max(1);

    let mut scored: Vec<ScoredCandidate<'a>> = corpus
        .iter()
        .map(|candidate| ScoredCandidate {
            candidate,
            breakdown: score_candidate(candidate, requirements, &term_set, max_problems),
            rank: 0,
        })
        .collect();

    scored.sort_by(|a, b| b.breakdown.total_score.total_cmp(&a.breakdown.total_score));

    for (index, entry) in scored.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }

    scored
}

fn score_candidate(
    candidate: &CandidateProfile,
    requirements: &JobRequirements,
    term_set: &HashSet<&str>,
    max_problems: u32,
) -> ScoreBreakdown {
    let coding_score = 100.0 * f64::from(candidate.problems_solved) / f64::from(max_problems);

    let relevant_repos: Vec<Repository> = candidate
        .repositories
        .iter()
        .filter(|repo| {
            repo.technologies
                .iter()
                .any(|t| term_set.contains(t.to_lowercase().as_str()))
        })
        .cloned()
        .collect();
    let repository_score = if candidate.repositories.is_empty() {
        0.0
    } else {
        100.0 * relevant_repos.len() as f64 / candidate.repositories.len() as f64
    };

    let matched_skills: Vec<String> = candidate
        .professional_skills
        .iter()
        .filter(|skill| term_set.contains(skill.to_lowercase().as_str()))
        .cloned()
        .collect();
    let skill_score = 100.0 * matched_skills.len() as f64 / requirements.terms.len() as f64;

    let total_score = WEIGHT_CODING * coding_score
        + WEIGHT_REPOSITORY * repository_score
        + WEIGHT_SKILL * skill_score;

    ScoreBreakdown {
        coding_score,
        repository_score,
        skill_score,
        total_score,
        relevant_repos,
        matched_skills,
    }
}
