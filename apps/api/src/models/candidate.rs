//! Candidate profile records and the ranked-result shapes returned to callers.

use serde::{Deserialize, Serialize};

/// A code repository on a candidate's profile, with its declared technologies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(rename = "tech")]
    pub technologies: Vec<String>,
}

/// One candidate record from the static corpus.
///
/// Loaded once at startup and never mutated — ranking requests share the
/// corpus read-only behind an `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: u32,
    pub name: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    #[serde(rename = "avatarHint")]
    pub avatar_hint: String,
    #[serde(rename = "problemsSolved")]
    pub problems_solved: u32,
    pub repositories: Vec<Repository>,
    #[serde(rename = "professionalSkills")]
    pub professional_skills: Vec<String>,
}

/// Requirement terms derived from a job description.
///
/// Terms are lower-cased at construction. Duplicates are permitted — the
/// skill-score denominator counts them, matching the original behavior.
#[derive(Debug, Clone, Default)]
pub struct JobRequirements {
    pub terms: Vec<String>,
}

impl JobRequirements {
    /// Lower-cases every term. Empty terms are kept out.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Per-signal detail for the coding-judge score.
#[derive(Debug, Clone, Serialize)]
pub struct CodingDetail {
    pub score: u32,
    pub solved: u32,
}

/// Per-signal detail for the repository score.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryDetail {
    pub score: u32,
    #[serde(rename = "relevantRepos")]
    pub relevant_repos: Vec<Repository>,
}

/// Per-signal detail for the professional-skill score.
#[derive(Debug, Clone, Serialize)]
pub struct SkillDetail {
    pub score: u32,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreDetails {
    pub coding: CodingDetail,
    pub repository: RepositoryDetail,
    pub skills: SkillDetail,
}

/// One row of the ranked list returned to the recruiter.
///
/// All scores are rounded to integers here, at the presentation boundary —
/// the scoring core works in `f64` throughout.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub id: u32,
    pub rank: u32,
    pub name: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    #[serde(rename = "avatarHint")]
    pub avatar_hint: String,
    #[serde(rename = "totalScore")]
    pub total_score: u32,
    #[serde(rename = "keyStrength")]
    pub key_strength: String,
    pub explanation: String,
    pub details: ScoreDetails,
}
