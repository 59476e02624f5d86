//! Profile-strength score — the job-seeker-side pure function.
//!
//! Same three signals and weights as candidate ranking, but each signal is
//! normalized against the corpus maximum for that signal rather than a
//! requirement set.

use serde::Serialize;

use crate::models::candidate::CandidateProfile;
use crate::ranking::scoring::{WEIGHT_CODING, WEIGHT_REPOSITORY, WEIGHT_SKILL};

/// The three profile signals, in tie-break order: when two categories
/// score equally, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthCategory {
    Repository,
    Coding,
    Professional,
}

impl StrengthCategory {
    /// Display name used in the templated summary.
    pub fn display_name(self) -> &'static str {
        match self {
            StrengthCategory::Repository => "Software Development",
            StrengthCategory::Coding => "Problem Solving",
            StrengthCategory::Professional => "Professional Skills",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileStrength {
    pub score: u32,
    pub summary: String,
    #[serde(skip)]
    pub top_category: StrengthCategory,
}

/// Computes the profile strength of `user` relative to the corpus.
///
/// Each corpus maximum gets a floor of 1 so an all-empty corpus cannot
/// divide by zero. Rounding happens only on the returned score.
pub fn profile_strength(user: &CandidateProfile, corpus: &[CandidateProfile]) -> ProfileStrength {
    let max_problems = corpus
        .iter()
        .map(|c| c.problems_solved)
        .max()
        .unwrap_or(0)
        .max(1);
    let max_repos = corpus
        .iter()
        .map(|c| c.repositories.len())
        .max()
        .unwrap_or(0)
        .max(1);
    let max_skills = corpus
        .iter()
        .map(|c| c.professional_skills.len())
        .max()
        .unwrap_or(0)
        .max(1);

    let coding_score = 100.0 * f64::from(user.problems_solved) / f64::from(max_problems);
    let repository_score = 100.0 * user.repositories.len() as f64 / max_repos as f64;
    let skill_score = 100.0 * user.professional_skills.len() as f64 / max_skills as f64;

    let total = WEIGHT_CODING * coding_score
        + WEIGHT_REPOSITORY * repository_score
        + WEIGHT_SKILL * skill_score;

    let top_category = top_category(repository_score, coding_score, skill_score);
    let category = top_category.display_name();

    let summary = if total > 75.0 {
        format!("Excellent profile with strong {category} skills.")
    } else if total > 50.0 {
        format!("Solid profile with good {category} skills.")
    } else {
        format!("Profile with potential, especially in {category}.")
    };

    ProfileStrength {
        score: total.round() as u32,
        summary,
        top_category,
    }
}

/// Strict-maximum scan over the fixed order repository, coding, professional.
fn top_category(repository: f64, coding: f64, professional: f64) -> StrengthCategory {
    let ordered = [
        (StrengthCategory::Repository, repository),
        (StrengthCategory::Coding, coding),
        (StrengthCategory::Professional, professional),
    ];

    let mut best = ordered[0];
    for entry in &ordered[1..] {
        if entry.1 > best.1 {
            best = *entry;
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::Repository;

    fn candidate(id: u32, solved: u32, repos: usize, skills: usize) -> CandidateProfile {
        CandidateProfile {
            id,
            name: format!("Candidate {id}"),
            avatar_url: String::new(),
            avatar_hint: String::new(),
            problems_solved: solved,
            repositories: (0..repos)
                .map(|i| Repository {
                    name: format!("repo-{i}"),
                    technologies: vec!["rust".to_string()],
                })
                .collect(),
            professional_skills: (0..skills).map(|i| format!("skill-{i}")).collect(),
        }
    }

    #[test]
    fn test_corpus_leader_scores_100() {
        let corpus = vec![candidate(1, 100, 4, 6), candidate(2, 50, 2, 3)];
        let strength = profile_strength(&corpus[0], &corpus);
        assert_eq!(strength.score, 100);
        assert!(strength.summary.starts_with("Excellent profile"));
    }

    #[test]
    fn test_all_zero_corpus_does_not_divide_by_zero() {
        let corpus = vec![candidate(1, 0, 0, 0)];
        let strength = profile_strength(&corpus[0], &corpus);
        assert_eq!(strength.score, 0);
    }

    #[test]
    fn test_top_category_tie_resolves_repository_first() {
        // All three signals equal → repository wins the fixed-order scan.
        assert_eq!(
            top_category(50.0, 50.0, 50.0),
            StrengthCategory::Repository
        );
        // Coding beats professional on a two-way tie.
        assert_eq!(top_category(10.0, 60.0, 60.0), StrengthCategory::Coding);
    }

    #[test]
    fn test_top_category_strict_maximum() {
        assert_eq!(top_category(10.0, 20.0, 90.0), StrengthCategory::Professional);
        assert_eq!(top_category(10.0, 95.0, 90.0), StrengthCategory::Coding);
    }

    #[test]
    fn test_summary_tiers() {
        // Half the corpus max on every signal → total 50 → lowest tier.
        let corpus = vec![candidate(1, 50, 2, 3), candidate(2, 100, 4, 6)];
        let strength = profile_strength(&corpus[0], &corpus);
        assert_eq!(strength.score, 50);
        assert!(strength.summary.starts_with("Profile with potential"));

        // Between 50 and 75 → middle tier.
        let corpus = vec![candidate(1, 60, 3, 4), candidate(2, 100, 4, 6)];
        let strength = profile_strength(&corpus[0], &corpus);
        assert!(strength.summary.starts_with("Solid profile"));
    }

    #[test]
    fn test_summary_names_top_category() {
        // Repository signal dominates.
        let corpus = vec![candidate(1, 1, 4, 1), candidate(2, 100, 4, 10)];
        let strength = profile_strength(&corpus[0], &corpus);
        assert!(strength.summary.contains("Software Development"));
        assert_eq!(strength.top_category, StrengthCategory::Repository);
    }
}
