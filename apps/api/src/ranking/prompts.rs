// All LLM prompt constants for the ranking module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for skill extraction — enforces JSON-only output.
pub const SKILL_EXTRACTION_SYSTEM: &str =
    "You are an expert recruiter AI analyzing job descriptions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Skill extraction prompt template. Replace `{job_description}` before sending.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and extract the required skills, experience keywords, and technologies.

Return a JSON object with this EXACT schema (no extra fields):
{
  "requiredSkills": ["communication", "team leadership"],
  "experienceKeywords": ["senior", "startup experience"],
  "technologies": ["React", "Node.js", "Python", "AWS"]
}

- requiredSkills: required technical and soft skills.
- experienceKeywords: keywords about experience level or type (e.g. "senior", "team lead").
- technologies: specific technologies, frameworks, or programming languages mentioned.

JOB DESCRIPTION:
{job_description}"#;

/// System prompt for candidate explanations — enforces JSON-only output.
pub const EXPLANATION_SYSTEM: &str =
    "You are an AI assistant for a recruitment system generating concise, \
    clear explanations of candidate suitability scores. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Candidate explanation prompt template.
/// Replace: {candidate_name}, {total_score}, {job_description},
///          {matched_terms}, {problems_solved}, {repositories}, {skills}
pub const EXPLANATION_PROMPT_TEMPLATE: &str = r#"Generate an explanation for a candidate's suitability score based on the job description and their profile. Highlight key strengths and how they align with the job requirements.

Job Description:
{job_description}

Matched requirement terms: {matched_terms}

Candidate Name: {candidate_name}
Candidate Suitability Score: {total_score}%

Candidate Profile:
- Coding problems solved: {problems_solved}
- Repositories (with technologies): {repositories}
- Professional skills: {skills}

Explain why {candidate_name} received a suitability score of {total_score}%, linking their profile to the required skills. Return a JSON object:
{
  "explanation": "Detailed explanation here...",
  "keyStrengthsSummary": "Brief one-sentence summary here."
}"#;
