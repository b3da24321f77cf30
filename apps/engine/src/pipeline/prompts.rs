// Prompt constants for the structuring and scoring pipelines.

/// System prompt for resume structuring - enforces JSON-only output.
pub const STRUCTURING_SYSTEM: &str = "You are an expert ATS resume optimization engine. \
    Your ONLY task is to output a SINGLE valid JSON object that extracts and optimizes resume data. \
    Output PURE JSON only: no markdown, no backticks, no comments. \
    All schema fields MUST be present; use empty strings or empty arrays when data is missing. \
    NEVER fabricate information, NEVER rename schema keys, NEVER add extra fields. \
    Dates are plain text strings such as \"Jan 2020\" or \"2019-2021\". \
    If you are unsure about any value, use an empty string or empty array instead of inventing data.";

/// System prompt for ATS scoring - enforces JSON-only integer scores.
pub const SCORING_SYSTEM: &str = "You are an expert Applicant Tracking System evaluator. \
    Analyze how well a resume matches a job description and return an objective scoring analysis. \
    Output PURE JSON only: no markdown, no backticks, no text outside the JSON object. \
    All scores are integers between 0 and 100, based on actual content matching rather than potential. \
    Compute overall_ats_score as a weighted average: skills 30%, experience 30%, \
    keywords 20%, education 10%, certifications 5%, job title 5%.";

/// Structuring prompt template. Replace `{resume_text}` and
/// `{job_description}` before sending.
const STRUCTURING_TEMPLATE: &str = r#"Extract the resume below into a JSON object with this EXACT schema (no extra fields):
{
  "name": "",
  "profile_summary": "",
  "contact": {"email": "", "phone": "", "location": "", "github": "", "linkedin": "", "website": ""},
  "skills": {"languages": [], "frameworks": [], "tools": [], "soft_skills": []},
  "education": [{"institution": "", "location": "", "degree": "", "start": "", "end": "", "details": []}],
  "experience": [{"company": "", "title": "", "location": "", "start": "", "end": "", "bullets": []}],
  "projects": [{"name": "", "role": "", "start": "", "end": "", "url": "", "bullets": []}],
  "certifications": [{"name": "", "issuer": "", "year": ""}],
  "achievements": []
}

Rephrase bullet points to mirror the vocabulary of the job description without inventing facts.

RESUME TEXT:
{resume_text}

JOB DESCRIPTION:
{job_description}

Return ONLY the JSON object. No markdown, no backticks, no explanations."#;

/// Scoring prompt template. Replace `{resume_text}` and `{job_description}`
/// before sending.
const SCORING_TEMPLATE: &str = r#"Compare the resume and job description below. Evaluate skills match, experience match, education match, keyword match, certifications, and job title alignment, then return a JSON object with this EXACT schema:
{
  "skills_match_score": 0,
  "experience_match_score": 0,
  "education_match_score": 0,
  "keyword_match_score": 0,
  "certifications_score": 0,
  "job_title_alignment_score": 0,
  "overall_ats_score": 0,
  "explanation": "",
  "improvement_suggestions": ""
}

Cite concrete skills, keywords, and requirements in the explanation, and make the improvement suggestions specific and actionable rather than generic advice.

RESUME TEXT:
{resume_text}

JOB DESCRIPTION:
{job_description}

Return ONLY the JSON object. No markdown, no backticks, no explanations."#;

/// Builds the structuring prompt. A missing job description falls back to
/// a general-compatibility instruction.
pub fn structuring_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let jd = job_description.unwrap_or(
        "No specific job description provided. Optimize for general ATS compatibility.",
    );
    STRUCTURING_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", jd)
}

/// Builds the scoring prompt.
pub fn scoring_prompt(resume_text: &str, job_description: &str) -> String {
    SCORING_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}
