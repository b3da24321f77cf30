// Structuring and scoring pipelines: prompt the model, extract the JSON it
// was asked for, normalize. All LLM calls go through llm_client.

pub mod prompts;

use serde_json::Value;
use tracing::{info, warn};

use crate::ats::{normalize_ats_report, AtsReport};
use crate::errors::EngineError;
use crate::extract::extract_json_object;
use crate::llm_client::ChatModel;
use crate::resume::{has_minimum_resume_data, validate_resume, Resume};

/// Inputs shorter than this cannot be a usable resume.
const MIN_RESUME_TEXT_LEN: usize = 50;

const STRUCTURE_TEMPERATURE: f32 = 0.3;
const STRUCTURE_MAX_TOKENS: u32 = 4000;
const SCORE_TEMPERATURE: f32 = 0.2;
const SCORE_MAX_TOKENS: u32 = 1200;

/// Turns raw resume text into a canonical [`Resume`] tailored to the job
/// description (general ATS compatibility when no JD is given).
///
/// The error keeps content-quality failures distinct: nothing extractable
/// from the model output, a structurally invalid root, and a record too
/// thin to be useful.
pub async fn structure_resume(
    model: &dyn ChatModel,
    resume_text: &str,
    job_description: Option<&str>,
) -> Result<Resume, EngineError> {
    if resume_text.trim().len() < MIN_RESUME_TEXT_LEN {
        return Err(EngineError::InputTooShort);
    }

    let prompt = prompts::structuring_prompt(resume_text, job_description);
    let raw = model
        .complete(
            &prompt,
            prompts::STRUCTURING_SYSTEM,
            STRUCTURE_TEMPERATURE,
            STRUCTURE_MAX_TOKENS,
        )
        .await?;

    let object = extract_json_object(&raw).ok_or(EngineError::NoStructuredData)?;
    let resume = validate_resume(&Value::Object(object))?;

    if !has_minimum_resume_data(&resume) {
        warn!(name = %resume.name, "resume extracted but missing critical information");
        return Err(EngineError::ThinContent);
    }

    info!(name = %resume.name, "resume structured and validated");
    Ok(resume)
}

/// Scores raw resume text against a job description, returning a normalized
/// [`AtsReport`] with every score clamped to 0..=100.
pub async fn score_resume(
    model: &dyn ChatModel,
    resume_text: &str,
    job_description: &str,
) -> Result<AtsReport, EngineError> {
    if resume_text.trim().len() < MIN_RESUME_TEXT_LEN {
        return Err(EngineError::InputTooShort);
    }

    let prompt = prompts::scoring_prompt(resume_text, job_description);
    let raw = model
        .complete(
            &prompt,
            prompts::SCORING_SYSTEM,
            SCORE_TEMPERATURE,
            SCORE_MAX_TOKENS,
        )
        .await?;

    let object = extract_json_object(&raw).ok_or(EngineError::NoStructuredData)?;
    let report = normalize_ats_report(&object);

    info!(overall = report.overall_ats_score, "ATS report computed");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::llm_client::LlmError;

    struct CannedModel(&'static str);

    #[async_trait]
    impl ChatModel for CannedModel {
        async fn complete(
            &self,
            _prompt: &str,
            _system: &str,
            _temperature: f32,
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl ChatModel for FailingModel {
        async fn complete(
            &self,
            _prompt: &str,
            _system: &str,
            _temperature: f32,
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    const RESUME_TEXT: &str = "Alice Smith. Senior engineer with ten years of experience \
        building distributed systems in Rust and Go at Acme Corp.";

    #[tokio::test]
    async fn test_structure_resume_happy_path() {
        let model = CannedModel(
            "```json\n{\"name\": \"Alice Smith\", \"skills\": {\"languages\": [\"Rust\", \"Go\"]}}\n```",
        );
        let resume = structure_resume(&model, RESUME_TEXT, Some("Rust engineer"))
            .await
            .unwrap();
        assert_eq!(resume.name, "Alice Smith");
        assert_eq!(resume.skills.languages, vec!["Rust", "Go"]);
        assert!(resume.experience.is_empty());
    }

    #[tokio::test]
    async fn test_structure_resume_rejects_short_input() {
        let model = CannedModel("{}");
        let err = structure_resume(&model, "too short", None)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::InputTooShort));
    }

    #[tokio::test]
    async fn test_structure_resume_no_structured_data() {
        let model = CannedModel("I could not process this resume, sorry.");
        let err = structure_resume(&model, RESUME_TEXT, None)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::NoStructuredData));
    }

    #[tokio::test]
    async fn test_structure_resume_thin_content() {
        // parses and validates, but carries nothing beyond a name
        let model = CannedModel("{\"name\": \"Alice\"}");
        let err = structure_resume(&model, RESUME_TEXT, None)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::ThinContent));
    }

    #[tokio::test]
    async fn test_structure_resume_propagates_llm_error() {
        let err = structure_resume(&FailingModel, RESUME_TEXT, None)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Llm(_)));
    }

    #[tokio::test]
    async fn test_score_resume_normalizes_model_output() {
        let model = CannedModel(
            "{\"skills_match_score\": 120, \"experience_match_score\": \"high\", \
             \"overall_ats_score\": 77.4, \"explanation\": \"solid match\"}",
        );
        let report = score_resume(&model, RESUME_TEXT, "Rust engineer")
            .await
            .unwrap();
        assert_eq!(report.skills_match_score, 100);
        assert_eq!(report.experience_match_score, 0);
        assert_eq!(report.overall_ats_score, 77);
        assert_eq!(report.explanation, "solid match");
    }

    #[tokio::test]
    async fn test_score_resume_requires_substantive_input() {
        let model = CannedModel("{}");
        let err = score_resume(&model, "   ", "JD").await.unwrap_err();
        assert!(matches!(err, EngineError::InputTooShort));
    }

    #[test]
    fn test_prompts_embed_inputs() {
        let p = prompts::structuring_prompt("RESUME BODY", Some("JOB BODY"));
        assert!(p.contains("RESUME BODY"));
        assert!(p.contains("JOB BODY"));
        let s = prompts::scoring_prompt("RESUME BODY", "JOB BODY");
        assert!(s.contains("RESUME BODY"));
        assert!(s.contains("JOB BODY"));
    }

    #[test]
    fn test_structuring_prompt_defaults_missing_jd() {
        let p = prompts::structuring_prompt("RESUME BODY", None);
        assert!(p.contains("general ATS compatibility"));
    }
}
