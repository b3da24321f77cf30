//! Normalization of model-produced ATS score reports.
//!
//! The scoring prompt asks for integers between 0 and 100, but the model
//! can return floats, negatives, strings, or drop fields entirely. The same
//! rule as the resume normalizer applies: coerce everything, fail never.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Breakdown of how well a resume matches a job description, as scored by
/// the model. `overall_ats_score` is a weighted average with skills and
/// experience carrying the highest weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub skills_match_score: u8,
    pub experience_match_score: u8,
    pub education_match_score: u8,
    pub keyword_match_score: u8,
    pub certifications_score: u8,
    pub job_title_alignment_score: u8,
    pub overall_ats_score: u8,
    pub explanation: String,
    pub improvement_suggestions: String,
}

/// Builds an [`AtsReport`] from an extracted object map.
///
/// Total over any input: a score field that is missing or non-numeric
/// becomes 0, numeric scores are rounded then clamped to 0..=100, prose
/// fields default to empty strings.
pub fn normalize_ats_report(data: &Map<String, Value>) -> AtsReport {
    AtsReport {
        skills_match_score: score_field(data, "skills_match_score"),
        experience_match_score: score_field(data, "experience_match_score"),
        education_match_score: score_field(data, "education_match_score"),
        keyword_match_score: score_field(data, "keyword_match_score"),
        certifications_score: score_field(data, "certifications_score"),
        job_title_alignment_score: score_field(data, "job_title_alignment_score"),
        overall_ats_score: score_field(data, "overall_ats_score"),
        explanation: prose_field(data, "explanation"),
        improvement_suggestions: prose_field(data, "improvement_suggestions"),
    }
}

fn score_field(data: &Map<String, Value>, field: &str) -> u8 {
    match data.get(field).and_then(Value::as_f64) {
        Some(v) => v.round().clamp(0.0, 100.0) as u8,
        None => {
            warn!(field, "score field missing or not numeric, defaulting to 0");
            0
        }
    }
}

fn prose_field(data: &Map<String, Value>, field: &str) -> String {
    data.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn test_full_report_passes_through() {
        let report = normalize_ats_report(&map(json!({
            "skills_match_score": 85,
            "experience_match_score": 70,
            "education_match_score": 90,
            "keyword_match_score": 60,
            "certifications_score": 40,
            "job_title_alignment_score": 75,
            "overall_ats_score": 74,
            "explanation": "Strong skills overlap with the listed stack.",
            "improvement_suggestions": "Add the missing cloud certifications."
        })));
        assert_eq!(report.skills_match_score, 85);
        assert_eq!(report.overall_ats_score, 74);
        assert_eq!(report.explanation, "Strong skills overlap with the listed stack.");
        assert_eq!(
            report.improvement_suggestions,
            "Add the missing cloud certifications."
        );
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let report = normalize_ats_report(&map(json!({
            "skills_match_score": 250,
            "experience_match_score": -10,
        })));
        assert_eq!(report.skills_match_score, 100);
        assert_eq!(report.experience_match_score, 0);
    }

    #[test]
    fn test_fractional_scores_are_rounded() {
        let report = normalize_ats_report(&map(json!({"overall_ats_score": 87.6})));
        assert_eq!(report.overall_ats_score, 88);
    }

    #[test]
    fn test_non_numeric_scores_default_to_zero() {
        let report = normalize_ats_report(&map(json!({"keyword_match_score": "high"})));
        assert_eq!(report.keyword_match_score, 0);
    }

    #[test]
    fn test_missing_fields_default() {
        let report = normalize_ats_report(&Map::new());
        assert_eq!(report.overall_ats_score, 0);
        assert_eq!(report.explanation, "");
        assert_eq!(report.improvement_suggestions, "");
    }

    #[test]
    fn test_prose_fields_coerce_to_strings() {
        let report = normalize_ats_report(&map(json!({"explanation": ["not", "a", "string"]})));
        assert_eq!(report.explanation, "");
    }
}
