use thiserror::Error;

use crate::llm_client::LlmError;
use crate::resume::InvalidInputError;

/// Top-level error for the structuring and scoring pipelines.
///
/// The three content-quality failures stay separate variants: callers
/// surface "nothing extractable", "structurally invalid root", and "too
/// thin to use" differently to end users.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("resume text is too short or empty")]
    InputTooShort,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("no structured data could be extracted from model output")]
    NoStructuredData,

    #[error(transparent)]
    InvalidResume(#[from] InvalidInputError),

    #[error("extracted resume is missing critical information")]
    ThinContent,
}
