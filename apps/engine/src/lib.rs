//! Resume structuring engine.
//!
//! Turns raw resume text into a validated, fully-typed [`resume::Resume`]
//! and scores it against a job description via an LLM. All model output
//! passes through the tolerant [`extract`] parser and the defensive
//! normalizers in [`resume`] and [`ats`], so downstream consumers (template
//! rendering, score display) never see a missing or mistyped field.

pub mod ats;
pub mod config;
pub mod errors;
pub mod extract;
pub mod llm_client;
pub mod pipeline;
pub mod resume;

pub use ats::{normalize_ats_report, AtsReport};
pub use errors::EngineError;
pub use extract::extract_json_object;
pub use pipeline::{score_resume, structure_resume};
pub use resume::{has_minimum_resume_data, validate_resume, InvalidInputError, Resume};
