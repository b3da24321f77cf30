//! Canonical resume record: the fully-typed, fully-defaulted representation
//! that every downstream consumer (scoring, template rendering) reads with
//! unchecked field access.

use serde::{Deserialize, Serialize};

mod validate;

pub use validate::{has_minimum_resume_data, validate_resume, InvalidInputError};

/// Placeholder substituted when the source data carries no usable name.
pub const NAME_PLACEHOLDER: &str = "Name Not Found";

/// Contact block. Absent or mistyped fields become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
    pub website: String,
}

/// Skill lists grouped the way ATS templates expect them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub start: String,
    pub end: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub role: String,
    pub start: String,
    pub end: String,
    pub url: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

/// The canonical resume record. Every field is always present; array fields
/// hold only non-blank strings. Dates stay free-form text ("Jan 2020",
/// "2019-2021") exactly as the model produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub profile_summary: String,
    pub contact: Contact,
    pub skills: Skills,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub achievements: Vec<String>,
}
