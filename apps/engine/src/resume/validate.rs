//! Defensive normalization of model-produced resume JSON.
//!
//! One boundary function absorbs every malformed shape the model can emit;
//! past this point the record is guaranteed complete and correctly typed.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::{
    CertificationEntry, Contact, EducationEntry, ExperienceEntry, ProjectEntry, Resume, Skills,
    NAME_PLACEHOLDER,
};

/// The root value was not a JSON object. The one unrecoverable input shape:
/// there is no sensible default for an entire resume.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid resume data: must be an object")]
pub struct InvalidInputError;

/// Coerces an arbitrary JSON value into a canonical [`Resume`].
///
/// Fails only when `data` is not an object. Everything else is normalized
/// field by field: wrong-typed scalars fall back to their defaults, array
/// elements that are not non-blank strings are dropped, and entries of the
/// nested object arrays are rebuilt with every sub-field present even when
/// the source element is not an object at all. The input is never mutated.
pub fn validate_resume(data: &Value) -> Result<Resume, InvalidInputError> {
    let root = data.as_object().ok_or(InvalidInputError)?;

    let contact_src = root.get("contact");
    let skills_src = root.get("skills");

    let resume = Resume {
        name: string_or(root.get("name"), NAME_PLACEHOLDER),
        profile_summary: string_field(root.get("profile_summary")),
        contact: Contact {
            email: string_field(sub(contact_src, "email")),
            phone: string_field(sub(contact_src, "phone")),
            location: string_field(sub(contact_src, "location")),
            github: string_field(sub(contact_src, "github")),
            linkedin: string_field(sub(contact_src, "linkedin")),
            website: string_field(sub(contact_src, "website")),
        },
        skills: Skills {
            languages: string_array(sub(skills_src, "languages")),
            frameworks: string_array(sub(skills_src, "frameworks")),
            tools: string_array(sub(skills_src, "tools")),
            soft_skills: string_array(sub(skills_src, "soft_skills")),
        },
        education: entries(root.get("education"), |e| EducationEntry {
            institution: string_field(e.get("institution")),
            location: string_field(e.get("location")),
            degree: string_field(e.get("degree")),
            start: string_field(e.get("start")),
            end: string_field(e.get("end")),
            details: string_array(e.get("details")),
        }),
        experience: entries(root.get("experience"), |e| ExperienceEntry {
            company: string_field(e.get("company")),
            title: string_field(e.get("title")),
            location: string_field(e.get("location")),
            start: string_field(e.get("start")),
            end: string_field(e.get("end")),
            bullets: string_array(e.get("bullets")),
        }),
        projects: entries(root.get("projects"), |p| ProjectEntry {
            name: string_field(p.get("name")),
            role: string_field(p.get("role")),
            start: string_field(p.get("start")),
            end: string_field(p.get("end")),
            url: string_field(p.get("url")),
            bullets: string_array(p.get("bullets")),
        }),
        certifications: entries(root.get("certifications"), |c| CertificationEntry {
            name: string_field(c.get("name")),
            issuer: string_field(c.get("issuer")),
            year: string_field(c.get("year")),
        }),
        achievements: string_array(root.get("achievements")),
    };

    debug!(
        name = %resume.name,
        experience = resume.experience.len(),
        education = resume.education.len(),
        projects = resume.projects.len(),
        "resume normalized"
    );

    Ok(resume)
}

/// Substance check distinct from schema validity: does the record carry
/// enough content to be worth rendering or scoring?
///
/// True only when the name is real (non-empty and not the placeholder) and
/// at least one of contact email/phone, experience, education, or a skills
/// list is populated.
pub fn has_minimum_resume_data(resume: &Resume) -> bool {
    let has_name = !resume.name.is_empty() && resume.name != NAME_PLACEHOLDER;
    let has_contact = !resume.contact.email.is_empty() || !resume.contact.phone.is_empty();
    let has_experience = !resume.experience.is_empty();
    let has_education = !resume.education.is_empty();
    let has_skills = !resume.skills.languages.is_empty()
        || !resume.skills.frameworks.is_empty()
        || !resume.skills.tools.is_empty()
        || !resume.skills.soft_skills.is_empty();

    has_name && (has_contact || has_experience || has_education || has_skills)
}

/// Keeps a string source as-is (including empty), substitutes `default` for
/// anything else.
fn string_or(value: Option<&Value>, default: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => default.to_string(),
    }
}

fn string_field(value: Option<&Value>) -> String {
    string_or(value, "")
}

/// Keeps only elements that are strings with non-blank trimmed content.
/// Order is preserved; no deduplication.
fn string_array(value: Option<&Value>) -> Vec<String> {
    match value.and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Maps each array element through `build`. `Value::get` returns `None` on
/// non-object elements, so a string or number in the array still yields a
/// fully-defaulted entry.
fn entries<T>(value: Option<&Value>, build: impl Fn(&Value) -> T) -> Vec<T> {
    match value.and_then(Value::as_array) {
        Some(items) => items.iter().map(build).collect(),
        None => Vec::new(),
    }
}

/// Safe navigation into a maybe-object: `None` when the parent is missing
/// or not an object.
fn sub<'a>(parent: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    parent.and_then(|v| v.get(key))
}
