//! Tolerant JSON extraction from model output.
//!
//! Chat models asked for "JSON only" still wrap the object in markdown
//! fences, prepend prose, or leave raw newlines inside string values. This
//! module recovers the first balanced `{...}` block from such text, repairs
//! in-string control characters, and parses the result. Every failure mode
//! degrades to `None`: the caller's next move is a different strategy or a
//! clean user-facing error, not a panic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Quote/escape tracking while scanning JSON-ish text.
///
/// Structural characters only count while `Outside`; an escaped quote never
/// flips the in-string flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InString,
    InStringEscaped,
}

impl ScanState {
    fn advance(self, ch: char) -> ScanState {
        match self {
            ScanState::Outside if ch == '"' => ScanState::InString,
            ScanState::Outside => ScanState::Outside,
            ScanState::InString if ch == '"' => ScanState::Outside,
            ScanState::InString if ch == '\\' => ScanState::InStringEscaped,
            ScanState::InString => ScanState::InString,
            ScanState::InStringEscaped => ScanState::InString,
        }
    }
}

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)```(?:json)?").expect("fence pattern"));

/// `"subject": "..."` with optional quotes around the key, value ending at
/// `,` or `}`.
static SUBJECT_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)"?subject"?\s*:\s*"(.*?)"\s*[,}]"#).expect("subject pattern"));
static BODY_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)"?body"?\s*:\s*"(.*?)"\s*[,}]"#).expect("body pattern"));

/// Extracts the first balanced JSON object from `text`.
///
/// Returns the parsed object map, or the subject/body fallback map when the
/// candidate will not parse, or `None`. Never returns an error: unparseable
/// input is an expected condition at this layer.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    if text.is_empty() {
        return None;
    }

    // Fence tokens are removed globally, not as balanced pairs. A fence
    // token embedded inside a string value is stripped too; accepted
    // limitation of this pass.
    let stripped = FENCE.replace_all(text, "");
    let stripped = stripped.trim();

    let candidate = first_balanced_object(stripped)?;
    let repaired = escape_raw_controls(candidate);

    match serde_json::from_str::<Value>(&repaired) {
        Ok(Value::Object(map)) => {
            debug!(fields = map.len(), "extracted JSON object from model output");
            Some(map)
        }
        Ok(_) => {
            warn!("candidate parsed to a non-object JSON value");
            subject_body_fallback(&repaired)
        }
        Err(err) => {
            warn!(%err, "candidate failed to parse after repair");
            subject_body_fallback(&repaired)
        }
    }
}

/// Finds the first `{` and scans to its matching `}`, ignoring braces that
/// occur inside string literals. Returns `None` when no balanced object
/// closes before the end of the text (truncated output).
fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth: u32 = 0;
    let mut state = ScanState::Outside;

    for (offset, ch) in text[start..].char_indices() {
        state = state.advance(ch);
        if state == ScanState::Outside {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&text[start..start + offset + 1]);
                    }
                }
                _ => {}
            }
        }
    }
    None
}

/// Rewrites raw control characters inside string literals so the candidate
/// becomes strict JSON: a literal newline or carriage return becomes the
/// two-character escape `\n`, a literal tab becomes `\t`. Already-escaped
/// sequences pass through untouched.
fn escape_raw_controls(candidate: &str) -> String {
    let mut out = String::with_capacity(candidate.len());
    let mut state = ScanState::Outside;

    for ch in candidate.chars() {
        let in_string = state != ScanState::Outside;
        state = state.advance(ch);

        if in_string && (ch == '\n' || ch == '\r') {
            out.push_str("\\n");
        } else if in_string && ch == '\t' {
            out.push_str("\\t");
        } else {
            out.push(ch);
        }
    }
    out
}

/// Last-resort extraction of an email-style `subject`/`body` pair from text
/// that would not parse as JSON. Compatibility shim for one legacy output
/// shape; covers exactly these two fields and must not grow more.
fn subject_body_fallback(repaired: &str) -> Option<Map<String, Value>> {
    let subject = SUBJECT_FIELD
        .captures(repaired)
        .map(|c| decode_fallback_value(&c[1]));
    let body = BODY_FIELD
        .captures(repaired)
        .map(|c| decode_fallback_value(&c[1]));

    if subject.is_none() && body.is_none() {
        return None;
    }

    warn!("falling back to subject/body field extraction");
    let mut map = Map::new();
    map.insert(
        "subject".to_string(),
        subject.map(Value::String).unwrap_or(Value::Null),
    );
    map.insert(
        "body".to_string(),
        body.map(Value::String).unwrap_or(Value::Null),
    );
    Some(map)
}

/// Collapses the escape sequences the legacy producer left inside captured
/// values.
fn decode_fallback_value(raw: &str) -> String {
    raw.replace("\\n\\n", "")
        .replace("\\n", "")
        .replace("\\t", "\t")
        .replace("\\\"", "")
        .trim()
        .to_string()
}
