//! Response validation — turns raw model output into a `GeneratedSite`.
//!
//! The model is instructed to emit a bare JSON object, but may still wrap it
//! in code fences or surrounding prose. Extraction tolerates both; the
//! validated shape is not negotiable.

use serde_json::Value;
use tracing::error;

use crate::errors::AppError;
use crate::models::site::GeneratedSite;

/// Parses and validates raw model output into a `GeneratedSite`.
///
/// Raw output is logged server-side on failure. Callers must never surface
/// it to the client.
pub fn parse_generated_site(raw: &str) -> Result<GeneratedSite, AppError> {
    let candidate = extract_json_object(strip_json_fences(raw)).ok_or_else(|| {
        error!("Model output contained no JSON object. Raw output: {raw}");
        AppError::ResponseParse("model output contained no JSON object".to_string())
    })?;

    let value: Value = serde_json::from_str(candidate).map_err(|e| {
        error!("Model output was not valid JSON ({e}). Raw output: {raw}");
        AppError::ResponseParse(format!("model output was not valid JSON: {e}"))
    })?;

    let html = require_string(&value, "html")?;
    let css = require_string(&value, "css")?;
    let js = require_string(&value, "js")?;

    // css and js may legitimately be empty; html may not.
    if html.is_empty() {
        return Err(parse_failure(
            &value,
            "value for \"html\" is an empty string".to_string(),
        ));
    }

    Ok(GeneratedSite { html, css, js })
}

/// Slices the candidate JSON object out of raw model output: everything from
/// the first `{` to the last `}` inclusive. Returns `None` when no such span
/// exists. Known limitation: trailing prose containing a stray `}` widens the
/// span, and the subsequent parse fails.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn require_string(value: &Value, key: &str) -> Result<String, AppError> {
    let field = value
        .get(key)
        .ok_or_else(|| parse_failure(value, format!("missing required key \"{key}\"")))?;
    field
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| parse_failure(value, format!("value for \"{key}\" is not a string")))
}

fn parse_failure(value: &Value, reason: String) -> AppError {
    error!("Model returned incomplete site JSON: {reason}. Parsed object: {value}");
    AppError::ResponseParse(reason)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
