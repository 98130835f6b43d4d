use crate::error::GenerationError;
use serde_json::Value;

pub const DEFAULT_NAME: &str = "Character";
pub const FALLBACK_GREETING: &str = "Hello there! Let's chat.";

/// The three text fields of a profile, validated and trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFields {
    pub name: String,
    pub enhanced_description: String,
    pub greeting: String,
}

/// Validates the raw completion text of the combined generation call.
///
/// A missing name or greeting is replaced with a default; a missing description
/// cannot be, and fails the whole generation.
pub fn parse_generated_fields(raw: &str) -> Result<GeneratedFields, GenerationError> {
    let raw = raw.trim();
    let value: Value = if raw.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(raw)?
    };

    let name = non_blank(&value, "name").unwrap_or(DEFAULT_NAME).to_string();

    let Some(enhanced_description) = non_blank(&value, "enhancedDescription") else {
        tracing::error!(
            "Failed to extract valid enhancedDescription from model response: {}",
            value
        );
        return Err(GenerationError::MissingDescription);
    };

    let greeting = greeting_or_default(non_blank(&value, "greeting"), &name);

    Ok(GeneratedFields {
        name,
        enhanced_description: enhanced_description.to_string(),
        greeting,
    })
}

fn non_blank<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn greeting_or_default(greeting: Option<&str>, name: &str) -> String {
    let greeting = match greeting {
        Some(greeting) => greeting.to_string(),
        None => format!("Hello! I'm {name}. Ready to chat."),
    };
    if greeting.trim().is_empty() {
        tracing::warn!("Greeting became empty after processing, using hardcoded default");
        return FALLBACK_GREETING.to_string();
    }
    greeting
}
