//! @acp:module "Adapter Helpers"
//! @acp:summary "Tool-agnostic context transformations shared by all adapters"
//! @acp:domain cli
//! @acp:layer service
//!
//! Every helper is total over any context: a missing optional field yields an
//! empty result, never an error.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Number;

use super::adapter::ValidationResult;
use crate::context::Context;

/// Separator placed between merged rule documents
pub const RULE_SEPARATOR: &str = "\n\n---\n\n";

/// Leading `---` delimited block, anchored at the very start of the text
static FRONT_MATTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A---\n(?s:.*?)\n---\n").expect("valid front matter regex"));

/// Model settings projected from `context.settings`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelSettings<'a> {
    pub model: Option<&'a str>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<&'a Number>,
}

impl ModelSettings<'_> {
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.temperature.is_none() && self.max_tokens.is_none()
    }
}

/// Render a number the way JavaScript's `String(n)` does.
///
/// Whole values drop the fractional part; magnitudes of `1e21` and above or
/// below `1e-6` use exponent form with an explicit sign (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exponent = format!("{:e}", value);
        return match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exponent,
        };
    }
    format!("{}", value)
}

/// Join rule texts in order, separated by a horizontal rule
pub fn merge_rules(rules: &[String]) -> String {
    rules.join(RULE_SEPARATOR)
}

/// Build a plain system prompt from the description and the merged rules.
///
/// Either section is omitted when its source is absent; a context with
/// neither yields an empty string.
pub fn format_system_prompt(context: &Context) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(description) = context.metadata.as_ref().and_then(|m| m.description.as_ref()) {
        parts.push(description.clone());
        parts.push(String::new());
    }

    if let Some(rules) = context.rules.as_deref().filter(|r| !r.is_empty()) {
        parts.push("## Rules\n".to_string());
        parts.push(merge_rules(rules));
    }

    parts.join("\n")
}

/// Direct projection of the model settings, no defaulting
pub fn get_model_settings(context: &Context) -> ModelSettings<'_> {
    match context.settings.as_ref() {
        Some(settings) => ModelSettings {
            model: settings.model.as_deref(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens.as_ref(),
        },
        None => ModelSettings::default(),
    }
}

/// File patterns from `context.context`, or nothing
pub fn get_file_patterns(context: &Context) -> &[String] {
    context.context.as_deref().unwrap_or(&[])
}

/// Remove a YAML front matter block at position zero and trim the rest.
///
/// Only a block starting at the first byte is removed; `---` blocks later
/// in the document (or after leading whitespace) are kept as written.
pub fn strip_front_matter(content: &str) -> String {
    FRONT_MATTER_PATTERN.replacen(content, 1, "").trim().to_string()
}

/// Default validation: output must not be empty
pub fn validate_output(output: &str) -> ValidationResult {
    if output.is_empty() {
        return ValidationResult::invalid(vec!["Output is empty".to_string()]);
    }
    ValidationResult::ok()
}
