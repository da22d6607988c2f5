//! Structural and policy validation of prompt definitions.
//!
//! The validator is a fixed, ordered battery of independent rules. Every rule
//! runs; their findings are concatenated. Nothing here fails: problems are
//! reported in a [`ValidationResult`], never returned as errors.

use crate::types::PromptDefinition;
use serde::Serialize;

/// Findings for one prompt definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Validity-blocking problems
    pub errors: Vec<String>,

    /// Advisory findings; never affect validity
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another result's findings, keeping order.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// A single validation rule.
pub type Rule = fn(&PromptDefinition) -> ValidationResult;

/// Rules in reporting order.
pub const RULES: &[(&str, Rule)] = &[
    ("required_fields", required_fields),
    ("unused_variables", unused_variables),
    ("json_hint", json_hint),
    ("output_token_bound", output_token_bound),
    ("forbidden_phrases", forbidden_phrases),
];

/// Run every rule against `definition`.
pub fn validate(definition: &PromptDefinition) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (name, rule) in RULES {
        let findings = rule(definition);
        if !findings.errors.is_empty() || !findings.warnings.is_empty() {
            tracing::debug!(
                rule = *name,
                errors = findings.errors.len(),
                warnings = findings.warnings.len(),
                "Rule reported findings for {}",
                definition.label()
            );
        }
        result.merge(findings);
    }

    result
}

/// Placeholder token for a variable name: `{{name}}`.
pub fn placeholder(variable: &str) -> String {
    format!("{{{{{}}}}}", variable)
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// `name`, `version` and `template` must be non-blank.
pub fn required_fields(p: &PromptDefinition) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (field, value) in [
        ("name", &p.name),
        ("version", &p.version),
        ("template", &p.template),
    ] {
        if is_blank(value) {
            result.add_error(format!("Missing required field: {}", field));
        }
    }

    result
}

/// Every declared variable should appear in the template as `{{name}}`.
///
/// Exact, case-sensitive substring match; the template is not parsed.
pub fn unused_variables(p: &PromptDefinition) -> ValidationResult {
    let mut result = ValidationResult::default();

    for variable in &p.variables {
        let token = placeholder(variable);
        if !p.template.contains(&token) {
            result.add_warning(format!(
                "Variable '{}' declared but not used in template (expected token: {}).",
                variable, token
            ));
        }
    }

    result
}

/// With `require_json`, the template should at least mention JSON.
pub fn json_hint(p: &PromptDefinition) -> ValidationResult {
    let mut result = ValidationResult::default();

    if p.policy.require_json && !p.template.to_lowercase().contains("json") {
        result.add_warning("Policy require_json=true but template doesn't mention JSON output.");
    }

    result
}

/// `policy.max_output_tokens` must be positive when set.
pub fn output_token_bound(p: &PromptDefinition) -> ValidationResult {
    let mut result = ValidationResult::default();

    if matches!(p.policy.max_output_tokens, Some(n) if n <= 0) {
        result.add_error("policy.max_output_tokens must be > 0 if provided.");
    }

    result
}

/// No forbidden phrase may occur in the template, ignoring case.
/// Blank phrases are skipped.
pub fn forbidden_phrases(p: &PromptDefinition) -> ValidationResult {
    let mut result = ValidationResult::default();
    let template = p.template.to_lowercase();

    for phrase in &p.policy.forbidden_phrases {
        if is_blank(phrase) {
            continue;
        }
        if template.contains(&phrase.to_lowercase()) {
            result.add_error(format!("Template contains forbidden phrase: '{}'", phrase));
        }
    }

    result
}
