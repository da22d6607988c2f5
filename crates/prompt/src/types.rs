//! Prompt types for PromptGuard.
//!
//! This module defines the in-memory prompt definition and its YAML mapping.
//! Keys are lower_snake_case, unknown keys are ignored, and unset optional
//! values are omitted on write.

use serde::{Deserialize, Deserializer, Serialize};

/// Version given to freshly scaffolded prompts.
pub const INITIAL_VERSION: &str = "1.0.0";

/// A versioned prompt definition loaded from `<root>/<name>/<version>.yaml`.
///
/// Required fields default to empty strings when absent so that the validator,
/// not the parser, reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptDefinition {
    /// Prompt name; also the directory name under the prompts root
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,

    /// Version label, conventionally `X.Y.Z`, compared as an opaque string
    #[serde(default, deserialize_with = "nullable_string")]
    pub version: String,

    /// Model label; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Generation parameters
    #[serde(default)]
    pub parameters: GenerationParameters,

    /// Prompt body with `{{variable}}` placeholders
    #[serde(default, deserialize_with = "nullable_string")]
    pub template: String,

    /// Declared placeholder names
    #[serde(default)]
    pub variables: Vec<String>,

    /// Safety and output policy
    #[serde(default)]
    pub policy: Policy,
}

/// Generation knobs. `None` means "use the provider default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i64>,
}

/// Safety and output constraints attached to a prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// The model must answer with JSON only
    #[serde(default)]
    pub require_json: bool,

    /// Output cap; must be > 0 when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i64>,

    /// Phrases that must not appear in the template (case-insensitive)
    #[serde(default)]
    pub forbidden_phrases: Vec<String>,
}

impl PromptDefinition {
    /// Default definition for a brand-new prompt at version 1.0.0.
    pub fn scaffold(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: INITIAL_VERSION.to_string(),
            model: Some("gpt-4.1-mini".to_string()),
            parameters: GenerationParameters {
                temperature: Some(0.1),
                max_tokens: Some(600),
            },
            template: "Write your prompt here.\n\nINPUT:\n{{input}}\n".to_string(),
            variables: vec!["input".to_string()],
            policy: Policy {
                require_json: false,
                max_output_tokens: Some(500),
                forbidden_phrases: Vec::new(),
            },
        }
    }

    /// `name@version` label for reports.
    pub fn label(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// Read a scalar as its source text. Null becomes the empty string.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
