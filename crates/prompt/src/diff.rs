//! Structural diff between two versions of the same prompt.
//!
//! Three sections are compared, in order: template text, generation
//! parameters and policy. Callers are expected to pass two definitions with the
//! same `name`; the engine itself does not check.
//!
//! The template comparison is a naive positional diff: line `i` of the left
//! side is compared with line `i` of the right side, with no alignment. An
//! inserted line therefore shows up as a removed+added pair at every following
//! index rather than as a single insertion.

use crate::types::{GenerationParameters, Policy, PromptDefinition};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Which part of the definition a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffSection {
    Template,
    Parameter,
    Policy,
    /// Set-valued policy fields (forbidden phrases)
    List,
}

impl DiffSection {
    /// Report heading the section is printed under.
    pub fn heading(self) -> &'static str {
        match self {
            DiffSection::Template => "Template",
            DiffSection::Parameter => "Parameters",
            DiffSection::Policy | DiffSection::List => "Policy",
        }
    }
}

/// One reported change. Exactly one of `removed` / `added` is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DiffRecord {
    pub section: DiffSection,
    pub label: String,

    /// Zero-based line index, template records only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<String>,
}

impl DiffRecord {
    pub fn removed(section: DiffSection, label: &str, value: impl Into<String>) -> Self {
        Self {
            section,
            label: label.to_string(),
            line: None,
            removed: Some(value.into()),
            added: None,
        }
    }

    pub fn added(section: DiffSection, label: &str, value: impl Into<String>) -> Self {
        Self {
            section,
            label: label.to_string(),
            line: None,
            removed: None,
            added: Some(value.into()),
        }
    }

    fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Ordered change records between two definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PromptDiff {
    records: Vec<DiffRecord>,
}

impl PromptDiff {
    pub fn has_differences(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn records(&self) -> &[DiffRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DiffRecord> {
        self.records
    }
}

/// Compare `from` against `to`.
pub fn diff(from: &PromptDefinition, to: &PromptDefinition) -> PromptDiff {
    let mut records = Vec::new();

    diff_template(&from.template, &to.template, &mut records);
    diff_parameters(&from.parameters, &to.parameters, &mut records);
    diff_policy(&from.policy, &to.policy, &mut records);

    tracing::debug!(
        "Diff {} -> {}: {} record(s)",
        from.label(),
        to.label(),
        records.len()
    );

    PromptDiff { records }
}

/// Naive positional line diff of the template text.
fn diff_template(a: &str, b: &str, records: &mut Vec<DiffRecord>) {
    if a == b {
        return;
    }

    let left: Vec<&str> = a.split('\n').collect();
    let right: Vec<&str> = b.split('\n').collect();

    for i in 0..left.len().max(right.len()) {
        let l = left.get(i);
        let r = right.get(i);

        if l == r {
            continue;
        }

        if let Some(line) = l {
            records.push(DiffRecord::removed(DiffSection::Template, "template", *line).at_line(i));
        }
        if let Some(line) = r {
            records.push(DiffRecord::added(DiffSection::Template, "template", *line).at_line(i));
        }
    }
}

fn diff_parameters(
    a: &GenerationParameters,
    b: &GenerationParameters,
    records: &mut Vec<DiffRecord>,
) {
    if a == b {
        return;
    }

    diff_value(DiffSection::Parameter, "temperature", a.temperature, b.temperature, records);
    diff_value(DiffSection::Parameter, "max_tokens", a.max_tokens, b.max_tokens, records);
}

fn diff_policy(a: &Policy, b: &Policy, records: &mut Vec<DiffRecord>) {
    // Phrase order and duplicates are not a change.
    if a.require_json == b.require_json
        && a.max_output_tokens == b.max_output_tokens
        && phrase_set(&a.forbidden_phrases) == phrase_set(&b.forbidden_phrases)
    {
        return;
    }

    diff_value(
        DiffSection::Policy,
        "require_json",
        Some(a.require_json),
        Some(b.require_json),
        records,
    );
    diff_value(
        DiffSection::Policy,
        "max_output_tokens",
        a.max_output_tokens,
        b.max_output_tokens,
        records,
    );
    diff_set(
        "forbidden_phrases",
        &a.forbidden_phrases,
        &b.forbidden_phrases,
        records,
    );
}

/// Compare one optional scalar. `None` on either side is "unset".
fn diff_value<T>(
    section: DiffSection,
    label: &str,
    a: Option<T>,
    b: Option<T>,
    records: &mut Vec<DiffRecord>,
) where
    T: PartialEq + fmt::Display,
{
    if a == b {
        return;
    }

    if let Some(old) = a {
        records.push(DiffRecord::removed(section, label, old.to_string()));
    }
    if let Some(new) = b {
        records.push(DiffRecord::added(section, label, new.to_string()));
    }
}

/// Set difference both ways, reported in first-occurrence order.
fn diff_set(label: &str, a: &[String], b: &[String], records: &mut Vec<DiffRecord>) {
    let in_a = phrase_set(a);
    let in_b = phrase_set(b);

    for phrase in distinct(a).filter(|p| !in_b.contains(p)) {
        records.push(DiffRecord::removed(DiffSection::List, label, phrase));
    }
    for phrase in distinct(b).filter(|p| !in_a.contains(p)) {
        records.push(DiffRecord::added(DiffSection::List, label, phrase));
    }
}

fn phrase_set(phrases: &[String]) -> HashSet<&str> {
    phrases.iter().map(String::as_str).collect()
}

fn distinct(phrases: &[String]) -> impl Iterator<Item = &str> {
    let mut seen = HashSet::new();
    phrases
        .iter()
        .map(String::as_str)
        .filter(move |p| seen.insert(*p))
}

impl fmt::Display for PromptDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "No differences.");
        }

        let mut heading = None;
        for record in &self.records {
            let current = record.section.heading();
            if heading != Some(current) {
                if heading.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "{}", current)?;
                heading = Some(current);
            }

            let text = |value: &str| match record.section {
                DiffSection::Template => value.to_string(),
                _ => format!("{}: {}", record.label, value),
            };

            if let Some(ref old) = record.removed {
                writeln!(f, "- {}", text(old.as_str()))?;
            }
            if let Some(ref new) = record.added {
                writeln!(f, "+ {}", text(new.as_str()))?;
            }
        }

        Ok(())
    }
}
