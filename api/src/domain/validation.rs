//! Declarative request validation
//!
//! Records are checked against a table of [`FieldRule`]s. Every violated
//! field is reported, not just the first one.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Kind of JSON value a field must hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::String => write!(f, "string"),
            ValueKind::Integer => write!(f, "integer"),
        }
    }
}

impl ValueKind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            ValueKind::Integer => value.is_i64() || value.is_u64(),
        }
    }
}

/// A single constraint on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present, non-null, and not blank if it is a string
    Required,
    /// At most this many characters. Only applies to strings.
    MaxLength(usize),
    /// Must be of the given kind when present
    Kind(ValueKind),
}

/// The rules that apply to one named field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// Field name to the reasons it failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl ValidationErrors {
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn reasons(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, reasons) in &self.0 {
            for reason in reasons {
                if !first {
                    write!(f, "; ")?;
                }
                first = false;
                if field.is_empty() {
                    write!(f, "{}", reason)?;
                } else {
                    write!(f, "{}: {}", field, reason)?;
                }
            }
        }
        Ok(())
    }
}

/// Validate a JSON record against a rule table.
///
/// Non-object records fail every `Required` rule. Missing and null fields
/// are only rejected by `Required`; the other rules skip them.
pub fn validate(record: &Value, rules: &[FieldRule]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for field_rule in rules {
        let value = record.get(field_rule.field).unwrap_or(&Value::Null);
        for rule in field_rule.rules {
            if let Some(reason) = check(field_rule.field, value, rule) {
                errors.add(field_rule.field, reason);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check(field: &str, value: &Value, rule: &Rule) -> Option<String> {
    match rule {
        Rule::Required => {
            let missing = match value {
                Value::Null => true,
                Value::String(s) => s.trim().is_empty(),
                _ => false,
            };
            missing.then(|| format!("The {} field is required.", field))
        }
        Rule::MaxLength(max) => match value {
            Value::String(s) if s.chars().count() > *max => Some(format!(
                "The field {} must be a string with a maximum length of {}.",
                field, max
            )),
            _ => None,
        },
        Rule::Kind(kind) => {
            if value.is_null() || kind.matches(value) {
                None
            } else {
                Some(format!("The field {} must be of type {}.", field, kind))
            }
        }
    }
}

fn unreadable(e: serde_json::Error) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add("", format!("The record could not be read: {}", e));
    errors
}

/// Types that carry their own rule table
pub trait Validate: Serialize {
    const RULES: &'static [FieldRule];

    fn validate(&self) -> Result<(), ValidationErrors> {
        let record = serde_json::to_value(self).map_err(unreadable)?;
        validate(&record, Self::RULES)
    }

    /// Check a raw record against the rule table, then convert it.
    ///
    /// Wrongly typed fields come back as field errors alongside every other
    /// violation instead of failing the conversion.
    fn from_record(record: Value) -> Result<Self, ValidationErrors>
    where
        Self: Sized + DeserializeOwned,
    {
        validate(&record, Self::RULES)?;
        serde_json::from_value(record).map_err(unreadable)
    }
}
