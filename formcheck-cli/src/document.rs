//! Form documents: a tree, the checks to register on it, and the values to fill in.
//!
//! ```json
//! {
//!   "form": "signup",
//!   "document": { "tag": "form", "id": "signup", "children": [ ... ] },
//!   "fields": [
//!     { "name": "name", "kind": "string", "rules": [ { "rule": "required", "message": "Name is required!" } ] }
//!   ],
//!   "values": { "name": "Ada" }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use formcheck::{ArrayRules, BinderConfig, FormBinder, NumberRules, StringRules, Value};
use formdom::Element;
use regex::Regex;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
pub struct FormDocument {
    /// Id of the form element to bind.
    pub form: String,
    pub document: Element,
    #[serde(default)]
    pub config: BinderConfig,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub values: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Array,
}

impl FieldKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Array => "array",
        }
    }
}

/// One check. `value` is an explicit bound; without it the field's declared
/// attribute is used.
#[derive(Debug, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleSpec {
    Required {
        #[serde(default)]
        always: bool,
        message: Option<String>,
    },
    Min {
        value: Option<f64>,
        message: Option<String>,
    },
    Max {
        value: Option<f64>,
        message: Option<String>,
    },
    Email {
        message: Option<String>,
    },
    Pattern {
        regex: String,
        message: Option<String>,
    },
    Positive {
        message: Option<String>,
    },
    Negative {
        message: Option<String>,
    },
    Integer {
        message: Option<String>,
    },
}

impl RuleSpec {
    fn name(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
            Self::Min { .. } => "min",
            Self::Max { .. } => "max",
            Self::Email { .. } => "email",
            Self::Pattern { .. } => "pattern",
            Self::Positive { .. } => "positive",
            Self::Negative { .. } => "negative",
            Self::Integer { .. } => "integer",
        }
    }

    fn message(&self) -> Option<&str> {
        match self {
            Self::Required { message, .. }
            | Self::Min { message, .. }
            | Self::Max { message, .. }
            | Self::Email { message }
            | Self::Pattern { message, .. }
            | Self::Positive { message }
            | Self::Negative { message }
            | Self::Integer { message } => message.as_deref(),
        }
    }
}

impl FormDocument {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Bind the form, register every field's checks and fill in the values.
    pub fn into_binder(self) -> Result<FormBinder, CliError> {
        let mut binder = FormBinder::with_config(self.document, &self.form, self.config)?;
        for field in &self.fields {
            register(&mut binder, field)?;
        }
        for (name, value) in self.values {
            binder.set_value(&name, value)?;
        }
        log::info!(
            "[document] bound {} fields on form {}",
            self.fields.len(),
            self.form
        );
        Ok(binder)
    }
}

fn register(binder: &mut FormBinder, field: &FieldSpec) -> Result<(), CliError> {
    let input = binder.input(field.name.as_str());
    match field.kind {
        FieldKind::String => {
            let mut rules = input.string();
            for rule in &field.rules {
                rules = string_rule(rules, field, rule)?;
                if let Some(message) = rule.message() {
                    rules = rules.message(message);
                }
            }
        }
        FieldKind::Number => {
            let mut rules = input.number();
            for rule in &field.rules {
                rules = number_rule(rules, field, rule)?;
                if let Some(message) = rule.message() {
                    rules = rules.message(message);
                }
            }
        }
        FieldKind::Array => {
            let mut rules = input.array();
            for rule in &field.rules {
                rules = array_rule(rules, field, rule)?;
                if let Some(message) = rule.message() {
                    rules = rules.message(message);
                }
            }
        }
    }
    Ok(())
}

fn unsupported(field: &FieldSpec, rule: &RuleSpec) -> CliError {
    CliError::UnsupportedRule {
        field: field.name.clone(),
        kind: field.kind.as_str(),
        rule: rule.name(),
    }
}

fn count(field: &FieldSpec, rule: &RuleSpec, value: f64) -> Result<usize, CliError> {
    if value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64 {
        Ok(value as usize)
    } else {
        Err(CliError::InvalidValue {
            field: field.name.clone(),
            rule: rule.name(),
            value,
        })
    }
}

fn string_rule<'a>(
    rules: StringRules<'a>,
    field: &FieldSpec,
    rule: &RuleSpec,
) -> Result<StringRules<'a>, CliError> {
    Ok(match rule {
        RuleSpec::Required { always: true, .. } => rules.required_always(),
        RuleSpec::Required { .. } => rules.required(),
        RuleSpec::Min { value: Some(v), .. } => rules.min_len(count(field, rule, *v)?),
        RuleSpec::Min { .. } => rules.min(),
        RuleSpec::Max { value: Some(v), .. } => rules.max_len(count(field, rule, *v)?),
        RuleSpec::Max { .. } => rules.max(),
        RuleSpec::Email { .. } => rules.email(),
        RuleSpec::Pattern { regex, .. } => {
            let regex = Regex::new(regex).map_err(|source| CliError::InvalidPattern {
                field: field.name.clone(),
                source,
            })?;
            rules.pattern(regex)
        }
        RuleSpec::Positive { .. } | RuleSpec::Negative { .. } | RuleSpec::Integer { .. } => {
            return Err(unsupported(field, rule));
        }
    })
}

fn number_rule<'a>(
    rules: NumberRules<'a>,
    field: &FieldSpec,
    rule: &RuleSpec,
) -> Result<NumberRules<'a>, CliError> {
    Ok(match rule {
        RuleSpec::Required { always: true, .. } => rules.required_always(),
        RuleSpec::Required { .. } => rules.required(),
        RuleSpec::Min { value: Some(v), .. } => rules.min_value(*v),
        RuleSpec::Min { .. } => rules.min(),
        RuleSpec::Max { value: Some(v), .. } => rules.max_value(*v),
        RuleSpec::Max { .. } => rules.max(),
        RuleSpec::Positive { .. } => rules.positive(),
        RuleSpec::Negative { .. } => rules.negative(),
        RuleSpec::Integer { .. } => rules.integer(),
        RuleSpec::Email { .. } | RuleSpec::Pattern { .. } => {
            return Err(unsupported(field, rule));
        }
    })
}

fn array_rule<'a>(
    rules: ArrayRules<'a>,
    field: &FieldSpec,
    rule: &RuleSpec,
) -> Result<ArrayRules<'a>, CliError> {
    Ok(match rule {
        RuleSpec::Required { always: true, .. } => rules.required_always(),
        RuleSpec::Required { .. } => rules.required(),
        RuleSpec::Min { value: Some(v), .. } => rules.min_count(count(field, rule, *v)?),
        RuleSpec::Min { .. } => rules.min(),
        RuleSpec::Max { value: Some(v), .. } => rules.max_count(count(field, rule, *v)?),
        RuleSpec::Max { .. } => rules.max(),
        _ => return Err(unsupported(field, rule)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNUP: &str = include_str!("../demos/signup.json");

    #[test]
    fn test_demo_document_binds() {
        let document = FormDocument::parse(SIGNUP).unwrap();
        assert_eq!(document.form, "signup");
        assert_eq!(document.fields.len(), 4);

        let binder = document.into_binder().unwrap();
        let exported = binder.export_rule_names();
        assert_eq!(exported["name"], vec!["required", "min"]);
        assert_eq!(exported["interests"], vec!["min"]);
    }

    #[test]
    fn test_demo_document_validates() {
        let mut binder = FormDocument::parse(SIGNUP).unwrap().into_binder().unwrap();
        let result = binder.validate_form(None);

        assert!(result.is_invalid());
        assert_eq!(result.error("name"), Some("Name is too short!"));
        assert_eq!(result.error("email"), None);
        assert_eq!(result.error("age"), Some("You must be at least 18"));
        assert_eq!(result.error("interests"), None);
    }

    #[test]
    fn test_rule_not_available_for_kind() {
        let raw = r#"{
            "form": "f",
            "document": { "tag": "form", "id": "f", "children": [ { "tag": "input", "id": "n", "attrs": { "name": "n" } } ] },
            "fields": [ { "name": "n", "kind": "array", "rules": [ { "rule": "email" } ] } ]
        }"#;
        let err = FormDocument::parse(raw).unwrap().into_binder().unwrap_err();
        assert!(matches!(
            err,
            CliError::UnsupportedRule { kind: "array", rule: "email", .. }
        ));
    }

    #[test]
    fn test_bad_pattern_is_reported() {
        let raw = r#"{
            "form": "f",
            "document": { "tag": "form", "id": "f", "children": [ { "tag": "input", "id": "n" } ] },
            "fields": [ { "name": "n", "kind": "string", "rules": [ { "rule": "pattern", "regex": "(" } ] } ]
        }"#;
        let err = FormDocument::parse(raw).unwrap().into_binder().unwrap_err();
        assert!(matches!(err, CliError::InvalidPattern { .. }));
    }

    #[test]
    fn test_fractional_count_is_rejected() {
        let raw = r#"{
            "form": "f",
            "document": { "tag": "form", "id": "f", "children": [ { "tag": "input", "id": "n" } ] },
            "fields": [ { "name": "n", "kind": "string", "rules": [ { "rule": "min", "value": 2.5 } ] } ]
        }"#;
        let err = FormDocument::parse(raw).unwrap().into_binder().unwrap_err();
        assert!(matches!(err, CliError::InvalidValue { rule: "min", .. }));
    }

    #[test]
    fn test_text_value_for_checkbox_group() {
        let mut document = FormDocument::parse(SIGNUP).unwrap();
        document
            .values
            .insert("interests".to_string(), Value::from("rust"));
        let err = document.into_binder().unwrap_err();
        assert!(matches!(
            err,
            CliError::Bind(formcheck::BindError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_value_for_unknown_field() {
        let raw = r#"{
            "form": "f",
            "document": { "tag": "form", "id": "f" },
            "values": { "ghost": "boo" }
        }"#;
        let err = FormDocument::parse(raw).unwrap().into_binder().unwrap_err();
        assert!(matches!(err, CliError::Bind(_)));
    }
}
