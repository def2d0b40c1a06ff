//! Built-in rules for the [`RuleEngine`](crate::RuleEngine).
//!
//! Each constructor returns a [`FieldRule`] named after the check it performs,
//! with a fixed failure message that [`FieldRule::with_message`] can replace.

use std::sync::LazyLock;

use regex::Regex;

use crate::rule::{FieldRule, RuleOutcome};
use crate::value::Value;

/// Pattern an address has to match to count as an email.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

pub fn is_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

fn expected_text(value: &Value) -> RuleOutcome {
    RuleOutcome::fail(format!("expected text, got {}", value.type_name()))
}

/// Text that is not blank.
pub fn required() -> FieldRule {
    FieldRule::new("required", |value| match value {
        Value::Text(text) => RuleOutcome::check(!text.trim().is_empty(), "this field is required"),
        other => expected_text(other),
    })
}

/// Text of at least `min` characters.
pub fn min_length(min: usize) -> FieldRule {
    let message = format!("must be at least {min} characters");
    FieldRule::new("min_length", move |value| match value {
        Value::Text(text) => RuleOutcome::check(text.chars().count() >= min, &message),
        other => expected_text(other),
    })
}

/// Text of at most `max` characters.
pub fn max_length(max: usize) -> FieldRule {
    let message = format!("must be at most {max} characters");
    FieldRule::new("max_length", move |value| match value {
        Value::Text(text) => RuleOutcome::check(text.chars().count() <= max, &message),
        other => expected_text(other),
    })
}

pub fn email() -> FieldRule {
    FieldRule::new("email", |value| match value {
        Value::Text(text) => RuleOutcome::check(is_email(text), "invalid email address"),
        other => expected_text(other),
    })
}

pub fn pattern(regex: Regex) -> FieldRule {
    FieldRule::new("pattern", move |value| match value {
        Value::Text(text) => RuleOutcome::check(
            regex.is_match(text),
            "value does not match the required format",
        ),
        other => expected_text(other),
    })
}

pub fn is_string() -> FieldRule {
    FieldRule::new("is_string", |value| {
        RuleOutcome::check(matches!(value, Value::Text(_)), "must be a string")
    })
}

/// A number, or text that parses as one.
pub fn is_number() -> FieldRule {
    FieldRule::new("is_number", |value| {
        RuleOutcome::check(value.to_number().is_some(), "must be a number")
    })
}

/// Caller-defined rule: `predicate` decides, `message` is reported on failure.
pub fn custom<F>(name: impl Into<String>, predicate: F, message: impl Into<String>) -> FieldRule
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    FieldRule::new(name, move |value| RuleOutcome::check(predicate(value), &message))
}
