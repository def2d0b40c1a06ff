//! Rules and their outcomes.

use serde::Serialize;

use crate::value::Value;

/// Result of applying one rule to one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RuleOutcome {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Pass if `ok`, otherwise fail with `message`.
    pub fn check(ok: bool, message: &str) -> Self {
        if ok { Self::pass() } else { Self::fail(message) }
    }
}

/// Type alias for rule predicates.
pub type Predicate = Box<dyn Fn(&Value) -> RuleOutcome + Send + Sync>;

/// A named predicate in a field's rule chain.
pub struct FieldRule {
    name: String,
    predicate: Predicate,
    message: Option<String>,
}

impl FieldRule {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> RuleOutcome + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            message: None,
        }
    }

    /// Replace the message reported when this rule fails.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn evaluate(&self, value: &Value) -> RuleOutcome {
        let outcome = (self.predicate)(value);
        match (&self.message, outcome.valid) {
            (Some(message), false) => RuleOutcome::fail(message.clone()),
            _ => outcome,
        }
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
