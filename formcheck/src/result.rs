use std::collections::BTreeMap;

use serde::Serialize;

/// Result of validating a single field through the binder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldResult {
    pub is_valid: bool,
    /// Resolved message of the first failing rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Result of validating several fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormResult {
    pub is_valid: bool,
    /// Every checked field, with its message if it failed.
    pub errors: BTreeMap<String, Option<String>>,
}

impl Default for FormResult {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }
}

impl FormResult {
    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid
    }

    /// Message for `field`, if it was checked and failed.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).and_then(Option::as_deref)
    }

    /// Failed fields and their messages.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .filter_map(|(field, message)| Some((field.as_str(), message.as_deref()?)))
    }

    pub(crate) fn record(&mut self, field: impl Into<String>, result: FieldResult) {
        self.is_valid &= result.is_valid;
        self.errors.insert(field.into(), result.message);
    }
}
