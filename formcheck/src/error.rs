//! Binder error types

/// Errors raised while binding a form or writing values into it.
///
/// Validation failures are never errors; they're reported through
/// [`FieldResult`](crate::FieldResult) and [`FormResult`](crate::FormResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// No `form` element with this id exists in the document.
    #[error("Form '{id}' not found in document")]
    FormNotFound { id: String },

    /// The form has no control with this field name.
    #[error("Field '{name}' not found in form")]
    UnknownField { name: String },

    /// The value's kind doesn't fit the field: a selection for a text
    /// field, or text for a checkbox group.
    #[error("Field '{name}' expects {expected}, got {got}")]
    KindMismatch {
        name: String,
        expected: &'static str,
        got: &'static str,
    },
}

impl BindError {
    pub fn form_not_found(id: impl Into<String>) -> Self {
        Self::FormNotFound { id: id.into() }
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    pub fn kind_mismatch(
        name: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Self::KindMismatch {
            name: name.into(),
            expected,
            got,
        }
    }
}
