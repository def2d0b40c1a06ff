//! Dynamic field values.

use serde::{Deserialize, Serialize};

/// A field value as seen by a rule.
///
/// Every rule accepts exactly one variant and reports a failing outcome for
/// the others.
///
/// # Example
///
/// ```
/// use formcheck::Value;
///
/// let name = Value::from("Ada");
/// let age = Value::from(36.0);
/// let interests = Value::from(vec!["rust", "go"]);
/// assert_eq!(interests.type_name(), "selection");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric value.
    Number(f64),
    /// Raw text, as typed into a text-like control.
    Text(String),
    /// Ordered values of the currently selected options of a group.
    Selection(Vec<String>),
}

/// Kind a field is registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Text,
    Number,
    MultiSelect,
}

impl Value {
    pub fn empty() -> Self {
        Value::Text(String::new())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Selection(_) => "selection",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            Value::Selection(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric reading of this value: numbers as-is, text parsed.
    /// Selections and unparseable text yield `None`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::Number(_) => None,
            Value::Text(raw) => parse_number(raw),
            Value::Selection(_) => None,
        }
    }
}

/// Parse user-entered text as a number. Surrounding whitespace is ignored;
/// empty text, `NaN` and infinities don't count as numbers.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

// =============================================================================
// From implementations
// =============================================================================

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Selection(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::Selection(v.into_iter().map(str::to_string).collect())
    }
}
