//! Typed checks registered through the binder's builders.

use regex::Regex;

use crate::constraints::DeclaredConstraints;
use crate::value::Value;

/// Where a check gets its bound from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold<T> {
    /// Read from the field's declared attributes.
    Declared,
    /// Given at registration.
    Fixed(T),
}

impl<T: Copy> Threshold<T> {
    fn resolve(self, declared: Option<T>) -> Option<T> {
        match self {
            Threshold::Declared => declared,
            Threshold::Fixed(value) => Some(value),
        }
    }
}

/// Whether a `required` check follows the `required` attribute or always applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Declared,
    Always,
}

impl Requirement {
    fn applies(self, declared: &DeclaredConstraints) -> bool {
        match self {
            Requirement::Declared => declared.required,
            Requirement::Always => true,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Check {
    TextRequired(Requirement),
    TextMin(Threshold<usize>),
    TextMax(Threshold<usize>),
    TextEmail,
    TextPattern(Regex),

    NumberRequired(Requirement),
    NumberMin(Threshold<f64>),
    NumberMax(Threshold<f64>),
    NumberPositive,
    NumberNegative,
    NumberInteger,

    SelectionRequired(Requirement),
    SelectionMin(Threshold<usize>),
    SelectionMax(Threshold<usize>),
}

impl Check {
    /// Rule identifier, used for message lookup and `export_rule_names`.
    pub fn name(&self) -> &'static str {
        match self {
            Check::TextRequired(_) | Check::NumberRequired(_) | Check::SelectionRequired(_) => {
                "required"
            }
            Check::TextMin(_) | Check::NumberMin(_) | Check::SelectionMin(_) => "min",
            Check::TextMax(_) | Check::NumberMax(_) | Check::SelectionMax(_) => "max",
            Check::TextEmail => "email",
            Check::TextPattern(_) => "pattern",
            Check::NumberPositive => "positive",
            Check::NumberNegative => "negative",
            Check::NumberInteger => "integer",
        }
    }

    /// Apply the check. A value of the wrong kind fails.
    pub fn passes(&self, value: &Value, declared: &DeclaredConstraints) -> bool {
        match self {
            Check::TextRequired(requirement) => value.as_text().is_some_and(|text| {
                !requirement.applies(declared) || !text.trim().is_empty()
            }),
            Check::TextMin(threshold) => value.as_text().is_some_and(|text| {
                match threshold.resolve(declared.min_length) {
                    // Blank input is `required`'s business.
                    Some(_) if text.trim().is_empty() => true,
                    Some(min) => text.chars().count() >= min,
                    None => true,
                }
            }),
            Check::TextMax(threshold) => value.as_text().is_some_and(|text| {
                threshold
                    .resolve(declared.max_length)
                    .is_none_or(|max| text.chars().count() <= max)
            }),
            Check::TextEmail => value
                .as_text()
                .is_some_and(|text| !declared.is_email() || crate::rules::is_email(text)),
            Check::TextPattern(regex) => value.as_text().is_some_and(|text| regex.is_match(text)),

            Check::NumberRequired(requirement) => {
                if !requirement.applies(declared) || value.to_number().is_some() {
                    return true;
                }
                // Only an empty raw value counts as missing.
                !matches!(value, Value::Text(raw) if raw.is_empty())
            }
            Check::NumberMin(threshold) => value.to_number().is_some_and(|n| {
                threshold.resolve(declared.min).is_none_or(|min| n >= min)
            }),
            Check::NumberMax(threshold) => value.to_number().is_some_and(|n| {
                threshold.resolve(declared.max).is_none_or(|max| n <= max)
            }),
            Check::NumberPositive => value.to_number().is_some_and(|n| n > 0.0),
            Check::NumberNegative => value.to_number().is_some_and(|n| n < 0.0),
            Check::NumberInteger => value.to_number().is_some_and(|n| n.fract() == 0.0),

            Check::SelectionRequired(requirement) => value
                .as_selection()
                .is_some_and(|items| !requirement.applies(declared) || !items.is_empty()),
            Check::SelectionMin(threshold) => value.as_selection().is_some_and(|items| {
                let min = threshold.resolve(declared.min_selected).unwrap_or(1);
                items.len() >= min
            }),
            Check::SelectionMax(threshold) => value.as_selection().is_some_and(|items| {
                threshold
                    .resolve(declared.max_selected)
                    .is_none_or(|max| items.len() <= max)
            }),
        }
    }
}

/// A check plus the message it was registered with.
#[derive(Debug, Clone)]
pub struct FieldCheck {
    pub check: Check,
    pub message: Option<String>,
}

impl FieldCheck {
    pub fn new(check: Check) -> Self {
        Self {
            check,
            message: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.check.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(f: impl FnOnce(&mut DeclaredConstraints)) -> DeclaredConstraints {
        let mut decl = DeclaredConstraints::default();
        f(&mut decl);
        decl
    }

    #[test]
    fn test_text_required_follows_attribute() {
        let check = Check::TextRequired(Requirement::Declared);
        let plain = DeclaredConstraints::default();
        let required = declared(|d| d.required = true);

        assert!(check.passes(&"".into(), &plain));
        assert!(!check.passes(&" ".into(), &required));
        assert!(check.passes(&"Ada".into(), &required));
        assert!(Check::TextRequired(Requirement::Always).passes(&"x".into(), &plain));
        assert!(!Check::TextRequired(Requirement::Always).passes(&"".into(), &plain));
    }

    #[test]
    fn test_text_min_ignores_blank() {
        let decl = declared(|d| d.min_length = Some(3));
        let check = Check::TextMin(Threshold::Declared);
        assert!(check.passes(&"".into(), &decl));
        assert!(check.passes(&"   ".into(), &decl));
        assert!(!check.passes(&"ab".into(), &decl));
        assert!(check.passes(&"abc".into(), &decl));
        assert!(!Check::TextMin(Threshold::Fixed(5)).passes(&"abc".into(), &decl));
    }

    #[test]
    fn test_text_min_without_bound_passes() {
        let check = Check::TextMin(Threshold::Declared);
        assert!(check.passes(&"a".into(), &DeclaredConstraints::default()));
    }

    #[test]
    fn test_text_checks_reject_other_kinds() {
        let decl = DeclaredConstraints::default();
        assert!(!Check::TextMax(Threshold::Declared).passes(&Value::Number(1.0), &decl));
        assert!(!Check::TextEmail.passes(&Value::from(vec!["a"]), &decl));
    }

    #[test]
    fn test_email_only_for_email_inputs() {
        let email = declared(|d| d.input_type = Some("email".into()));
        let text = DeclaredConstraints::default();
        assert!(Check::TextEmail.passes(&"nope".into(), &text));
        assert!(!Check::TextEmail.passes(&"nope".into(), &email));
        assert!(Check::TextEmail.passes(&"a@b.co".into(), &email));
    }

    #[test]
    fn test_number_required_only_fails_on_empty() {
        let required = declared(|d| d.required = true);
        let check = Check::NumberRequired(Requirement::Declared);
        assert!(!check.passes(&"".into(), &required));
        assert!(check.passes(&"12".into(), &required));
        assert!(check.passes(&"abc".into(), &required));
        assert!(check.passes(&"".into(), &DeclaredConstraints::default()));
    }

    #[test]
    fn test_number_bounds() {
        let decl = declared(|d| {
            d.min = Some(18.0);
            d.max = Some(99.0);
        });
        assert!(!Check::NumberMin(Threshold::Declared).passes(&"16".into(), &decl));
        assert!(Check::NumberMin(Threshold::Declared).passes(&"18".into(), &decl));
        assert!(!Check::NumberMax(Threshold::Declared).passes(&"100".into(), &decl));
        assert!(!Check::NumberMin(Threshold::Declared).passes(&"old".into(), &decl));
        assert!(Check::NumberMin(Threshold::Fixed(0.0)).passes(&Value::Number(0.0), &decl));
    }

    #[test]
    fn test_number_sign_and_integer() {
        let decl = DeclaredConstraints::default();
        assert!(Check::NumberPositive.passes(&"0.5".into(), &decl));
        assert!(!Check::NumberPositive.passes(&"0".into(), &decl));
        assert!(Check::NumberNegative.passes(&"-1".into(), &decl));
        assert!(!Check::NumberNegative.passes(&"".into(), &decl));
        assert!(Check::NumberInteger.passes(&"4".into(), &decl));
        assert!(!Check::NumberInteger.passes(&"4.2".into(), &decl));
    }

    #[test]
    fn test_selection_min_defaults_to_one() {
        let decl = DeclaredConstraints::default();
        let check = Check::SelectionMin(Threshold::Declared);
        assert!(!check.passes(&Value::Selection(vec![]), &decl));
        assert!(check.passes(&Value::from(vec!["rust"]), &decl));
        assert!(!check.passes(&"rust".into(), &decl));

        let two = declared(|d| d.min_selected = Some(2));
        assert!(!check.passes(&Value::from(vec!["rust"]), &two));
    }

    #[test]
    fn test_selection_max() {
        let decl = declared(|d| d.max_selected = Some(1));
        let check = Check::SelectionMax(Threshold::Declared);
        assert!(check.passes(&Value::from(vec!["a"]), &decl));
        assert!(!check.passes(&Value::from(vec!["a", "b"]), &decl));
        assert!(check.passes(&Value::from(vec!["a", "b"]), &DeclaredConstraints::default()));
    }
}
