//! Fluent builders for registering a field's checks.
//!
//! ```ignore
//! binder.input("name").string().required().message("Name is required!").min();
//! binder.input("age").number().required().min().max();
//! binder.input("interests").array().min();
//! ```

use regex::Regex;

use super::check::{Check, FieldCheck, Requirement, Threshold};
use super::{FieldConfig, FormBinder};
use crate::value::ValueKind;

/// Entry point returned by [`FormBinder::input`]; pick the value kind next.
pub struct InputBuilder<'a> {
    binder: &'a mut FormBinder,
    name: String,
}

impl<'a> InputBuilder<'a> {
    pub(super) fn new(binder: &'a mut FormBinder, name: String) -> Self {
        Self { binder, name }
    }

    /// Register the field as text. Replaces any checks registered before.
    pub fn string(self) -> StringRules<'a> {
        StringRules {
            config: self.binder.register(self.name, ValueKind::Text),
        }
    }

    /// Register the field as a number. Replaces any checks registered before.
    pub fn number(self) -> NumberRules<'a> {
        NumberRules {
            config: self.binder.register(self.name, ValueKind::Number),
        }
    }

    /// Register the field as a checkbox group. Replaces any checks registered before.
    pub fn array(self) -> ArrayRules<'a> {
        ArrayRules {
            config: self.binder.register(self.name, ValueKind::MultiSelect),
        }
    }
}

fn push(config: &mut FieldConfig, check: Check) {
    config.rules.push(FieldCheck::new(check));
}

fn set_last_message(config: &mut FieldConfig, message: String) {
    match config.rules.last_mut() {
        Some(last) => last.message = Some(message),
        None => log::warn!(
            "[builder] message({message:?}) on {} before any rule, ignored",
            config.field_name
        ),
    }
}

/// Checks available to text fields.
pub struct StringRules<'a> {
    config: &'a mut FieldConfig,
}

impl StringRules<'_> {
    fn with(self, check: Check) -> Self {
        push(self.config, check);
        self
    }

    /// Message for the check added last.
    pub fn message(self, message: impl Into<String>) -> Self {
        set_last_message(self.config, message.into());
        self
    }

    /// Non-blank, if the field declares `required`.
    pub fn required(self) -> Self {
        self.with(Check::TextRequired(Requirement::Declared))
    }

    /// Non-blank, regardless of attributes.
    pub fn required_always(self) -> Self {
        self.with(Check::TextRequired(Requirement::Always))
    }

    /// At least `minlength` characters. Blank values pass.
    pub fn min(self) -> Self {
        self.with(Check::TextMin(Threshold::Declared))
    }

    pub fn min_len(self, min: usize) -> Self {
        self.with(Check::TextMin(Threshold::Fixed(min)))
    }

    /// At most `maxlength` characters.
    pub fn max(self) -> Self {
        self.with(Check::TextMax(Threshold::Declared))
    }

    pub fn max_len(self, max: usize) -> Self {
        self.with(Check::TextMax(Threshold::Fixed(max)))
    }

    /// A well-formed address, if the field is `type="email"`.
    pub fn email(self) -> Self {
        self.with(Check::TextEmail)
    }

    pub fn pattern(self, regex: Regex) -> Self {
        self.with(Check::TextPattern(regex))
    }
}

/// Checks available to numeric fields.
pub struct NumberRules<'a> {
    config: &'a mut FieldConfig,
}

impl NumberRules<'_> {
    fn with(self, check: Check) -> Self {
        push(self.config, check);
        self
    }

    /// Message for the check added last.
    pub fn message(self, message: impl Into<String>) -> Self {
        set_last_message(self.config, message.into());
        self
    }

    /// Not empty, if the field declares `required`.
    pub fn required(self) -> Self {
        self.with(Check::NumberRequired(Requirement::Declared))
    }

    pub fn required_always(self) -> Self {
        self.with(Check::NumberRequired(Requirement::Always))
    }

    /// At least the declared `min`.
    pub fn min(self) -> Self {
        self.with(Check::NumberMin(Threshold::Declared))
    }

    pub fn min_value(self, min: f64) -> Self {
        self.with(Check::NumberMin(Threshold::Fixed(min)))
    }

    /// At most the declared `max`.
    pub fn max(self) -> Self {
        self.with(Check::NumberMax(Threshold::Declared))
    }

    pub fn max_value(self, max: f64) -> Self {
        self.with(Check::NumberMax(Threshold::Fixed(max)))
    }

    pub fn positive(self) -> Self {
        self.with(Check::NumberPositive)
    }

    pub fn negative(self) -> Self {
        self.with(Check::NumberNegative)
    }

    pub fn integer(self) -> Self {
        self.with(Check::NumberInteger)
    }
}

/// Checks available to checkbox groups.
pub struct ArrayRules<'a> {
    config: &'a mut FieldConfig,
}

impl ArrayRules<'_> {
    fn with(self, check: Check) -> Self {
        push(self.config, check);
        self
    }

    /// Message for the check added last.
    pub fn message(self, message: impl Into<String>) -> Self {
        set_last_message(self.config, message.into());
        self
    }

    /// At least one selection, if the field declares `required`.
    pub fn required(self) -> Self {
        self.with(Check::SelectionRequired(Requirement::Declared))
    }

    pub fn required_always(self) -> Self {
        self.with(Check::SelectionRequired(Requirement::Always))
    }

    /// At least `data-min` selections, or one if undeclared.
    pub fn min(self) -> Self {
        self.with(Check::SelectionMin(Threshold::Declared))
    }

    pub fn min_count(self, min: usize) -> Self {
        self.with(Check::SelectionMin(Threshold::Fixed(min)))
    }

    /// At most `data-max` selections.
    pub fn max(self) -> Self {
        self.with(Check::SelectionMax(Threshold::Declared))
    }

    pub fn max_count(self, max: usize) -> Self {
        self.with(Check::SelectionMax(Threshold::Fixed(max)))
    }
}
