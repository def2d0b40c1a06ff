//! Form binder: checks attached to the controls of a form.
//!
//! The binder discovers every named control of a form once, when it is
//! created, together with its label and the region its error message goes
//! to. Checks are registered per field through typed builders and evaluated
//! against the live document. Evaluation stops at the first failing check
//! and the resulting message is written into the field's error region.
//!
//! # Example
//!
//! ```
//! use formcheck::FormBinder;
//! use formdom::Element;
//!
//! let document = Element::form()
//!     .id("signup")
//!     .child(Element::input().id("name").name("name").required());
//!
//! let mut binder = FormBinder::new(document, "signup").unwrap();
//! binder.input("name").string().required().message("Name is required!");
//!
//! let result = binder.validate_field("name");
//! assert!(!result.is_valid);
//! assert_eq!(result.message.as_deref(), Some("Name is required!"));
//! ```

mod builder;
mod check;
mod feedback;

use std::collections::BTreeMap;

use formdom::Element;

pub use builder::{ArrayRules, InputBuilder, NumberRules, StringRules};
pub use check::{Check, FieldCheck, Requirement, Threshold};

use crate::config::BinderConfig;
use crate::constraints::DeclaredConstraints;
use crate::discovery::{self, FieldMetadata};
use crate::engine::RuleEngine;
use crate::error::BindError;
use crate::messages::resolve_message;
use crate::result::{FieldResult, FormResult};
use crate::rule::{FieldRule, RuleOutcome};
use crate::value::{Value, ValueKind};

/// Checks registered for one field.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub field_name: String,
    pub value_kind: ValueKind,
    pub rules: Vec<FieldCheck>,
}

impl FieldConfig {
    fn new(field_name: String, value_kind: ValueKind) -> Self {
        Self {
            field_name,
            value_kind,
            rules: Vec::new(),
        }
    }
}

/// Validator bound to one form of a document.
#[derive(Debug)]
pub struct FormBinder {
    document: Element,
    form_id: String,
    config: BinderConfig,
    fields: Vec<FieldConfig>,
    metadata: Vec<FieldMetadata>,
}

impl FormBinder {
    /// Bind to the form `form_id` inside `document` with the default config.
    pub fn new(document: Element, form_id: &str) -> Result<Self, BindError> {
        Self::with_config(document, form_id, BinderConfig::default())
    }

    /// Bind to the form `form_id` inside `document`.
    ///
    /// Discovery runs here, once. Fields without an error region get one
    /// synthesized after discovery has finished for the whole form.
    pub fn with_config(
        mut document: Element,
        form_id: &str,
        config: BinderConfig,
    ) -> Result<Self, BindError> {
        let mut metadata = discovery::discover_form(&document, form_id)
            .ok_or_else(|| BindError::form_not_found(form_id))?;

        for meta in metadata.iter_mut().filter(|meta| meta.error_region.is_none()) {
            discovery::synthesize_error_region(&mut document, meta, &config);
        }
        log::debug!("[binder] bound form {form_id} with {} fields", metadata.len());

        Ok(Self {
            document,
            form_id: form_id.to_string(),
            config,
            fields: Vec::new(),
            metadata,
        })
    }

    /// Start registering checks for `name`.
    pub fn input(&mut self, name: impl Into<String>) -> InputBuilder<'_> {
        InputBuilder::new(self, name.into())
    }

    /// Register `name` as `kind` with an empty chain, replacing any earlier
    /// registration in place.
    fn register(&mut self, name: String, kind: ValueKind) -> &mut FieldConfig {
        let idx = match self.fields.iter().position(|field| field.field_name == name) {
            Some(idx) => {
                log::debug!("[binder] replacing checks for {name}");
                self.fields[idx] = FieldConfig::new(name, kind);
                idx
            }
            None => {
                if self.metadata(&name).is_none() {
                    log::warn!("[binder] {name} has no control in form {}", self.form_id);
                }
                self.fields.push(FieldConfig::new(name, kind));
                self.fields.len() - 1
            }
        };
        &mut self.fields[idx]
    }

    // Accessors

    pub fn document(&self) -> &Element {
        &self.document
    }

    /// Live document, for hosts that edit controls directly.
    pub fn document_mut(&mut self) -> &mut Element {
        &mut self.document
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    pub fn metadata(&self, name: &str) -> Option<&FieldMetadata> {
        self.metadata.iter().find(|meta| meta.field_name == name)
    }

    pub fn field_config(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|field| field.field_name == name)
    }

    /// Registered field names, in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.field_name.as_str())
    }

    /// Check names per registered field, in registration order.
    pub fn export_rule_names(&self) -> BTreeMap<String, Vec<String>> {
        self.fields
            .iter()
            .map(|field| {
                let names = field.rules.iter().map(|rule| rule.name().to_string()).collect();
                (field.field_name.clone(), names)
            })
            .collect()
    }

    // Values

    /// Write `value` into the field's control. A selection sets the checked
    /// state of every checkbox in the group.
    ///
    /// Checkbox groups (and fields registered as arrays) only take
    /// selections; every other field only takes text or numbers.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<(), BindError> {
        let meta = self
            .metadata(name)
            .ok_or_else(|| BindError::unknown_field(name))?;
        let element_id = meta.element.clone();
        let is_group = self.is_group(meta, self.field_config(name).map(|f| f.value_kind));

        match (value.into(), is_group) {
            (Value::Selection(selected), true) => {
                let group: Vec<String> = self
                    .group_members(name)
                    .into_iter()
                    .map(|el| el.id.clone())
                    .collect();
                for id in group {
                    if let Some(checkbox) = formdom::find_element_mut(&mut self.document, &id) {
                        let on = selected.iter().any(|v| v == checkbox_value(checkbox));
                        checkbox.set_flag("checked", on);
                    }
                }
            }
            (Value::Text(text), false) => self.set_raw(&element_id, text),
            (Value::Number(n), false) => self.set_raw(&element_id, n.to_string()),
            (value, true) => {
                return Err(BindError::kind_mismatch(name, "selection", value.type_name()));
            }
            (value, false) => {
                return Err(BindError::kind_mismatch(name, "text or number", value.type_name()));
            }
        }
        Ok(())
    }

    fn set_raw(&mut self, element_id: &str, raw: String) {
        if let Some(element) = formdom::find_element_mut(&mut self.document, element_id) {
            element.set_attr("value", raw);
        }
    }

    /// Live value of the field: checked values for checkbox groups and
    /// fields registered as arrays, the raw `value` otherwise.
    pub fn value_of(&self, name: &str) -> Option<Value> {
        let meta = self.metadata(name)?;
        let kind = self.field_config(name).map(|field| field.value_kind);
        Some(self.resolve_value(meta, kind))
    }

    fn resolve_value(&self, meta: &FieldMetadata, kind: Option<ValueKind>) -> Value {
        if self.is_group(meta, kind) {
            return Value::Selection(self.selected_values(&meta.field_name));
        }
        Value::Text(
            formdom::find_element(&self.document, &meta.element)
                .map(|el| el.current_value().to_string())
                .unwrap_or_default(),
        )
    }

    /// Whether the field reads as a selection: registered as an array, or
    /// an unregistered checkbox.
    fn is_group(&self, meta: &FieldMetadata, kind: Option<ValueKind>) -> bool {
        match kind {
            Some(kind) => kind == ValueKind::MultiSelect,
            None => formdom::find_element(&self.document, &meta.element)
                .is_some_and(Element::is_checkbox),
        }
    }

    fn form(&self) -> Option<&Element> {
        formdom::find_element(&self.document, &self.form_id)
    }

    fn group_members(&self, name: &str) -> Vec<&Element> {
        let Some(form) = self.form() else {
            return Vec::new();
        };
        formdom::collect_descendants(form, |el| {
            el.is_checkbox() && el.get_attr("name") == Some(name)
        })
    }

    fn selected_values(&self, name: &str) -> Vec<String> {
        self.group_members(name)
            .into_iter()
            .filter(|el| el.is_checked())
            .map(|el| checkbox_value(el).to_string())
            .collect()
    }

    // Evaluation

    /// Evaluate `name` up to its first failing check without touching the document.
    ///
    /// `None` for names that aren't registered or have no control.
    fn evaluate_first_failure(&self, name: &str) -> Option<(FieldResult, &FieldMetadata)> {
        let field = self.field_config(name)?;
        let meta = self.metadata(name)?;
        let element = formdom::find_element(&self.document, &meta.element)?;
        let declared = DeclaredConstraints::from_element(element);
        let value = self.resolve_value(meta, Some(field.value_kind));

        let failed = field
            .rules
            .iter()
            .find(|rule| !rule.check.passes(&value, &declared));

        let result = match failed {
            Some(rule) => {
                log::trace!("[binder] {name} failed {} on {value:?}", rule.name());
                FieldResult::invalid(resolve_message(
                    rule.name(),
                    rule.message.as_deref(),
                    &declared,
                ))
            }
            None => FieldResult::valid(),
        };
        Some((result, meta))
    }

    /// Validate one field and render the outcome into its error region.
    ///
    /// Unregistered fields are valid.
    pub fn validate_field(&mut self, name: &str) -> FieldResult {
        let Some((result, meta)) = self.evaluate_first_failure(name) else {
            return FieldResult::valid();
        };
        let meta = meta.clone();
        feedback::render(
            &mut self.document,
            &meta,
            result.message.as_deref(),
            &self.config,
        );
        result
    }

    /// Validate `names` (every registered field when `None`), rendering each
    /// outcome. Names that aren't registered are skipped.
    pub fn validate_form(&mut self, names: Option<&[&str]>) -> FormResult {
        let targets: Vec<String> = match names {
            Some(names) => names
                .iter()
                .filter(|name| self.field_config(name).is_some())
                .map(|name| name.to_string())
                .collect(),
            None => self.field_names().map(str::to_string).collect(),
        };

        let mut form_result = FormResult::default();
        for name in targets {
            let Some((result, meta)) = self.evaluate_first_failure(&name) else {
                continue;
            };
            let meta = meta.clone();
            feedback::render(
                &mut self.document,
                &meta,
                result.message.as_deref(),
                &self.config,
            );
            form_result.record(name, result);
        }
        form_result
    }

    pub fn is_form_valid(&mut self) -> bool {
        self.validate_form(None).is_valid
    }

    /// Snapshot of the registered fields as a [`RuleEngine`].
    ///
    /// Each check becomes a [`FieldRule`] bound to the field's current
    /// declared constraints and resolved message; each field's live value is
    /// stored. Use it for exhaustive, all-rules evaluation.
    pub fn engine(&self) -> RuleEngine {
        let mut engine = RuleEngine::new();
        for field in &self.fields {
            let Some(meta) = self.metadata(&field.field_name) else {
                continue;
            };
            let Some(element) = formdom::find_element(&self.document, &meta.element) else {
                continue;
            };
            let declared = DeclaredConstraints::from_element(element);
            let rules: Vec<FieldRule> = field
                .rules
                .iter()
                .map(|rule| {
                    let message = resolve_message(rule.name(), rule.message.as_deref(), &declared);
                    let check = rule.check.clone();
                    let declared = declared.clone();
                    FieldRule::new(rule.name(), move |value| {
                        RuleOutcome::check(check.passes(value, &declared), &message)
                    })
                })
                .collect();
            engine
                .register_field(field.field_name.clone(), rules)
                .set_value(
                    field.field_name.clone(),
                    self.resolve_value(meta, Some(field.value_kind)),
                );
        }
        engine
    }
}

/// Submitted value of a checkbox; `"on"` when it declares none.
fn checkbox_value(checkbox: &Element) -> &str {
    checkbox.get_attr("value").unwrap_or("on")
}
