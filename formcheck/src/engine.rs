//! Value-only rule engine.
//!
//! The engine knows nothing about elements: it maps field names to rule
//! chains and values, and evaluates one against the other.
//!
//! # Example
//!
//! ```
//! use formcheck::{rules, RuleEngine};
//!
//! let mut engine = RuleEngine::new();
//! engine
//!     .register_field("name", [rules::required(), rules::min_length(2)])
//!     .register_field("email", [rules::email()])
//!     .set_value("name", "A")
//!     .set_value("email", "a@b.c");
//!
//! let outcomes = engine.evaluate_all("name");
//! assert_eq!(outcomes.len(), 2);
//! assert!(!engine.is_form_valid());
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::rule::{FieldRule, RuleOutcome};
use crate::value::Value;

/// Rule chain registered for one field name.
#[derive(Debug)]
struct RuleChain {
    name: String,
    rules: Vec<FieldRule>,
}

/// Registry of rule chains plus the values they're evaluated against.
#[derive(Debug, Default)]
pub struct RuleEngine {
    chains: Vec<RuleChain>,
    values: HashMap<String, Value>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rules` for `name`, replacing any chain registered earlier.
    pub fn register_field(
        &mut self,
        name: impl Into<String>,
        rules: impl IntoIterator<Item = FieldRule>,
    ) -> &mut Self {
        let name = name.into();
        let rules: Vec<FieldRule> = rules.into_iter().collect();
        match self.chains.iter_mut().find(|chain| chain.name == name) {
            Some(existing) => {
                log::debug!("[register_field] replacing rule chain for {name}");
                existing.rules = rules;
            }
            None => self.chains.push(RuleChain { name, rules }),
        }
        self
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    fn chain(&self, name: &str) -> Option<&RuleChain> {
        self.chains.iter().find(|chain| chain.name == name)
    }

    fn value_or_empty(&self, name: &str) -> Value {
        self.values.get(name).cloned().unwrap_or_else(Value::empty)
    }

    /// Run every rule of `name`'s chain and return all outcomes, in order.
    ///
    /// An unregistered name yields a single failing outcome.
    pub fn evaluate_all(&self, name: &str) -> Vec<RuleOutcome> {
        let Some(chain) = self.chain(name) else {
            return vec![not_registered(name)];
        };
        let value = self.value_or_empty(name);
        chain.rules.iter().map(|rule| rule.evaluate(&value)).collect()
    }

    /// Run `name`'s chain up to the first failing rule and return its outcome.
    ///
    /// `None` means every rule passed. An unregistered name fails.
    pub fn evaluate_first_failure(&self, name: &str) -> Option<RuleOutcome> {
        let Some(chain) = self.chain(name) else {
            return Some(not_registered(name));
        };
        let value = self.value_or_empty(name);
        chain
            .rules
            .iter()
            .map(|rule| rule.evaluate(&value))
            .find(|outcome| !outcome.valid)
    }

    pub fn evaluate_form(&self) -> BTreeMap<String, Vec<RuleOutcome>> {
        self.chains
            .iter()
            .map(|chain| (chain.name.clone(), self.evaluate_all(&chain.name)))
            .collect()
    }

    pub fn is_form_valid(&self) -> bool {
        self.evaluate_form()
            .values()
            .all(|outcomes| outcomes.iter().all(|outcome| outcome.valid))
    }

    /// Rule names per field, in registration order. Diagnostics only.
    pub fn export_rule_names(&self) -> BTreeMap<String, Vec<String>> {
        self.chains
            .iter()
            .map(|chain| {
                let names = chain.rules.iter().map(|rule| rule.name().to_string()).collect();
                (chain.name.clone(), names)
            })
            .collect()
    }

    /// Registered field names, in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.chains.iter().map(|chain| chain.name.as_str())
    }
}

fn not_registered(name: &str) -> RuleOutcome {
    RuleOutcome::fail(format!("field \"{name}\" is not registered"))
}
