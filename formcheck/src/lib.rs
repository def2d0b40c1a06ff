//! Declarative field validation for forms.
//!
//! Two layers:
//!
//! - [`RuleEngine`] maps field names to ordered rule chains and values. It
//!   evaluates every rule of a chain and knows nothing about documents.
//! - [`FormBinder`] binds typed checks to the controls of a [`formdom`] form,
//!   reads declared attributes as defaults, stops at the first failing check
//!   and writes the resolved message into the field's error region.
//!
//! # Example
//!
//! ```
//! use formcheck::FormBinder;
//! use formdom::Element;
//!
//! let document = Element::form()
//!     .id("profile")
//!     .child(Element::input().id("age").name("age").attr("min", "18"))
//!     .child(Element::p().id("age-error").role("alert"));
//!
//! let mut binder = FormBinder::new(document, "profile").unwrap();
//! binder.input("age").number().min();
//!
//! binder.set_value("age", "16").unwrap();
//! assert!(!binder.validate_field("age").is_valid);
//!
//! binder.set_value("age", 18.0).unwrap();
//! assert!(binder.validate_field("age").is_valid);
//! ```

pub mod binder;
pub mod config;
pub mod constraints;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod messages;
pub mod result;
pub mod rule;
pub mod rules;
pub mod value;

pub use binder::{ArrayRules, FieldConfig, FormBinder, InputBuilder, NumberRules, StringRules};
pub use config::BinderConfig;
pub use constraints::DeclaredConstraints;
pub use discovery::{FieldMetadata, discover};
pub use engine::RuleEngine;
pub use error::BindError;
pub use result::{FieldResult, FormResult};
pub use rule::{FieldRule, RuleOutcome};
pub use value::{Value, ValueKind};

pub mod prelude {
    pub use crate::binder::FormBinder;
    pub use crate::engine::RuleEngine;
    pub use crate::result::{FieldResult, FormResult};
    pub use crate::rule::{FieldRule, RuleOutcome};
    pub use crate::rules;
    pub use crate::value::Value;
}
