//! Human and JSON renderings of validation results.

use std::collections::BTreeMap;
use std::fmt::Write;

use formcheck::{FormBinder, FormResult};
use serde_json::json;

pub fn text(binder: &FormBinder, result: &FormResult) -> String {
    let mut out = String::new();
    for (field, error) in &result.errors {
        let label = binder
            .metadata(field)
            .and_then(|meta| meta.label.as_deref())
            .and_then(|id| formdom::find_element(binder.document(), id))
            .and_then(|label| label.text())
            .unwrap_or(field);
        match error {
            None => {
                let _ = writeln!(out, "  ✓ {label}");
            }
            Some(message) => {
                let _ = writeln!(out, "  ✗ {label}: {message}");
            }
        }
    }

    let failed = result.failures().count();
    if failed == 0 {
        let _ = writeln!(out, "\n{} fields valid", result.errors.len());
    } else {
        let _ = writeln!(out, "\n{failed} of {} fields invalid", result.errors.len());
    }
    out
}

pub fn json(result: &FormResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "valid": result.is_valid,
        "errors": result.errors,
    }))
}

pub fn rules(exported: &BTreeMap<String, Vec<String>>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(exported)
}
