//! Failure message resolution for the binder.

use crate::constraints::DeclaredConstraints;

/// Reported when a rule has no message of its own and no default.
pub const GENERIC_MESSAGE: &str = "validation failed";

/// Built-in message for a rule name, if there is one.
pub fn default_message(rule: &str) -> Option<&'static str> {
    let message = match rule {
        "required" => "this field is required",
        "min" => "value too short",
        "max" => "value too long",
        "email" => "invalid email address",
        "pattern" => "value does not match the required format",
        "positive" => "value must be positive",
        "negative" => "value must be negative",
        "integer" => "value must be an integer",
        _ => return None,
    };
    Some(message)
}

/// Pick the message for a failed `rule`. First hit wins: the field's
/// `data-error-<rule>` override, the message given at registration, the
/// built-in default, the generic fallback.
pub fn resolve_message(
    rule: &str,
    registered: Option<&str>,
    declared: &DeclaredConstraints,
) -> String {
    declared
        .message_for(rule)
        .or(registered)
        .or_else(|| default_message(rule))
        .unwrap_or(GENERIC_MESSAGE)
        .to_string()
}
