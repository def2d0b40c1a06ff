use formcheck::{RuleEngine, RuleOutcome, Value, rules};

fn has_error(engine: &RuleEngine, field: &str, expected: &str) -> bool {
    engine.evaluate_form().get(field).is_some_and(|outcomes| {
        outcomes
            .iter()
            .any(|o| !o.valid && o.message.as_deref() == Some(expected))
    })
}

// ============================================================================
// Happy path
// ============================================================================

#[test]
fn test_all_fields_valid() {
    let mut engine = RuleEngine::new();
    engine
        .register_field("name", [rules::required(), rules::min_length(2)])
        .register_field("email", [rules::email()])
        .register_field("password", [rules::required(), rules::min_length(6)])
        .set_value("name", "Artem")
        .set_value("email", "a@b.c")
        .set_value("password", "123456");

    assert!(engine.is_form_valid());
    assert!(!has_error(&engine, "name", "must be at least 2 characters"));
    assert!(!has_error(&engine, "email", "invalid email address"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_empty_required() {
    let mut engine = RuleEngine::new();
    engine.register_field("name", [rules::required()]).set_value("name", "");
    assert!(has_error(&engine, "name", "this field is required"));
    assert!(!engine.is_form_valid());
}

#[test]
fn test_bad_email() {
    let mut engine = RuleEngine::new();
    engine.register_field("email", [rules::email()]).set_value("email", "bad");
    assert!(has_error(&engine, "email", "invalid email address"));
}

#[test]
fn test_short_password() {
    let mut engine = RuleEngine::new();
    engine
        .register_field("password", [rules::min_length(6)])
        .set_value("password", "12345");
    assert!(has_error(&engine, "password", "must be at least 6 characters"));
}

#[test]
fn test_number_into_text_rule() {
    let mut engine = RuleEngine::new();
    engine.register_field("x", [rules::is_string()]).set_value("x", 123.0);
    assert!(has_error(&engine, "x", "must be a string"));
}

// ============================================================================
// Evaluation modes
// ============================================================================

#[test]
fn test_evaluate_all_reports_every_rule() {
    let mut engine = RuleEngine::new();
    engine
        .register_field("code", [rules::min_length(4), rules::is_number(), rules::max_length(10)])
        .set_value("code", "ab");

    let outcomes = engine.evaluate_all("code");
    assert_eq!(outcomes.len(), 3);
    assert!(!outcomes[0].valid);
    assert!(!outcomes[1].valid);
    assert!(outcomes[2].valid);
}

#[test]
fn test_evaluate_first_failure_stops() {
    let mut engine = RuleEngine::new();
    engine
        .register_field("code", [rules::min_length(4), rules::is_number()])
        .set_value("code", "ab");

    assert_eq!(
        engine.evaluate_first_failure("code"),
        Some(RuleOutcome::fail("must be at least 4 characters"))
    );

    engine.set_value("code", "1234");
    assert_eq!(engine.evaluate_first_failure("code"), None);
}

#[test]
fn test_missing_value_is_empty_text() {
    let mut engine = RuleEngine::new();
    engine.register_field("name", [rules::required(), rules::is_string()]);
    let outcomes = engine.evaluate_all("name");
    assert!(!outcomes[0].valid);
    assert!(outcomes[1].valid);
}

#[test]
fn test_value_without_rules_is_ignored() {
    let mut engine = RuleEngine::new();
    engine.set_value("free", Value::Number(3.0));
    assert!(engine.is_form_valid());
    assert!(engine.evaluate_form().is_empty());
}

#[test]
fn test_unregistered_field_fails() {
    let engine = RuleEngine::new();
    let outcomes = engine.evaluate_all("ghost");
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].valid);
    assert!(outcomes[0].message.as_deref().unwrap().contains("not registered"));
    assert!(engine.evaluate_first_failure("ghost").is_some());
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_reregistering_replaces_chain() {
    let mut engine = RuleEngine::new();
    engine
        .register_field("name", [rules::required(), rules::min_length(5)])
        .register_field("email", [rules::email()])
        .register_field("name", [rules::max_length(3)]);

    let exported = engine.export_rule_names();
    assert_eq!(exported["name"], vec!["max_length"]);
    assert_eq!(engine.field_names().collect::<Vec<_>>(), vec!["name", "email"]);
}

#[test]
fn test_export_rule_names_in_order() {
    let mut engine = RuleEngine::new();
    engine.register_field(
        "bio",
        [
            rules::required(),
            rules::max_length(200),
            rules::custom("no_urls", |v| !v.as_text().unwrap_or("").contains("http"), "no links"),
        ],
    );
    assert_eq!(
        engine.export_rule_names()["bio"],
        vec!["required", "max_length", "no_urls"]
    );
}
