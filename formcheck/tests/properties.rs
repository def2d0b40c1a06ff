use formcheck::{FieldRule, FormBinder, RuleEngine, RuleOutcome, rules};
use formdom::Element;
use proptest::prelude::*;

fn named_rule(name: String, passes: bool) -> FieldRule {
    let message = format!("{name} failed");
    FieldRule::new(name, move |_| RuleOutcome::check(passes, &message))
}

proptest! {
    #[test]
    fn prop_export_matches_registration(names in prop::collection::vec("[a-z_]{1,12}", 0..8)) {
        let mut engine = RuleEngine::new();
        engine.register_field("field", names.iter().map(|name| named_rule(name.clone(), true)));

        let exported = engine.export_rule_names();
        prop_assert_eq!(&exported["field"], &names);
    }

    #[test]
    fn prop_engine_never_short_circuits(verdicts in prop::collection::vec(any::<bool>(), 0..10)) {
        let mut engine = RuleEngine::new();
        engine.register_field(
            "field",
            verdicts.iter().enumerate().map(|(i, ok)| named_rule(format!("r{i}"), *ok)),
        );

        let outcomes = engine.evaluate_all("field");
        prop_assert_eq!(outcomes.len(), verdicts.len());
        for (outcome, ok) in outcomes.iter().zip(&verdicts) {
            prop_assert_eq!(outcome.valid, *ok);
        }

        let first = engine.evaluate_first_failure("field");
        let expected = verdicts.iter().position(|ok| !ok).map(|i| RuleOutcome::fail(format!("r{i} failed")));
        prop_assert_eq!(first, expected);
    }

    #[test]
    fn prop_no_rules_is_valid(value in ".*") {
        let document = Element::form().id("f").child(Element::input().id("x").name("x"));
        let mut binder = FormBinder::new(document, "f").unwrap();
        binder.input("x").string();
        binder.set_value("x", value.as_str()).unwrap();
        prop_assert!(binder.validate_field("x").is_valid);
    }

    #[test]
    fn prop_min_length_ignores_blank(spaces in " {0,6}") {
        let document = Element::form()
            .id("f")
            .child(Element::input().id("x").name("x").attr("minlength", "3"));
        let mut binder = FormBinder::new(document, "f").unwrap();
        binder.input("x").string().min();
        binder.set_value("x", spaces.as_str()).unwrap();
        prop_assert!(binder.validate_field("x").is_valid);
    }

    #[test]
    fn prop_required_rejects_only_blank(text in "\\PC{0,12}") {
        let mut engine = RuleEngine::new();
        engine.register_field("x", [rules::required()]).set_value("x", text.as_str());
        prop_assert_eq!(engine.is_form_valid(), !text.trim().is_empty());
    }
}
