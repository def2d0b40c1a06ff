use formdom::{
    ancestors, closest, collect_controls, find_descendant, find_element, following_siblings,
    insert_after, parent_of, Element, Tag,
};

fn signup_form() -> Element {
    Element::div().id("page").child(
        Element::form()
            .id("signup")
            .child(Element::label("Name").attr("for", "name"))
            .child(Element::input().id("name").name("name").required())
            .child(Element::p().id("name-error").role("alert"))
            .child(
                Element::div()
                    .id("group")
                    .child(Element::checkbox("interests", "rust").id("i-rust"))
                    .child(Element::checkbox("interests", "go").id("i-go")),
            ),
    )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = signup_form();
    let found = find_element(&root, "name-error").unwrap();
    assert_eq!(found.tag, Tag::P);
    assert_eq!(found.get_attr("role"), Some("alert"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_ancestors_nearest_first() {
    let root = signup_form();
    let ids: Vec<&str> = ancestors(&root, "i-go").iter().map(|el| el.id.as_str()).collect();
    assert_eq!(ids, vec!["group", "signup", "page"]);
    assert!(ancestors(&root, "missing").is_empty());
}

#[test]
fn test_parent_of() {
    let root = signup_form();
    assert_eq!(parent_of(&root, "name").unwrap().id, "signup");
    assert!(parent_of(&root, "page").is_none());
}

#[test]
fn test_following_siblings() {
    let root = signup_form();
    let ids: Vec<&str> = following_siblings(&root, "name")
        .iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(ids, vec!["name-error", "group"]);
    assert!(following_siblings(&root, "i-go").is_empty());
}

#[test]
fn test_find_descendant_excludes_root() {
    let root = Element::div().id("outer").role("alert").child(Element::span().id("inner"));
    let found = find_descendant(&root, |el| el.get_attr("role") == Some("alert"));
    assert!(found.is_none());
}

#[test]
fn test_find_descendant_document_order() {
    let root = signup_form();
    let found = find_descendant(&root, |el| el.is_checkbox()).unwrap();
    assert_eq!(found.id, "i-rust");
}

#[test]
fn test_closest_includes_self() {
    let root = Element::label("Agree").id("wrap").child(Element::input().id("agree"));
    assert_eq!(closest(&root, "agree", |el| el.tag == Tag::Input).unwrap().id, "agree");
    assert_eq!(closest(&root, "agree", |el| el.tag == Tag::Label).unwrap().id, "wrap");
}

#[test]
fn test_collect_controls() {
    let root = signup_form();
    let ids: Vec<&str> = collect_controls(&root).iter().map(|el| el.id.as_str()).collect();
    assert_eq!(ids, vec!["name", "i-rust", "i-go"]);
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_insert_after() {
    let mut root = signup_form();
    assert!(insert_after(&mut root, "i-rust", Element::span().id("between")));

    let ids: Vec<&str> = find_element(&root, "group")
        .unwrap()
        .child_elements()
        .iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(ids, vec!["i-rust", "between", "i-go"]);
}

#[test]
fn test_insert_after_root_fails() {
    let mut root = signup_form();
    assert!(!insert_after(&mut root, "page", Element::span()));
}

#[test]
fn test_classes_are_deduplicated() {
    let mut el = Element::input().class("wide");
    el.add_class("invalid");
    el.add_class("invalid");
    assert_eq!(el.get_attr("class"), Some("wide invalid"));

    el.remove_class("wide");
    el.remove_class("invalid");
    assert!(el.get_attr("class").is_none());
}

#[test]
fn test_set_text_empty_clears() {
    let mut el = Element::p();
    el.set_text("oops");
    assert_eq!(el.text(), Some("oops"));
    el.set_text("");
    assert_eq!(el.text(), None);
}

#[test]
fn test_field_name_falls_back_to_declared_id() {
    assert_eq!(Element::input().id("email").field_name(), Some("email"));
    assert_eq!(Element::input().id("email").name("contact").field_name(), Some("contact"));
    assert_eq!(Element::input().field_name(), None);
}

// ============================================================================
// Deserialization
// ============================================================================

#[test]
fn test_deserialize_tree() {
    let json = r#"{
        "tag": "form",
        "id": "f",
        "children": [
            { "tag": "input", "attrs": { "id": "age", "name": "age", "min": "18" } },
            { "tag": "p", "attrs": { "aria-live": "polite" }, "text": "" }
        ]
    }"#;
    let root: Element = serde_json::from_str(json).unwrap();

    assert_eq!(root.tag, Tag::Form);
    assert_eq!(root.id, "f");
    let age = find_element(&root, "age").unwrap();
    assert_eq!(age.declared_id(), Some("age"));
    assert_eq!(age.get_attr("min"), Some("18"));

    let region = &root.child_elements()[1];
    assert!(region.id.starts_with("p-"));
    assert!(region.declared_id().is_none());
}
