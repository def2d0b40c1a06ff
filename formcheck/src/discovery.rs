//! Structural discovery: which element, label and error region belong to a field.
//!
//! Everything here is a pure read of the tree except
//! [`synthesize_error_region`], which the binder calls once per field that
//! came back without a region.

use formdom::{Element, Tag};

use crate::config::BinderConfig;

/// What discovery found for one field. Values are element ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMetadata {
    pub field_name: String,
    pub element: String,
    pub label: Option<String>,
    pub error_region: Option<String>,
}

/// An element marked as a place to announce errors: `role="alert"` or any `aria-live`.
pub fn is_error_region(element: &Element) -> bool {
    element.get_attr("role") == Some("alert") || element.has_attr("aria-live")
}

/// Controls under `form` that have a field name, as `(name, element id)`.
///
/// When several controls share a name (a checkbox group) the first one in
/// document order represents the field.
pub fn collect_fields(form: &Element) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = Vec::new();
    for control in formdom::collect_controls(form) {
        let Some(name) = control.field_name() else {
            log::debug!("[discovery] skipping unnamed control {}", control.id);
            continue;
        };
        if fields.iter().any(|(existing, _)| existing == name) {
            continue;
        }
        fields.push((name.to_string(), control.id.clone()));
    }
    fields
}

/// Label for the field: `label[for=<declared id>]` anywhere in the document,
/// else the nearest enclosing `label`.
pub fn find_label(document: &Element, field_id: &str) -> Option<String> {
    let field = formdom::find_element(document, field_id)?;

    if let Some(declared) = field.declared_id() {
        let by_for = formdom::find_descendant(document, |el| {
            el.tag == Tag::Label && el.get_attr("for") == Some(declared)
        });
        if let Some(label) = by_for {
            return Some(label.id.clone());
        }
    }

    formdom::closest(document, field_id, |el| el.tag == Tag::Label).map(|label| label.id.clone())
}

/// Error region for the field, tried in order: following siblings, anything
/// under the parent, anything under each further ancestor up to (not
/// including) the form.
pub fn find_error_region(document: &Element, form_id: &str, field_id: &str) -> Option<String> {
    if let Some(sibling) = formdom::following_siblings(document, field_id)
        .iter()
        .find(|el| is_error_region(el))
    {
        return Some(sibling.id.clone());
    }

    let ancestors = formdom::ancestors(document, field_id);
    let mut ancestors = ancestors.into_iter();

    if let Some(parent) = ancestors.next() {
        if let Some(found) = formdom::find_descendant(parent, is_error_region) {
            return Some(found.id.clone());
        }
        if parent.id == form_id {
            return None;
        }
    }

    ancestors
        .take_while(|ancestor| ancestor.id != form_id)
        .find_map(|ancestor| formdom::find_descendant(ancestor, is_error_region))
        .map(|found| found.id.clone())
}

/// Discover label and error region for the control `field_id` inside `form_id`.
///
/// Returns `None` if the control isn't in the document or has no field name.
pub fn discover(document: &Element, form_id: &str, field_id: &str) -> Option<FieldMetadata> {
    let field = formdom::find_element(document, field_id)?;
    let field_name = field.field_name()?.to_string();

    let metadata = FieldMetadata {
        label: find_label(document, field_id),
        error_region: find_error_region(document, form_id, field_id),
        element: field_id.to_string(),
        field_name,
    };
    log::debug!(
        "[discovery] {} -> element={} label={:?} region={:?}",
        metadata.field_name,
        metadata.element,
        metadata.label,
        metadata.error_region
    );
    Some(metadata)
}

/// Discover every field of the form. `None` if `form_id` is not a form in the document.
pub fn discover_form(document: &Element, form_id: &str) -> Option<Vec<FieldMetadata>> {
    let form = formdom::find_element(document, form_id).filter(|el| el.tag == Tag::Form)?;
    let metadata = collect_fields(form)
        .into_iter()
        .filter_map(|(_, element_id)| discover(document, form_id, &element_id))
        .collect();
    Some(metadata)
}

/// Insert a fresh error region right after the field and record it in `metadata`.
///
/// Returns false if the field has no parent to insert into.
pub fn synthesize_error_region(
    document: &mut Element,
    metadata: &mut FieldMetadata,
    config: &BinderConfig,
) -> bool {
    let mut region = Element::new(config.region_tag)
        .role("alert")
        .attr("aria-live", config.live_politeness.clone());

    let wanted = format!("{}-{}", config.region_id_prefix, metadata.field_name);
    if formdom::find_element(document, &wanted).is_none() {
        region = region.id(wanted);
    }
    let region_id = region.id.clone();

    if !formdom::insert_after(document, &metadata.element, region) {
        log::warn!(
            "[discovery] could not place error region for {}",
            metadata.field_name
        );
        return false;
    }
    log::debug!(
        "[discovery] synthesized error region {region_id} for {}",
        metadata.field_name
    );
    metadata.error_region = Some(region_id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_error_region() {
        assert!(is_error_region(&Element::p().role("alert")));
        assert!(is_error_region(&Element::p().attr("aria-live", "polite")));
        assert!(!is_error_region(&Element::p().role("status")));
    }

    #[test]
    fn test_collect_fields_first_of_group_wins() {
        let form = Element::form()
            .child(Element::checkbox("tags", "a").id("t-a"))
            .child(Element::checkbox("tags", "b").id("t-b"))
            .child(Element::input())
            .child(Element::textarea().id("bio"));
        assert_eq!(
            collect_fields(&form),
            vec![
                ("tags".to_string(), "t-a".to_string()),
                ("bio".to_string(), "bio".to_string()),
            ]
        );
    }
}
