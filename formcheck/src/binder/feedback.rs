//! Writing validation state back into the document.

use formdom::{Element, find_element_mut};

use crate::config::BinderConfig;
use crate::discovery::FieldMetadata;

/// Show `message` for the field, or clear everything when `None`.
///
/// Only sets state, never toggles it, so repeating a call leaves the
/// document unchanged.
pub fn render(
    document: &mut Element,
    metadata: &FieldMetadata,
    message: Option<&str>,
    config: &BinderConfig,
) {
    if let Some(region_id) = &metadata.error_region {
        match find_element_mut(document, region_id) {
            Some(region) => region.set_text(message.unwrap_or_default()),
            None => log::warn!(
                "[feedback] error region {region_id} of {} is gone",
                metadata.field_name
            ),
        }
    }

    let Some(field) = find_element_mut(document, &metadata.element) else {
        return;
    };
    if message.is_some() {
        field.set_attr("aria-invalid", "true");
        field.add_class(&config.invalid_class);
    } else {
        field.remove_attr("aria-invalid");
        field.remove_class(&config.invalid_class);
    }
}
