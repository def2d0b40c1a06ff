use formdom::Tag;
use serde::Deserialize;

/// How the binder builds and flags the elements it writes to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Tag of synthesized error regions.
    pub region_tag: Tag,
    /// `aria-live` politeness of synthesized error regions.
    pub live_politeness: String,
    /// Class added to a field while it is invalid.
    pub invalid_class: String,
    /// Synthesized regions get the id `<prefix>-<field name>`.
    pub region_id_prefix: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            region_tag: Tag::P,
            live_politeness: "assertive".to_string(),
            invalid_class: "invalid".to_string(),
            region_id_prefix: "error".to_string(),
        }
    }
}
