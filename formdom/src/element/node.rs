use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Element kind. Only the handful of tags a form needs are modelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Form,
    Input,
    Textarea,
    Select,
    Label,
    Fieldset,
    #[default]
    Div,
    P,
    Span,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Label => "label",
            Self::Fieldset => "fieldset",
            Self::Div => "div",
            Self::P => "p",
            Self::Span => "span",
        }
    }

    /// Tags that carry a user-editable value.
    pub fn is_control(self) -> bool {
        matches!(self, Self::Input | Self::Textarea | Self::Select)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ElementSpec")]
pub struct Element {
    // Identity (handle used for lookups, always present)
    pub id: String,
    pub tag: Tag,

    // Declared attributes (`name`, `type`, `required`, `aria-live`, ...)
    pub attrs: BTreeMap<String, String>,

    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self::new(Tag::Div)
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.as_str()),
            tag,
            attrs: BTreeMap::new(),
            content: Content::None,
        }
    }

    pub fn form() -> Self {
        Self::new(Tag::Form)
    }

    pub fn input() -> Self {
        Self::new(Tag::Input)
    }

    pub fn textarea() -> Self {
        Self::new(Tag::Textarea)
    }

    pub fn select() -> Self {
        Self::new(Tag::Select)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(Tag::Label).text_content(text)
    }

    pub fn fieldset() -> Self {
        Self::new(Tag::Fieldset)
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn p() -> Self {
        Self::new(Tag::P)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    /// A checkbox belonging to the group `name`.
    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::input()
            .input_type("checkbox")
            .name(name)
            .value(value)
    }

    // Identity

    /// Set the handle and declare it as the element's `id` attribute.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.attrs.insert("id".to_string(), id.clone());
        self.id = id;
        self
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    pub fn input_type(self, kind: impl Into<String>) -> Self {
        self.attr("type", kind)
    }

    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr("value", value)
    }

    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.set_flag("checked", checked);
        self
    }

    pub fn role(self, role: impl Into<String>) -> Self {
        self.attr("role", role)
    }

    pub fn class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    // Content
    pub fn text_content(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Reads
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// The `id` attribute, if one was declared (generated handles don't count).
    pub fn declared_id(&self) -> Option<&str> {
        self.get_attr("id").filter(|id| !id.is_empty())
    }

    /// The name a form control is addressed by: `name`, falling back to the declared id.
    pub fn field_name(&self) -> Option<&str> {
        self.get_attr("name")
            .filter(|name| !name.is_empty())
            .or_else(|| self.declared_id())
    }

    pub fn current_value(&self) -> &str {
        self.get_attr("value").unwrap_or_default()
    }

    pub fn is_checked(&self) -> bool {
        self.has_attr("checked")
    }

    pub fn is_checkbox(&self) -> bool {
        self.tag == Tag::Input && self.get_attr("type") == Some("checkbox")
    }

    pub fn text(&self) -> Option<&str> {
        self.content.text()
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    // Writes
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    /// Set (`true`) or remove (`false`) a boolean attribute.
    pub fn set_flag(&mut self, key: &str, on: bool) {
        if on {
            self.attrs.insert(key.to_string(), String::new());
        } else {
            self.attrs.remove(key);
        }
    }

    /// Replace the content with `text`. An empty string clears it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.content = if text.is_empty() {
            Content::None
        } else {
            Content::Text(text)
        };
    }

    pub fn add_class(&mut self, class: &str) {
        if class.is_empty() || self.has_class(class) {
            return;
        }
        let classes = match self.attrs.get("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_string(),
        };
        self.attrs.insert("class".to_string(), classes);
    }

    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attrs.get("class") else {
            return;
        };
        let remaining: Vec<&str> = existing.split_whitespace().filter(|c| *c != class).collect();
        if remaining.is_empty() {
            self.attrs.remove("class");
        } else {
            let joined = remaining.join(" ");
            self.attrs.insert("class".to_string(), joined);
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }
}

/// Wire shape of an element. `id` may be given directly or as an attribute;
/// without either a handle is generated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ElementSpec {
    id: Option<String>,
    tag: Tag,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    children: Vec<Element>,
}

impl From<ElementSpec> for Element {
    fn from(spec: ElementSpec) -> Self {
        let declared = spec.id.or_else(|| spec.attrs.get("id").cloned());
        let mut element = Element::new(spec.tag);
        element.attrs = spec.attrs;
        if let Some(id) = declared {
            element = element.id(id);
        }
        if !spec.children.is_empty() {
            element.content = Content::Children(spec.children);
        } else if let Some(text) = spec.text {
            element.content = Content::Text(text);
        }
        element
    }
}
