pub mod element;
pub mod query;

pub use element::{
    ancestors, find_element, find_element_mut, following_siblings, insert_after, parent_of,
    path_to, Content, Element, Tag,
};
pub use query::{closest, collect_controls, collect_descendants, find_descendant};
