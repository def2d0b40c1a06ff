mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Path from `root` down to the element with `id`, both ends included.
/// Returns an empty vec if the element isn't in the tree.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let mut path = Vec::new();
    if !collect_path(root, id, &mut path) {
        path.clear();
    }
    path
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    for child in element.child_elements() {
        if collect_path(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Ancestors of the element with `id`, nearest first. The element itself is excluded.
pub fn ancestors<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let mut path = path_to(root, id);
    path.pop();
    path.reverse();
    path
}

pub fn parent_of<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    ancestors(root, id).into_iter().next()
}

/// Siblings that come after the element with `id`, in document order.
pub fn following_siblings<'a>(root: &'a Element, id: &str) -> &'a [Element] {
    let Some(parent) = parent_of(root, id) else {
        return &[];
    };
    let siblings = parent.child_elements();
    match siblings.iter().position(|el| el.id == id) {
        Some(idx) => &siblings[idx + 1..],
        None => &[],
    }
}

/// Insert `element` directly after the element with `sibling_id`.
/// Returns false if the sibling has no parent in this tree.
pub fn insert_after(root: &mut Element, sibling_id: &str, element: Element) -> bool {
    let Some(parent_id) = parent_of(root, sibling_id).map(|parent| parent.id.clone()) else {
        log::warn!("[insert_after] no parent for {sibling_id}, skipping insert");
        return false;
    };
    let Some(children) = find_element_mut(root, &parent_id).and_then(Element::children_mut) else {
        return false;
    };
    let Some(idx) = children.iter().position(|el| el.id == sibling_id) else {
        return false;
    };
    log::debug!(
        "[insert_after] inserting {} after {} under {}",
        element.id,
        sibling_id,
        parent_id
    );
    children.insert(idx + 1, element);
    true
}
