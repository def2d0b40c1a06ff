use crate::element::Element;

/// First descendant of `root` (not `root` itself) matching `pred`, in document order.
pub fn find_descendant<'a, F>(root: &'a Element, pred: F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    find_descendant_inner(root, &pred)
}

fn find_descendant_inner<'a, F>(element: &'a Element, pred: &F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    for child in element.child_elements() {
        if pred(child) {
            return Some(child);
        }
        if let Some(found) = find_descendant_inner(child, pred) {
            return Some(found);
        }
    }
    None
}

/// All descendants of `root` matching `pred`, in document order.
pub fn collect_descendants<'a, F>(root: &'a Element, pred: F) -> Vec<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    let mut result = Vec::new();
    collect_descendants_inner(root, &pred, &mut result);
    result
}

fn collect_descendants_inner<'a, F>(element: &'a Element, pred: &F, result: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    for child in element.child_elements() {
        if pred(child) {
            result.push(child);
        }
        collect_descendants_inner(child, pred, result);
    }
}

/// Nearest element matching `pred`, starting at the element with `id` and
/// walking up through its ancestors.
pub fn closest<'a, F>(root: &'a Element, id: &str, pred: F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    crate::element::path_to(root, id)
        .into_iter()
        .rev()
        .find(|el| pred(el))
}

/// Every form control (`input`, `textarea`, `select`) under `root`.
pub fn collect_controls(root: &Element) -> Vec<&Element> {
    collect_descendants(root, |el| el.tag.is_control())
}
