//! Structural queries scoped to a subtree.
//!
//! All results are in document order and exclude the scope node itself.

use super::*;

/// Builds a `tag.class1.class2` selector, which matches on class-list
/// membership rather than on the literal `class` attribute value.
pub(crate) fn class_selector(tag: &str, classes: &[&str]) -> String {
  iter::once(tag.to_string())
    .chain(classes.iter().map(|class| format!(".{class}")))
    .collect()
}

pub(crate) fn find_all<'a>(
  scope: &NodeRef<'a>,
  selector: &str,
) -> Vec<NodeRef<'a>> {
  Selection::from(scope.clone())
    .select(selector)
    .nodes()
    .to_vec()
}

pub(crate) fn find_first<'a>(
  scope: &NodeRef<'a>,
  selector: &str,
) -> Option<NodeRef<'a>> {
  find_all(scope, selector).into_iter().next()
}

pub(crate) fn find_with_class<'a>(
  scope: &NodeRef<'a>,
  tag: &str,
  classes: &[&str],
) -> Vec<NodeRef<'a>> {
  find_all(scope, &class_selector(tag, classes))
}

pub(crate) fn first_with_class<'a>(
  scope: &NodeRef<'a>,
  tag: &str,
  classes: &[&str],
) -> Option<NodeRef<'a>> {
  find_with_class(scope, tag, classes).into_iter().next()
}

pub(crate) fn has_ancestor(node: &NodeRef<'_>, tag: &str) -> bool {
  iter::successors(node.parent(), NodeRef::parent)
    .any(|ancestor| ancestor.node_name().as_deref() == Some(tag))
}

pub(crate) fn is_element(node: &NodeRef<'_>, tag: &str) -> bool {
  node.node_name().as_deref() == Some(tag)
}

/// Scripts under `scope` whose source mentions `needle`.
pub(crate) fn scripts_containing<'a>(
  scope: &NodeRef<'a>,
  needle: &str,
) -> Vec<NodeRef<'a>> {
  find_all(scope, "script")
    .into_iter()
    .filter(|script| script.text().contains(needle))
    .collect()
}

/// Removes `name` from every descendant of `scope` that carries it.
pub(crate) fn strip_attribute(scope: &NodeRef<'_>, name: &str) {
  for node in find_all(scope, &format!("[{name}]")) {
    node.remove_attr(name);
  }
}
