//! AMP `on` attribute handling.
//!
//! The attribute holds `event:action,action;event:action` entries. Adding an
//! action for an event that is already bound appends to that event's list.

use super::*;

pub(crate) fn add_action(node: &NodeRef<'_>, event: &str, action: &str) {
  let existing = node.attr("on").map(|value| value.to_string());

  node.set_attr(
    "on",
    &merge(existing.as_deref().unwrap_or_default(), event, action),
  );
}

fn merge(existing: &str, event: &str, action: &str) -> String {
  let mut bindings = parse(existing);

  match bindings.iter_mut().find(|(name, _)| name == event) {
    Some((_, actions)) => {
      if !actions.iter().any(|current| current == action) {
        actions.push(action.to_string());
      }
    }
    None => bindings.push((event.to_string(), vec![action.to_string()])),
  }

  bindings
    .iter()
    .map(|(event, actions)| format!("{event}:{}", actions.join(",")))
    .collect::<Vec<String>>()
    .join(";")
}

fn parse(value: &str) -> Vec<(String, Vec<String>)> {
  value
    .split(';')
    .filter_map(|binding| {
      let (event, actions) = binding.split_once(':')?;

      let event = event.trim();

      if event.is_empty() {
        return None;
      }

      Some((
        event.to_string(),
        actions
          .split(',')
          .map(str::trim)
          .filter(|action| !action.is_empty())
          .map(str::to_string)
          .collect(),
      ))
    })
    .collect()
}
