use super::*;

const ID_PREFIXES: &[&str] = &["wp-block-archives-", "archives-dropdown-"];

const NAVIGATE_ACTION: &str = "AMP.navigateTo(url=event.value)";

/// Replaces the archives dropdown change handler with a navigation binding
/// and gives the dropdown a sequential id.
pub(crate) struct ArchivesRule;

impl Rule for ArchivesRule {
  fn apply(&self, context: &mut BlockContext<'_>) -> Result<Outcome> {
    let fragment = Fragment::parse(context.markup())?;

    let body = fragment.body()?;

    let select = fragment.first(r#"select[name="archive-dropdown"]"#).ok_or(
      Error::StructuralMismatch {
        expected: "archives select",
      },
    )?;

    bind_archives_dropdown(&body, &select, context.host(), context.options())?;

    let number = context.session().next_archives_dropdown();

    Self::renumber(&body, &select, number);

    Ok(Outcome::Rewritten(fragment.into_markup()?))
  }
}

impl ArchivesRule {
  fn renumber(scope: &NodeRef<'_>, select: &NodeRef<'_>, number: usize) {
    let Some(old_id) = select.attr("id").map(|id| id.to_string()) else {
      return;
    };

    let Some(prefix) = ID_PREFIXES
      .iter()
      .find(|prefix| old_id.starts_with(**prefix))
    else {
      return;
    };

    let new_id = format!("{prefix}{number}");

    for label in query::find_all(scope, "label[for]") {
      if label.attr("for").as_deref() == Some(old_id.as_str()) {
        label.set_attr("for", &new_id);
      }
    }

    select.set_attr("id", &new_id);
  }
}

/// Swaps the dropdown's script or inline handler for an AMP navigation
/// binding. Fails without touching the tree when no handler is present.
pub(crate) fn bind_archives_dropdown(
  scope: &NodeRef<'_>,
  select: &NodeRef<'_>,
  host: &dyn Host,
  options: &TransformOptions,
) -> Result {
  let scripts = query::scripts_containing(scope, "onSelectChange");

  if scripts.is_empty() && !select.has_attr("onchange") {
    return Err(Error::StructuralMismatch {
      expected: "archives change handler",
    });
  }

  for script in scripts {
    script.remove_from_parent();
  }

  select.remove_attr("onchange");

  add_action(select, "change", NAVIGATE_ACTION);

  if options.amp_to_amp_linking {
    for option in query::find_all(select, "option") {
      let Some(value) = option.attr("value").filter(|value| !value.is_empty())
      else {
        continue;
      };

      option.set_attr("value", &host.paired_amp_url(&value));
    }
  }

  Ok(())
}
