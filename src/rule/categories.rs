use super::*;

/// Replaces the categories dropdown script with a form submitted on change.
pub(crate) struct CategoriesRule;

impl Rule for CategoriesRule {
  fn apply(&self, context: &mut BlockContext<'_>) -> Result<Outcome> {
    let fragment = Fragment::parse(context.markup())?;

    let scripts = fragment.select("script");

    if scripts.is_empty() {
      return Err(Error::StructuralMismatch {
        expected: "categories dropdown script",
      });
    }

    let select = fragment.first(r#"select[name="cat"]"#).ok_or(
      Error::StructuralMismatch {
        expected: "categories select",
      },
    )?;

    let form = match select
      .parent()
      .filter(|parent| query::is_element(parent, "form"))
    {
      Some(form) => form,
      None => {
        Self::wrap_in_form(&fragment, &select, &context.options().home_url)
      }
    };

    let form_id = format!(
      "wp-block-categories-dropdown-{}-form",
      context.session().next_categories_dropdown()
    );

    for script in scripts {
      script.remove_from_parent();
    }

    form.set_attr("id", &form_id);

    add_action(&select, "change", &format!("{form_id}.submit"));

    Ok(Outcome::Rewritten(fragment.into_markup()?))
  }
}

impl CategoriesRule {
  fn wrap_in_form<'a>(
    fragment: &'a Fragment,
    select: &NodeRef<'a>,
    action: &str,
  ) -> NodeRef<'a> {
    let form = fragment.new_element("form");

    form.set_attr("action", action);
    form.set_attr("method", "get");
    form.set_attr("target", "_top");

    select.replace_with(&form);
    form.append_child(select);

    form
  }
}
