use super::*;

const HANDLER: &str = "onCatChange";

/// Binds classic categories widget dropdowns to a form submit and drops the
/// inline script that used to do it.
pub(crate) struct CategoriesWidgetsStage;

impl Stage for CategoriesWidgetsStage {
  fn name(&self) -> &'static str {
    "categories widgets"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let selects = context
      .document()
      .select(r#"form > select[name="cat"]"#)
      .nodes()
      .to_vec();

    for select in selects {
      let Some(form) = select.parent() else {
        continue;
      };

      let Some(scope) = form.parent() else {
        continue;
      };

      let scripts = query::scripts_containing(&scope, HANDLER);

      if scripts.is_empty() {
        continue;
      }

      let id = format!(
        "amp-wp-widget-categories-{}",
        context.session().next_categories_widget()
      );

      tracing::trace!(%id, "binding categories widget");

      form.set_attr("id", &id);

      add_action(&select, "change", &format!("{id}.submit"));

      for script in scripts {
        script.remove_from_parent();
      }
    }

    Ok(())
  }
}
