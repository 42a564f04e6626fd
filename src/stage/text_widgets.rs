use super::*;

/// Restores preserved media dimensions inside text widgets.
pub(crate) struct TextWidgetsStage;

impl Stage for TextWidgetsStage {
  fn name(&self) -> &'static str {
    "text widgets"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    for widget in context
      .document()
      .select(r#"div[class="textwidget"]"#)
      .nodes()
    {
      dimensions::restore_within(widget);
    }

    Ok(())
  }
}
