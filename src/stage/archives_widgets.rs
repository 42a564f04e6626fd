use super::*;

/// Replaces the change handler of classic archives widget dropdowns with a
/// navigation binding.
pub(crate) struct ArchivesWidgetsStage;

impl Stage for ArchivesWidgetsStage {
  fn name(&self) -> &'static str {
    "archives widgets"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let selects = context
      .document()
      .select(r#"select[name="archive-dropdown"][id^="archives-dropdown-"]"#)
      .nodes()
      .to_vec();

    for select in selects {
      let Some(scope) = select.parent() else {
        continue;
      };

      if let Err(error) = bind_archives_dropdown(
        &scope,
        &select,
        context.host(),
        context.options(),
      ) {
        tracing::debug!(%error, "skipping archives widget");
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const WIDGET: &str = concat!(
    r#"<section class="widget widget_archive">"#,
    r#"<label class="screen-reader-text" for="archives-dropdown-7">Archives</label>"#,
    r#"<select id="archives-dropdown-7" name="archive-dropdown">"#,
    r#"<option value="">Select Month</option>"#,
    r#"<option value="https://example.com/2024/01/">January 2024</option>"#,
    r#"</select>"#,
    r#"<script>function onSelectChange() {}</script>"#,
    r#"</section>"#,
  );

  #[test]
  fn binds_navigation_and_keeps_id() {
    let output = Transformer::new(&NoopHost, TransformOptions::default())
      .sanitize_widgets(WIDGET);

    let document = Document::from(output.as_str());
    let select = document.select("select");

    assert_eq!(select.attr("id").as_deref(), Some("archives-dropdown-7"));
    assert_eq!(
      select.attr("on").as_deref(),
      Some("change:AMP.navigateTo(url=event.value)")
    );
    assert!(document.select("script").is_empty());
  }

  #[test]
  fn paired_urls_follow_linking_option() {
    let options = TransformOptions::builder().amp_to_amp_linking(true).build();

    let output =
      Transformer::new(&NoopHost, options).sanitize_widgets(WIDGET);

    let document = Document::from(output.as_str());

    let values = document
      .select("option")
      .nodes()
      .iter()
      .filter_map(|option| option.attr("value").map(|value| value.to_string()))
      .collect::<Vec<String>>();

    assert_eq!(values, vec!["", "https://example.com/2024/01/?amp=1"]);
  }

  #[test]
  fn dropdown_without_handler_is_skipped() {
    let output = Transformer::new(&NoopHost, TransformOptions::default())
      .sanitize_widgets(
        r#"<div><select id="archives-dropdown-2" name="archive-dropdown"></select></div>"#,
      );

    let document = Document::from(output.as_str());

    assert!(!document.select("select").has_attr("on"));
  }

  #[test]
  fn block_dropdowns_are_not_widgets() {
    let output = Transformer::new(&NoopHost, TransformOptions::default())
      .sanitize_widgets(
        r#"<div><select id="wp-block-archives-1" name="archive-dropdown" onchange="go()"></select></div>"#,
      );

    let document = Document::from(output.as_str());

    assert_eq!(
      document.select("select").attr("onchange").as_deref(),
      Some("go()")
    );
  }
}
