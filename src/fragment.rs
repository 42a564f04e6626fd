use super::*;

/// A markup fragment parsed into its own document.
///
/// The fragment is placed inside an explicit `<body>` so that leading
/// `<script>` and `<style>` elements stay where they were written instead of
/// being hoisted into `<head>`.
pub(crate) struct Fragment {
  document: Document,
}

impl Fragment {
  pub(crate) fn body(&self) -> Result<NodeRef<'_>> {
    self
      .document
      .select("body")
      .nodes()
      .first()
      .cloned()
      .ok_or(Error::Parse)
  }

  pub(crate) fn first(&self, selector: &str) -> Option<NodeRef<'_>> {
    self.document.select(selector).nodes().first().cloned()
  }

  pub(crate) fn into_markup(self) -> Result<String> {
    let markup = self.body()?.inner_html().to_string();
    Ok(markup)
  }

  pub(crate) fn new_element(&self, name: &str) -> NodeRef<'_> {
    self.document.tree.new_element(name)
  }

  pub(crate) fn parse(markup: &str) -> Result<Self> {
    let wrapped = format!("<html><head></head><body>{markup}</body></html>");

    let fragment = Self {
      document: Document::from(wrapped.as_str()),
    };

    fragment.body()?;

    Ok(fragment)
  }

  pub(crate) fn select(&self, selector: &str) -> Vec<NodeRef<'_>> {
    self.document.select(selector).nodes().to_vec()
  }
}
