use super::*;

/// Rewrites rendered blocks and widgets into AMP-compatible markup.
///
/// A transformer owns the [`Session`] of one page render: create one per
/// render and feed it every block of that page in order.
pub struct Transformer<'h> {
  host: &'h dyn Host,
  options: TransformOptions,
  session: Session,
}

impl<'h> Transformer<'h> {
  pub fn new(host: &'h dyn Host, options: TransformOptions) -> Self {
    Self {
      host,
      options,
      session: Session::default(),
    }
  }

  #[must_use]
  pub fn options(&self) -> &TransformOptions {
    &self.options
  }

  /// Runs the structural rule for `block`, reporting why nothing changed
  /// when the rule could not apply.
  pub fn rewrite(&mut self, html: &str, block: &Block) -> Result<Outcome> {
    let kind = block.kind();

    tracing::trace!(block = %block.name, ?kind, "rewriting block");

    let mut context = BlockContext::new(
      block,
      self.host,
      html,
      &self.options,
      &mut self.session,
    );

    match kind {
      BlockKind::Archives => ArchivesRule.apply(&mut context),
      BlockKind::Audio | BlockKind::Image => {
        MediaPlaceholderRule.apply(&mut context)
      }
      BlockKind::Categories => CategoriesRule.apply(&mut context),
      BlockKind::File => FileRule.apply(&mut context),
      BlockKind::Navigation => NavigationRule.apply(&mut context),
      BlockKind::Video => VideoRule.apply(&mut context),
      BlockKind::Other | BlockKind::Shortcode => Ok(Outcome::Unchanged),
    }
  }

  /// Parses a whole page and rewrites the classic widgets found in it.
  pub fn sanitize_widgets(&mut self, html: &str) -> String {
    let document = Document::from(html);

    let context =
      Context::new(&document, self.host, &self.options, &mut self.session);

    if let Err(error) = Pipeline::with_default_stages(context).run() {
      tracing::debug!(%error, "widget sanitization stopped early");
    }

    document.html().to_string()
  }

  #[must_use]
  pub fn session(&self) -> &Session {
    &self.session
  }

  /// Returns `html` rewritten for `block`. Never fails: when a rule cannot
  /// apply, its input comes back unchanged.
  pub fn transform(&mut self, html: &str, block: &Block) -> String {
    let html = match attributes::inject(html, block) {
      Some(injected) => Cow::Owned(injected),
      None => Cow::Borrowed(html),
    };

    match self.rewrite(&html, block) {
      Ok(Outcome::Rewritten(rewritten)) => rewritten,
      Ok(Outcome::Unchanged) => html.into_owned(),
      Err(error) => {
        tracing::debug!(%error, block = %block.name, "leaving block unchanged");
        html.into_owned()
      }
    }
  }
}
