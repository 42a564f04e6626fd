use super::*;

/// State shared by the widget stages while they rewrite one page.
pub(crate) struct Context<'a> {
  document: &'a Document,
  host: &'a dyn Host,
  options: &'a TransformOptions,
  session: &'a mut Session,
}

impl<'a> Context<'a> {
  pub(crate) fn document(&self) -> &'a Document {
    self.document
  }

  pub(crate) fn host(&self) -> &'a dyn Host {
    self.host
  }

  pub(crate) fn new(
    document: &'a Document,
    host: &'a dyn Host,
    options: &'a TransformOptions,
    session: &'a mut Session,
  ) -> Self {
    Self {
      document,
      host,
      options,
      session,
    }
  }

  pub(crate) fn options(&self) -> &'a TransformOptions {
    self.options
  }

  pub(crate) fn session(&mut self) -> &mut Session {
    self.session
  }
}
