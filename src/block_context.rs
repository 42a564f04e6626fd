use super::*;

/// Everything a rewrite rule may consult while rewriting one block.
pub(crate) struct BlockContext<'a> {
  block: &'a Block,
  host: &'a dyn Host,
  markup: &'a str,
  options: &'a TransformOptions,
  session: &'a mut Session,
}

impl<'a> BlockContext<'a> {
  pub(crate) fn block(&self) -> &Block {
    self.block
  }

  pub(crate) fn host(&self) -> &dyn Host {
    self.host
  }

  pub(crate) fn markup(&self) -> &str {
    self.markup
  }

  pub(crate) fn new(
    block: &'a Block,
    host: &'a dyn Host,
    markup: &'a str,
    options: &'a TransformOptions,
    session: &'a mut Session,
  ) -> Self {
    Self {
      block,
      host,
      markup,
      options,
      session,
    }
  }

  pub(crate) fn options(&self) -> &TransformOptions {
    self.options
  }

  pub(crate) fn session(&mut self) -> &mut Session {
    self.session
  }
}
