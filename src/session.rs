/// Counters that keep generated ids unique across the blocks and widgets of
/// one page render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
  archives_dropdowns: usize,
  categories_dropdowns: usize,
  categories_widgets: usize,
  navigation_blocks: usize,
}

impl Session {
  #[must_use]
  pub fn archives_dropdowns(&self) -> usize {
    self.archives_dropdowns
  }

  #[must_use]
  pub fn categories_dropdowns(&self) -> usize {
    self.categories_dropdowns
  }

  #[must_use]
  pub fn categories_widgets(&self) -> usize {
    self.categories_widgets
  }

  #[must_use]
  pub fn navigation_blocks(&self) -> usize {
    self.navigation_blocks
  }

  pub(crate) fn next_archives_dropdown(&mut self) -> usize {
    Self::advance(&mut self.archives_dropdowns)
  }

  pub(crate) fn next_categories_dropdown(&mut self) -> usize {
    Self::advance(&mut self.categories_dropdowns)
  }

  pub(crate) fn next_categories_widget(&mut self) -> usize {
    Self::advance(&mut self.categories_widgets)
  }

  pub(crate) fn next_navigation_block(&mut self) -> usize {
    Self::advance(&mut self.navigation_blocks)
  }

  fn advance(counter: &mut usize) -> usize {
    *counter += 1;
    *counter
  }
}
