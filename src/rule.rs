use super::*;

mod archives;
mod categories;
mod file;
mod media_placeholder;
mod navigation;
mod video;

pub(crate) use {
  archives::{ArchivesRule, bind_archives_dropdown},
  categories::CategoriesRule,
  file::FileRule,
  media_placeholder::MediaPlaceholderRule,
  navigation::NavigationRule,
  video::VideoRule,
};

/// What a rule did with the markup it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Rewritten(String),
  Unchanged,
}

pub(crate) trait Rule {
  fn apply(&self, context: &mut BlockContext<'_>) -> Result<Outcome>;
}
