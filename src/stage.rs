use super::*;

mod archives_widgets;
mod categories_widgets;
mod text_widgets;

pub(crate) use {
  archives_widgets::ArchivesWidgetsStage,
  categories_widgets::CategoriesWidgetsStage, text_widgets::TextWidgetsStage,
};

pub(crate) trait Stage {
  fn name(&self) -> &'static str;

  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
