use super::*;

/// Ordered widget stages run over one page. A failing stage stops the run;
/// edits made by earlier stages stay in the document.
pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  pub(crate) fn run(mut self) -> Result {
    for stage in &mut self.stages {
      tracing::trace!(stage = stage.name(), "running widget stage");
      stage.run(&mut self.context)?;
    }

    Ok(())
  }

  pub(crate) fn with_default_stages(context: Context<'a>) -> Self {
    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(CategoriesWidgetsStage));
    pipeline.add_stage(Box::new(ArchivesWidgetsStage));
    pipeline.add_stage(Box::new(TextWidgetsStage));

    pipeline
  }
}
