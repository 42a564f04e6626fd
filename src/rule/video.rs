use super::*;

/// Copies the attachment's intrinsic size onto the `<video>` element.
pub(crate) struct VideoRule;

impl Rule for VideoRule {
  fn apply(&self, context: &mut BlockContext<'_>) -> Result<Outcome> {
    let Some(attachment_id) = context.block().attachment_id() else {
      return Ok(Outcome::Unchanged);
    };

    let Some(MediaDimensions { width, height }) =
      context.host().media_dimensions(attachment_id)
    else {
      return Ok(Outcome::Unchanged);
    };

    let markup = context.markup();

    if !re::VIDEO_OPENING.is_match(markup) {
      return Err(Error::StructuralMismatch {
        expected: "video element",
      });
    }

    let rewritten =
      re::VIDEO_OPENING.replace_all(markup, |captures: &Captures<'_>| {
        format!(r#"{}width="{width}" height="{height}" "#, &captures[0])
      });

    Ok(Outcome::Rewritten(rewritten.into_owned()))
  }
}
