use super::*;

/// Drops image and audio placeholders, which render empty media elements.
pub(crate) struct MediaPlaceholderRule;

impl Rule for MediaPlaceholderRule {
  fn apply(&self, context: &mut BlockContext<'_>) -> Result<Outcome> {
    if re::MEDIA_SOURCE.is_match(context.markup()) {
      return Ok(Outcome::Unchanged);
    }

    Ok(Outcome::Rewritten(String::new()))
  }
}
