//! Keeps explicit media dimensions alive through content filters that strip
//! `width` and `height` from embeds.
//!
//! [`preserve_dimensions`] runs before such a filter and shadows every
//! dimension in a `data-preserved-*` attribute; [`restore_dimensions`] runs
//! after it and copies the shadows back.

use super::*;

const PRESERVED_HEIGHT: &str = "data-preserved-height";
const PRESERVED_WIDTH: &str = "data-preserved-width";

/// Shadows `width`/`height` on every `video`, `iframe`, `object` and `embed`
/// opening tag in `text`. Running it twice changes nothing.
#[must_use]
pub fn preserve_dimensions(text: &str) -> String {
  re::MEDIA_OPENING_TAG
    .replace_all(text, |captures: &Captures<'_>| {
      let tag = Cow::Borrowed(&captures[0]);
      let tag = shadow(tag, &re::DIMENSION_HEIGHT, PRESERVED_HEIGHT);
      shadow(tag, &re::DIMENSION_WIDTH, PRESERVED_WIDTH).into_owned()
    })
    .into_owned()
}

fn shadow<'a>(
  tag: Cow<'a, str>,
  dimension: &Regex,
  shadow: &str,
) -> Cow<'a, str> {
  if tag.contains(&format!("{shadow}=")) || !dimension.is_match(&tag) {
    return tag;
  }

  Cow::Owned(
    dimension
      .replace_all(&tag, |captures: &Captures<'_>| {
        format!(r#" {shadow}="{}"{}"#, &captures[1], &captures[0])
      })
      .into_owned(),
  )
}

/// Copies shadowed dimensions back onto their elements and drops the inline
/// size the video shortcode puts on its wrapper.
///
/// Markup that cannot be parsed is returned unchanged.
#[must_use]
pub fn restore_dimensions(markup: &str) -> String {
  let restored = Fragment::parse(markup).and_then(|fragment| {
    restore_within(&fragment.body()?);
    fragment.into_markup()
  });

  match restored {
    Ok(restored) => restored,
    Err(error) => {
      tracing::debug!(%error, "leaving dimensions unrestored");
      markup.to_string()
    }
  }
}

pub(crate) fn restore_within(scope: &NodeRef<'_>) {
  let selector = format!("[{PRESERVED_WIDTH}], [{PRESERVED_HEIGHT}]");

  for element in query::find_all(scope, &selector) {
    for (shadow, dimension) in
      [(PRESERVED_WIDTH, "width"), (PRESERVED_HEIGHT, "height")]
    {
      if let Some(value) = element.attr(shadow) {
        element.set_attr(dimension, &value);
        element.remove_attr(shadow);
      }
    }
  }

  for wrapper in query::find_all(scope, r#"div[class="wp-video"][style]"#) {
    wrapper.remove_attr("style");
  }
}
