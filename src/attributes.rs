use super::*;

/// Block attributes mirrored onto the block's root element.
const MIRRORED_ATTRIBUTES: &[(&str, &str)] = &[
  ("ampCarousel", "data-amp-carousel"),
  ("ampLayout", "data-amp-layout"),
  ("ampLightbox", "data-amp-lightbox"),
  ("ampNoLoading", "data-amp-noloading"),
];

/// Splices the mirrored attributes into the first opening tag of `markup`.
///
/// This is a textual insertion so that blocks without a structural rewrite
/// never pay for a parse. Returns `None` when there is nothing to insert.
pub(crate) fn inject(markup: &str, block: &Block) -> Option<String> {
  if block.kind() == BlockKind::Shortcode {
    return None;
  }

  let injected = MIRRORED_ATTRIBUTES
    .iter()
    .filter_map(|(property, attribute)| {
      let value = block.attribute(property)?;

      match coerce(property, value) {
        Ok(value) => Some(format!(r#" {attribute}="{}""#, escape(&value))),
        Err(error) => {
          tracing::debug!(%error, block = %block.name, "skipping attribute");
          None
        }
      }
    })
    .collect::<String>();

  if injected.is_empty() {
    return None;
  }

  let tag = re::OPENING_TAG_NAME.find(markup)?;

  Some(format!(
    "{}{injected}{}",
    &markup[..tag.end()],
    &markup[tag.end()..]
  ))
}

fn coerce(name: &str, value: &Value) -> Result<String> {
  match value {
    Value::Bool(value) => Ok(value.to_string()),
    Value::Number(value) => Ok(value.to_string()),
    Value::String(value) => Ok(value.clone()),
    Value::Null => Err(Error::AttributeCoercion {
      name: name.to_string(),
      found: "null",
    }),
    Value::Array(_) => Err(Error::AttributeCoercion {
      name: name.to_string(),
      found: "array",
    }),
    Value::Object(_) => Err(Error::AttributeCoercion {
      name: name.to_string(),
      found: "object",
    }),
  }
}

fn escape(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());

  for ch in value.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#039;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      _ => escaped.push(ch),
    }
  }

  escaped
}
