use super::*;

/// A rendered block as handed over by the host: its name and attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
  #[serde(rename = "blockName")]
  pub name: String,
  #[serde(rename = "attrs", default)]
  pub attributes: Map<String, Value>,
}

/// The block kinds that get special treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
  Archives,
  Audio,
  Categories,
  File,
  Image,
  Navigation,
  Shortcode,
  Video,
  Other,
}

impl BlockKind {
  #[must_use]
  pub fn from_name(name: &str) -> Self {
    match name {
      "core/archives" => Self::Archives,
      "core/audio" => Self::Audio,
      "core/categories" => Self::Categories,
      "core/file" => Self::File,
      "core/image" => Self::Image,
      "core/navigation" => Self::Navigation,
      "core/shortcode" => Self::Shortcode,
      "core/video" => Self::Video,
      _ => Self::Other,
    }
  }
}

impl Block {
  pub(crate) fn attachment_id(&self) -> Option<u64> {
    let id = match self.attribute("id")? {
      Value::Number(number) => number.as_u64(),
      Value::String(value) => value.trim().parse().ok(),
      _ => None,
    };

    id.filter(|id| *id > 0)
  }

  pub(crate) fn attribute(&self, name: &str) -> Option<&Value> {
    self.attributes.get(name)
  }

  /// Truthiness of an attribute, where missing, `null`, `false`, `0`, `""`,
  /// `"0"` and empty collections all count as unset.
  pub(crate) fn flag(&self, name: &str) -> bool {
    match self.attribute(name) {
      None | Some(Value::Null) => false,
      Some(Value::Bool(value)) => *value,
      Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
      Some(Value::String(value)) => !value.is_empty() && value != "0",
      Some(Value::Array(items)) => !items.is_empty(),
      Some(Value::Object(entries)) => !entries.is_empty(),
    }
  }

  #[must_use]
  pub fn kind(&self) -> BlockKind {
    BlockKind::from_name(&self.name)
  }

  #[must_use]
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      attributes: Map::new(),
    }
  }

  pub(crate) fn string(&self, name: &str) -> Option<&str> {
    self.attribute(name).and_then(Value::as_str)
  }

  #[must_use]
  pub fn with_attribute(
    mut self,
    name: impl Into<String>,
    value: impl Into<Value>,
  ) -> Self {
    self.attributes.insert(name.into(), value.into());
    self
  }
}
