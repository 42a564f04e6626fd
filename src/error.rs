#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("block attribute `{name}` has unsupported value type {found}")]
  AttributeCoercion { name: String, found: &'static str },
  #[error("invalid day key `{0}`; expected YYYYMMDD")]
  InvalidDay(String),
  #[error("invalid url: {source}")]
  InvalidUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("failed to parse markup fragment")]
  Parse,
  #[error("expected {expected} not found in fragment")]
  StructuralMismatch { expected: &'static str },
}
