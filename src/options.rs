#[derive(Debug, Clone)]
pub struct TransformOptions {
  /// Rewrite archive dropdown option values to their paired AMP URLs.
  pub amp_to_amp_linking: bool,
  /// Action of the form wrapped around a bare categories dropdown.
  pub home_url: String,
}

impl Default for TransformOptions {
  fn default() -> Self {
    Self {
      amp_to_amp_linking: false,
      home_url: "/".to_string(),
    }
  }
}

impl TransformOptions {
  #[must_use]
  pub fn builder() -> TransformOptionsBuilder {
    TransformOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct TransformOptionsBuilder {
  inner: TransformOptions,
}

impl TransformOptionsBuilder {
  #[must_use]
  pub fn amp_to_amp_linking(self, amp_to_amp_linking: bool) -> Self {
    Self {
      inner: TransformOptions {
        amp_to_amp_linking,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> TransformOptions {
    self.inner
  }

  #[must_use]
  pub fn home_url(self, home_url: impl Into<String>) -> Self {
    Self {
      inner: TransformOptions {
        home_url: home_url.into(),
        ..self.inner
      },
    }
  }
}
