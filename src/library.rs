use super::*;

/// Host backed by the media table of a page file. Suppressed script handles
/// are only logged since there is no enqueue queue to remove them from.
#[derive(Debug, Default)]
pub(crate) struct Library {
  media: BTreeMap<u64, MediaDimensions>,
}

impl Library {
  pub(crate) fn new(media: BTreeMap<u64, MediaDimensions>) -> Self {
    Self { media }
  }
}

impl Host for Library {
  fn media_dimensions(&self, attachment_id: u64) -> Option<MediaDimensions> {
    self.media.get(&attachment_id).copied()
  }

  fn suppress_script(&self, handle: &str) {
    tracing::info!(handle, "suppressing script");
  }
}
