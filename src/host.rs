use super::*;

const PAIRED_QUERY_VAR: &str = "amp";

/// Intrinsic size of a media attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDimensions {
  pub width: u32,
  pub height: u32,
}

/// Services the rewrite rules consult but do not own.
pub trait Host {
  /// Maps a canonical URL to its paired AMP URL.
  fn paired_amp_url(&self, url: &str) -> String {
    add_paired_endpoint(url)
  }

  fn media_dimensions(&self, _attachment_id: u64) -> Option<MediaDimensions> {
    None
  }

  /// Asks the host not to print the given script handle.
  fn suppress_script(&self, _handle: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl Host for NoopHost {}

/// Base that root-relative URLs are resolved against so the `url` crate can
/// edit their query. Only the path onwards is kept.
const RELATIVE_BASE: &str = "https://localhost/";

/// Adds the `amp` query variable to a URL unless it is already present.
#[must_use]
pub fn add_paired_endpoint(url: &str) -> String {
  match Url::parse(url) {
    Ok(mut parsed) => {
      pair(&mut parsed);
      parsed.to_string()
    }
    Err(_) => add_relative_paired_endpoint(url),
  }
}

fn add_relative_paired_endpoint(url: &str) -> String {
  if let Some(authority) = url.strip_prefix("//")
    && let Ok(mut parsed) = Url::parse(&format!("https://{authority}"))
  {
    pair(&mut parsed);
    return format!("//{}", &parsed[Position::BeforeUsername..]);
  }

  if url.starts_with('/')
    && !url.starts_with("//")
    && let Ok(mut parsed) =
      Url::parse(RELATIVE_BASE).and_then(|base| base.join(url))
  {
    pair(&mut parsed);
    return parsed[Position::BeforePath..].to_string();
  }

  add_path_relative_paired_endpoint(url)
}

/// Joining a path-relative URL onto a base would root it, so these are
/// edited as text.
fn add_path_relative_paired_endpoint(url: &str) -> String {
  let (base, fragment) = match url.split_once('#') {
    Some((base, fragment)) => (base, Some(fragment)),
    None => (url, None),
  };

  let already_paired = base.split_once('?').is_some_and(|(_, query)| {
    query
      .split('&')
      .any(|entry| entry.split('=').next() == Some(PAIRED_QUERY_VAR))
  });

  let mut paired = base.to_string();

  if !already_paired {
    paired.push(if base.contains('?') { '&' } else { '?' });
    paired.push_str(PAIRED_QUERY_VAR);
    paired.push_str("=1");
  }

  if let Some(fragment) = fragment {
    paired.push('#');
    paired.push_str(fragment);
  }

  paired
}

fn pair(url: &mut Url) {
  if !url.query_pairs().any(|(name, _)| name == PAIRED_QUERY_VAR) {
    url.query_pairs_mut().append_pair(PAIRED_QUERY_VAR, "1");
  }
}
