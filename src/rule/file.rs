use super::*;

const FILE_SCRIPT_HANDLE: &str = "wp-block-library-file";

const PREVIEW_STYLE: &str = r#"<style id="amp-wp-file-block">.wp-block-file > .wp-block-file__embed { width:100% }</style>"#;

/// Base used to resolve relative `href`s so only their path is inspected.
const RELATIVE_BASE: &str = "https://localhost/";

/// Makes PDF previews take the full width of their container.
pub(crate) struct FileRule;

impl Rule for FileRule {
  fn apply(&self, context: &mut BlockContext<'_>) -> Result<Outcome> {
    let block = context.block();

    if !block.flag("displayPreview") {
      return Ok(Outcome::Unchanged);
    }

    let Some(href) = block.string("href").filter(|href| !href.is_empty())
    else {
      return Ok(Outcome::Unchanged);
    };

    if !Self::href_path(href)?.ends_with(".pdf") {
      return Ok(Outcome::Unchanged);
    }

    context.host().suppress_script(FILE_SCRIPT_HANDLE);

    let markup = context.markup();

    let Some(position) = markup.find("</div>") else {
      return Ok(Outcome::Unchanged);
    };

    Ok(Outcome::Rewritten(format!(
      "{}{PREVIEW_STYLE}{}",
      &markup[..position],
      &markup[position..]
    )))
  }
}

impl FileRule {
  fn href_path(href: &str) -> Result<String> {
    let url = match Url::parse(href) {
      Ok(url) => url,
      Err(url::ParseError::RelativeUrlWithoutBase) => {
        Url::parse(RELATIVE_BASE)?.join(href)?
      }
      Err(error) => return Err(error.into()),
    };

    Ok(url.path().to_string())
  }
}
