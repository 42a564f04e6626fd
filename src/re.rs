use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new(concat!("^", $pat, "$")).unwrap())
  };
}

pub(crate) static DAY_KEY: LazyLock<Regex> = re!(r"\d{8}");

pub(crate) static DIMENSION_HEIGHT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"\sheight="(\d+)""#).unwrap());

pub(crate) static DIMENSION_WIDTH: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"\swidth="(\d+)""#).unwrap());

pub(crate) static MEDIA_OPENING_TAG: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)<(?:video|iframe|object|embed)\s[^>]*>").unwrap()
});

pub(crate) static MEDIA_SOURCE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"src=|<source").unwrap());

pub(crate) static OPENING_TAG_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"<\w+").unwrap());

pub(crate) static VIDEO_OPENING: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"<video\s").unwrap());
