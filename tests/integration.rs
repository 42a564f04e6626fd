use {
  amp_blocks::{
    Block, Host, MediaDimensions, NoopHost, Outcome, TransformOptions,
    Transformer, preserve_dimensions, restore_dimensions,
  },
  dom_query::Document,
  pretty_assertions::assert_eq,
  serde::Deserialize,
  std::{collections::BTreeMap, fs, path::PathBuf},
};

macro_rules! test {
  ($name:ident) => {
    paste::paste! {
      #[test]
      fn [<fixture_ $name>]() {
        Fixture::load(stringify!($name)).run();
      }
    }
  };
}

#[derive(Deserialize)]
struct FixtureBlock {
  #[serde(flatten)]
  block: Block,
  #[serde(default)]
  media: BTreeMap<u64, MediaDimensions>,
}

impl Host for FixtureBlock {
  fn media_dimensions(&self, attachment_id: u64) -> Option<MediaDimensions> {
    self.media.get(&attachment_id).copied()
  }
}

struct Fixture {
  block: FixtureBlock,
  expected_html: String,
  source_html: String,
}

impl Fixture {
  fn load(name: &str) -> Self {
    let base_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
      .join("tests/fixtures")
      .join(name);

    let block = fs::read_to_string(base_path.join("block.json"))
      .expect("Failed to read block.json");

    Self {
      block: serde_json::from_str(&block).expect("Failed to parse block JSON"),
      expected_html: fs::read_to_string(base_path.join("expected.html"))
        .expect("Failed to read expected.html"),
      source_html: fs::read_to_string(base_path.join("source.html"))
        .expect("Failed to read source.html"),
    }
  }

  fn run(&self) {
    let mut transformer =
      Transformer::new(&self.block, TransformOptions::default());

    let output = transformer.transform(&self.source_html, &self.block.block);

    assert_eq!(output.trim_end(), self.expected_html.trim_end());
  }
}

test!(file_pdf_preview);
test!(gallery_carousel);
test!(image_placeholder);
test!(shortcode_untouched);
test!(video_dimensions);
test!(video_without_attachment);

const NAVIGATION: &str = concat!(
  r#"<nav class="wp-block-navigation">"#,
  r#"<div class="wp-block-navigation__responsive-container" id="modal-1">"#,
  r#"<button class="wp-block-navigation__responsive-container-open">Open</button>"#,
  r#"<div class="wp-block-navigation__responsive-container-content">"#,
  r#"<ul><li class="open-on-click wp-block-navigation-submenu">"#,
  r#"<button class="wp-block-navigation-submenu__toggle">More</button>"#,
  r#"<ul><li><a href="/a/">A</a></li></ul></li></ul>"#,
  r#"</div></div></nav>"#,
);

fn navigation(overlay_menu: Option<&str>) -> Document {
  let mut block = Block::new("core/navigation");

  if let Some(overlay_menu) = overlay_menu {
    block = block.with_attribute("overlayMenu", overlay_menu);
  }

  let output = Transformer::new(&NoopHost, TransformOptions::default())
    .transform(NAVIGATION, &block);

  Document::from(output.as_str())
}

#[test]
fn navigation_default_mode_wraps_modal_clone() {
  let document = navigation(None);

  let lightbox = document.select(r#"amp-lightbox[id="modal-1"]"#);

  assert_eq!(lightbox.length(), 1);
  assert_eq!(lightbox.attr("layout").as_deref(), Some("nodisplay"));

  let modal = lightbox.children().first();

  assert!(modal.has_class("wp-block-navigation__responsive-container"));
  assert!(modal.has_class("is-menu-open"));
  assert!(modal.has_class("has-modal-open"));

  let open_buttons =
    document.select("button.wp-block-navigation__responsive-container-open");

  assert!(open_buttons.length() >= 1);

  for button in open_buttons.nodes() {
    assert_eq!(
      button.attr("on").map(|on| on.to_string()),
      Some("tap:modal-1.open".to_string())
    );
  }
}

#[test]
fn navigation_always_mode_keeps_only_modal_copy() {
  let document = navigation(Some("always"));

  assert_eq!(document.select("amp-lightbox").length(), 1);
  assert_eq!(document.select(r#"amp-lightbox[id="modal-1"]"#).length(), 1);

  for container in document
    .select("div.wp-block-navigation__responsive-container")
    .nodes()
  {
    assert_eq!(
      container.parent().and_then(|parent| parent.node_name()).as_deref(),
      Some("amp-lightbox")
    );
  }
}

#[test]
fn navigation_never_mode_only_binds_submenus() {
  let document = navigation(Some("never"));

  assert!(document.select("amp-lightbox").is_empty());

  assert_eq!(
    document
      .select("div.wp-block-navigation__responsive-container")
      .attr("id")
      .as_deref(),
    Some("modal-1")
  );

  assert_eq!(document.select(r#"amp-state[id="toggle_1_0"]"#).length(), 1);

  assert_eq!(
    document
      .select("button.wp-block-navigation-submenu__toggle")
      .attr("on")
      .as_deref(),
    Some("tap:AMP.setState({ toggle_1_0: ! toggle_1_0 })")
  );
}

#[test]
fn unknown_blocks_only_gain_spliced_attributes() {
  let mut transformer =
    Transformer::new(&NoopHost, TransformOptions::default());

  let markup = r#"<p class="has-text-align-center">Hello <em>world</em></p>"#;

  assert_eq!(
    transformer.transform(markup, &Block::new("core/paragraph")),
    markup
  );

  assert_eq!(
    transformer.transform(
      markup,
      &Block::new("core/paragraph").with_attribute("ampLayout", "nodisplay")
    ),
    r#"<p data-amp-layout="nodisplay" class="has-text-align-center">Hello <em>world</em></p>"#
  );

  assert_eq!(
    transformer
      .rewrite(markup, &Block::new("my-plugin/widget"))
      .unwrap(),
    Outcome::Unchanged
  );
}

#[test]
fn media_without_source_is_dropped() {
  let mut transformer =
    Transformer::new(&NoopHost, TransformOptions::default());

  for (name, markup) in [
    ("core/image", r#"<figure class="wp-block-image"></figure>"#),
    ("core/audio", "<figure><audio controls></audio></figure>"),
  ] {
    assert_eq!(transformer.transform(markup, &Block::new(name)), "");
  }
}

#[test]
fn categories_forms_are_numbered_per_session() {
  let markup = concat!(
    r#"<div class="wp-block-categories"><select name="cat" id="cat">"#,
    r#"<option value="-1">Select Category</option></select>"#,
    r#"<script>function onCatChange() {}</script></div>"#,
  );

  let block = Block::new("core/categories");

  let mut transformer =
    Transformer::new(&NoopHost, TransformOptions::default());

  let ids = (0..2)
    .map(|_| {
      let output = transformer.transform(markup, &block);
      let document = Document::from(output.as_str());
      document.select("form").attr("id").map(|id| id.to_string())
    })
    .collect::<Vec<Option<String>>>();

  assert_eq!(
    ids,
    vec![
      Some("wp-block-categories-dropdown-1-form".to_string()),
      Some("wp-block-categories-dropdown-2-form".to_string()),
    ]
  );

  assert_eq!(transformer.session().categories_dropdowns(), 2);
}

#[test]
fn dimensions_survive_stripping_filter() {
  let source = concat!(
    r#"<p>intro</p>"#,
    r#"<iframe src="https://example.com/a" width="560" height="315"></iframe>"#,
    r#"<video src="b.mp4" width="640"></video>"#,
    r#"<embed src="c.swf">"#,
  );

  let preserved = preserve_dimensions(source);

  assert_eq!(preserve_dimensions(&preserved), preserved);

  let stripped = preserved
    .replace(r#" width="560""#, "")
    .replace(r#" height="315""#, "")
    .replace(r#" width="640""#, "");

  let document = Document::from(restore_dimensions(&stripped).as_str());

  let iframe = document.select("iframe");
  let video = document.select("video");

  assert_eq!(iframe.attr("width").as_deref(), Some("560"));
  assert_eq!(iframe.attr("height").as_deref(), Some("315"));
  assert_eq!(video.attr("width").as_deref(), Some("640"));
  assert!(video.attr("height").is_none());
  assert!(document.select("embed").attr("width").is_none());

  assert!(
    document
      .select("[data-preserved-width], [data-preserved-height]")
      .is_empty()
  );
}
