use super::*;

const CLOSE_BUTTON: &str = "wp-block-navigation__responsive-container-close";
const CLOSE_WRAPPER: &str = "wp-block-navigation__responsive-close";
const CONTAINER: &str = "wp-block-navigation__responsive-container";
const CONTENT: &str = "wp-block-navigation__responsive-container-content";
const OPEN_BUTTON: &str = "wp-block-navigation__responsive-container-open";
const SUBMENU: &str = "wp-block-navigation-submenu";
const SUBMENU_TOGGLE: &str = "wp-block-navigation-submenu__toggle";

const MODAL_CLASSES: &str = "is-menu-open has-modal-open";

const NAVIGATION_SCRIPT_HANDLE: &str = "wp-block-navigation-view";

const MODAL_ATTRIBUTES: &[&str] = &[
  "aria-expanded",
  "aria-modal",
  "data-micromodal-trigger",
  "data-micromodal-close",
];

/// How the responsive menu is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayMenu {
  Always,
  Mobile,
  Never,
}

impl OverlayMenu {
  fn from_block(block: &Block) -> Self {
    match block.string("overlayMenu") {
      Some("always") => Self::Always,
      Some("never") => Self::Never,
      _ => Self::Mobile,
    }
  }
}

/// Turns the navigation block's script-driven modal and submenus into
/// `amp-lightbox` and `amp-bind` equivalents.
pub(crate) struct NavigationRule;

impl Rule for NavigationRule {
  fn apply(&self, context: &mut BlockContext<'_>) -> Result<Outcome> {
    let fragment = Fragment::parse(context.markup())?;

    let nav = fragment
      .first("nav")
      .ok_or(Error::StructuralMismatch { expected: "nav" })?;

    context.host().suppress_script(NAVIGATION_SCRIPT_HANDLE);

    let block_number = context.session().next_navigation_block();

    let overlay = OverlayMenu::from_block(context.block());

    if overlay != OverlayMenu::Never
      && let Err(error) =
        Self::wrap_in_lightbox(&fragment, &nav, overlay, block_number)
    {
      tracing::debug!(%error, "skipping navigation modal rewrite");
    }

    Self::bind_submenus(&nav, block_number);

    Ok(Outcome::Rewritten(nav.html().to_string()))
  }
}

impl NavigationRule {
  fn bind_buttons(nav: &NodeRef<'_>, lightbox_id: &str) {
    for button in query::find_with_class(nav, "button", &[OPEN_BUTTON]) {
      button.set_attr("on", &format!("tap:{lightbox_id}.open"));
    }

    for button in query::find_with_class(nav, "button", &[CLOSE_BUTTON]) {
      button.set_attr("on", &format!("tap:{lightbox_id}.close"));
    }
  }

  /// Gives every click-to-open submenu outside the modal its own boolean
  /// state and binds its toggle button to flip it.
  fn bind_submenus(nav: &NodeRef<'_>, block_number: usize) {
    let submenus =
      query::find_with_class(nav, "li", &["open-on-click", SUBMENU]);

    for (index, submenu) in submenus.iter().enumerate() {
      if query::has_ancestor(submenu, "amp-lightbox") {
        continue;
      }

      let Some(toggle) =
        query::first_with_class(submenu, "button", &[SUBMENU_TOGGLE])
      else {
        continue;
      };

      let state_id = format!("toggle_{block_number}_{index}");

      toggle.append_html(format!(
        r#"<amp-state id="{state_id}"><script type="application/json">false</script></amp-state>"#
      ));

      toggle.set_attr(
        "on",
        &format!("tap:AMP.setState({{ {state_id}: ! {state_id} }})"),
      );

      toggle.set_attr("aria-expanded", "false");

      toggle.set_attr(
        "data-amp-bind-aria-expanded",
        &format!("{state_id} ? 'true' : 'false'"),
      );
    }
  }

  /// Moves the menu content out of the modal wrappers of the original
  /// container so it renders as a plain menu.
  fn unwrap_content(container: &NodeRef<'_>) {
    let content = query::first_with_class(container, "div", &[CONTENT]);
    let close = query::first_with_class(container, "div", &[CLOSE_WRAPPER]);

    let (Some(content), Some(close)) = (content, close) else {
      return;
    };

    content.remove_attr("id");
    content.remove_from_parent();
    container.append_child(&content);
    close.remove_from_parent();
  }

  fn wrap_in_lightbox<'a>(
    fragment: &'a Fragment,
    nav: &NodeRef<'a>,
    overlay: OverlayMenu,
    block_number: usize,
  ) -> Result {
    let container = query::first_with_class(nav, "div", &[CONTAINER]).ok_or(
      Error::StructuralMismatch {
        expected: "responsive container",
      },
    )?;

    let lightbox_id = container
      .attr("id")
      .map(|id| id.to_string())
      .filter(|id| !id.is_empty())
      .unwrap_or_else(|| format!("wp-block-navigation-modal-{block_number}"));

    container.remove_attr("id");

    let lightbox = fragment.new_element("amp-lightbox");

    lightbox.set_attr("id", &lightbox_id);
    lightbox.set_attr("layout", "nodisplay");
    lightbox.append_html(container.html());

    if let Some(modal) = lightbox.element_children().first() {
      let classes = modal
        .attr("class")
        .map(|class| class.trim().to_string())
        .unwrap_or_default();

      modal.set_attr("class", format!("{classes} {MODAL_CLASSES}").trim());
    }

    nav.append_child(&lightbox);

    if overlay == OverlayMenu::Always {
      container.remove_from_parent();
    } else {
      Self::unwrap_content(&container);
    }

    Self::bind_buttons(nav, &lightbox_id);

    for attribute in MODAL_ATTRIBUTES {
      query::strip_attribute(nav, attribute);
    }

    Ok(())
  }
}
