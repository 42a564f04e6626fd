use {
  action::add_action,
  block_context::BlockContext,
  context::Context,
  dom_query::{Document, NodeRef, Selection},
  fragment::Fragment,
  pipeline::Pipeline,
  regex::{Captures, Regex},
  rule::{
    ArchivesRule, CategoriesRule, FileRule, MediaPlaceholderRule,
    NavigationRule, Rule, VideoRule, bind_archives_dropdown,
  },
  serde::{Deserialize, Serialize},
  serde_json::{Map, Value},
  stage::{
    ArchivesWidgetsStage, CategoriesWidgetsStage, Stage, TextWidgetsStage,
  },
  std::{borrow::Cow, collections::BTreeMap, iter, sync::LazyLock},
  url::{Position, Url},
};

pub use crate::{
  block::{Block, BlockKind},
  dimensions::{preserve_dimensions, restore_dimensions},
  error::Error,
  host::{Host, MediaDimensions, NoopHost, add_paired_endpoint},
  monitor::{TimeSeries, TransientMonitor, Verdict},
  options::{TransformOptions, TransformOptionsBuilder},
  rule::Outcome,
  session::Session,
  transformer::Transformer,
};

#[cfg(test)]
macro_rules! test {
  (
    name: $name:ident,
    block: $block:expr,
    content: $content:expr,
    expected: $expected:expr $(,)?
  ) => {
    #[test]
    fn $name() {
      let mut transformer =
        Transformer::new(&NoopHost, TransformOptions::default());

      pretty_assertions::assert_eq!(
        transformer.transform($content, &$block),
        $expected
      );
    }
  };
}

mod action;
mod attributes;
mod block;
mod block_context;
mod context;
mod dimensions;
mod error;
mod fragment;
mod host;
mod monitor;
mod options;
mod pipeline;
mod query;
mod re;
mod rule;
mod session;
mod stage;
mod transformer;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
