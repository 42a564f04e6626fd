use {
  amp_blocks::{
    Block, Host, MediaDimensions, TimeSeries, TransformOptions,
    TransientMonitor, Transformer, Verdict, preserve_dimensions,
    restore_dimensions,
  },
  anyhow::Context,
  arguments::Arguments,
  clap::{Parser, Subcommand},
  library::Library,
  serde::Deserialize,
  serde_json::{Map, Value},
  std::{
    collections::BTreeMap,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
  },
  tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
  },
};

mod arguments;
mod library;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
