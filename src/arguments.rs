use super::*;

#[derive(Parser)]
#[command(name = "amp-blocks")]
#[command(about = "Rewrite rendered blocks into AMP-compatible markup", long_about = None)]
pub(crate) struct Arguments {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print the stylesheet caching verdict after recording a day's count
  Monitor {
    /// JSON file holding the day to count series, created when missing
    #[arg(long, value_name = "FILE")]
    series: PathBuf,
    /// Day of the sample as YYYYMMDD
    #[arg(long)]
    day: String,
    /// Number of cache entries created that day
    #[arg(long)]
    count: u64,
    /// Average daily entries above which caching is flagged
    #[arg(long, default_value_t = TransientMonitor::DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Number of most recent days considered
    #[arg(long, default_value_t = TransientMonitor::DEFAULT_SAMPLING_RANGE)]
    sampling_range: usize,
  },
  /// Shadow media dimensions before a filter that strips them
  PreserveDimensions {
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
  },
  /// Transform every block of a page file in one session
  Render {
    #[arg(value_name = "FILE")]
    input: PathBuf,
    #[arg(long)]
    amp_to_amp: bool,
    #[arg(long, default_value = "/")]
    home_url: String,
  },
  /// Copy shadowed media dimensions back
  RestoreDimensions {
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
  },
  /// Transform a single rendered block
  Transform {
    /// Block name, e.g. core/navigation
    #[arg(long)]
    block: String,
    /// Block attributes as a JSON object
    #[arg(long, value_name = "JSON")]
    attributes: Option<String>,
    #[arg(long)]
    amp_to_amp: bool,
    #[arg(long, default_value = "/")]
    home_url: String,
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
  },
  /// Sanitize classic widgets in a full page
  Widgets {
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
  },
}

#[derive(Deserialize)]
struct Page {
  blocks: Vec<RenderedBlock>,
  #[serde(default)]
  media: BTreeMap<u64, MediaDimensions>,
}

#[derive(Deserialize)]
struct RenderedBlock {
  #[serde(flatten)]
  block: Block,
  #[serde(rename = "innerHTML", default)]
  html: String,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    match self.command {
      Command::Monitor {
        series,
        day,
        count,
        threshold,
        sampling_range,
      } => Self::monitor(&series, &day, count, threshold, sampling_range),
      Command::PreserveDimensions { input } => {
        print!("{}", preserve_dimensions(&read_input(input.as_deref())?));
        Ok(())
      }
      Command::Render {
        input,
        amp_to_amp,
        home_url,
      } => Self::render(&input, options(amp_to_amp, home_url)),
      Command::RestoreDimensions { input } => {
        print!("{}", restore_dimensions(&read_input(input.as_deref())?));
        Ok(())
      }
      Command::Transform {
        block,
        attributes,
        amp_to_amp,
        home_url,
        input,
      } => {
        let attributes = match attributes {
          Some(attributes) => serde_json::from_str::<Map<String, Value>>(
            &attributes,
          )
          .context("block attributes must be a JSON object")?,
          None => Map::new(),
        };

        let block = Block {
          name: block,
          attributes,
        };

        let html = read_input(input.as_deref())?;

        let host = Library::default();

        let mut transformer =
          Transformer::new(&host, options(amp_to_amp, home_url));

        print!("{}", transformer.transform(&html, &block));

        Ok(())
      }
      Command::Widgets { input } => {
        let html = read_input(input.as_deref())?;

        let host = Library::default();

        let mut transformer =
          Transformer::new(&host, TransformOptions::default());

        print!("{}", transformer.sanitize_widgets(&html));

        Ok(())
      }
    }
  }

  fn monitor(
    path: &Path,
    day: &str,
    count: u64,
    threshold: f64,
    sampling_range: usize,
  ) -> Result {
    let mut series = if path.exists() {
      let json = fs::read_to_string(path).with_context(|| {
        format!("failed to read series from `{}`", path.display())
      })?;

      serde_json::from_str::<TimeSeries>(&json).with_context(|| {
        format!("failed to parse series in `{}`", path.display())
      })?
    } else {
      TimeSeries::new()
    };

    let verdict = TransientMonitor::new(threshold, sampling_range)
      .process(&mut series, day, count)
      .context("failed to record sample")?;

    fs::write(path, serde_json::to_string_pretty(&series)?).with_context(
      || format!("failed to write series to `{}`", path.display()),
    )?;

    match verdict {
      Verdict::ExceedsThreshold(average) => {
        println!("exceeds threshold: {average:.2} entries/day");
      }
      Verdict::WithinThreshold(average) => {
        println!("within threshold: {average:.2} entries/day");
      }
    }

    Ok(())
  }

  fn render(path: &Path, options: TransformOptions) -> Result {
    let json = fs::read_to_string(path).with_context(|| {
      format!("failed to read page from `{}`", path.display())
    })?;

    let page = serde_json::from_str::<Page>(&json).with_context(|| {
      format!("failed to parse page in `{}`", path.display())
    })?;

    let host = Library::new(page.media);

    let mut transformer = Transformer::new(&host, options);

    let output = page
      .blocks
      .iter()
      .map(|rendered| transformer.transform(&rendered.html, &rendered.block))
      .collect::<String>();

    print!("{output}");

    Ok(())
  }
}

fn options(amp_to_amp: bool, home_url: String) -> TransformOptions {
  TransformOptions::builder()
    .amp_to_amp_linking(amp_to_amp)
    .home_url(home_url)
    .build()
}

fn read_input(path: Option<&Path>) -> Result<String> {
  match path {
    Some(path) => fs::read_to_string(path).with_context(|| {
      format!("failed to read file from `{}`", path.display())
    }),
    None => {
      let mut input = String::new();

      io::stdin()
        .read_to_string(&mut input)
        .context("failed to read standard input")?;

      Ok(input)
    }
  }
}
