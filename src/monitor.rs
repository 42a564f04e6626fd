use super::*;

/// Daily counts of stylesheet cache entries, keyed by `YYYYMMDD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries(BTreeMap<String, u64>);

impl TimeSeries {
  #[must_use]
  pub fn get(&self, day: &str) -> Option<u64> {
    self.0.get(day).copied()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Days in chronological order with their counts.
  pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
    self.0.iter().map(|(day, count)| (day.as_str(), *count))
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Mean of the samples with the single highest one discarded, so one
  /// burst day does not trip the threshold on its own.
  fn trimmed_average(&self) -> f64 {
    if self.0.len() < 2 {
      return 0.0;
    }

    let total = self
      .0
      .values()
      .map(|count| u128::from(*count))
      .sum::<u128>();
    let highest = self.0.values().max().copied().unwrap_or_default();

    (total - u128::from(highest)) as f64 / (self.0.len() - 1) as f64
  }

  fn truncate(&mut self, days: usize) {
    while self.0.len() > days {
      self.0.pop_first();
    }
  }
}

impl FromIterator<(String, u64)> for TimeSeries {
  fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
  ExceedsThreshold(f64),
  WithinThreshold(f64),
}

impl Verdict {
  #[must_use]
  pub fn average(self) -> f64 {
    match self {
      Self::ExceedsThreshold(average) | Self::WithinThreshold(average) => {
        average
      }
    }
  }

  #[must_use]
  pub fn exceeds_threshold(self) -> bool {
    matches!(self, Self::ExceedsThreshold(_))
  }
}

/// Watches how many stylesheet cache entries a site creates per day and
/// flags sites whose styles vary so much that caching them stops paying off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientMonitor {
  sampling_range: usize,
  threshold: f64,
}

impl Default for TransientMonitor {
  fn default() -> Self {
    Self {
      sampling_range: Self::DEFAULT_SAMPLING_RANGE,
      threshold: Self::DEFAULT_THRESHOLD,
    }
  }
}

impl TransientMonitor {
  pub const DEFAULT_SAMPLING_RANGE: usize = 14;
  pub const DEFAULT_THRESHOLD: f64 = 50.0;

  /// Non-positive values fall back to the defaults.
  #[must_use]
  pub fn new(threshold: f64, sampling_range: usize) -> Self {
    Self {
      sampling_range: if sampling_range == 0 {
        Self::DEFAULT_SAMPLING_RANGE
      } else {
        sampling_range
      },
      threshold: if threshold.is_finite() && threshold > 0.0 {
        threshold
      } else {
        Self::DEFAULT_THRESHOLD
      },
    }
  }

  /// Records `count` for `day`, drops samples older than the sampling range
  /// and judges the remaining window.
  pub fn process(
    &self,
    series: &mut TimeSeries,
    day: &str,
    count: u64,
  ) -> Result<Verdict> {
    if !re::DAY_KEY.is_match(day) {
      return Err(Error::InvalidDay(day.to_string()));
    }

    series.0.insert(day.to_string(), count);
    series.truncate(self.sampling_range);

    let average = series.trimmed_average();

    tracing::trace!(day, count, average, "sampled stylesheet cache entries");

    if average > 0.0 && average > self.threshold {
      tracing::debug!(
        average,
        threshold = self.threshold,
        "stylesheet caching exceeds threshold"
      );

      return Ok(Verdict::ExceedsThreshold(average));
    }

    Ok(Verdict::WithinThreshold(average))
  }

  #[must_use]
  pub fn sampling_range(&self) -> usize {
    self.sampling_range
  }

  #[must_use]
  pub fn threshold(&self) -> f64 {
    self.threshold
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, serde_json::json};

  fn series(samples: &[(&str, u64)]) -> TimeSeries {
    samples
      .iter()
      .map(|(day, count)| (day.to_string(), *count))
      .collect()
  }

  #[test]
  fn single_sample_averages_to_zero() {
    let mut series = TimeSeries::new();

    assert_eq!(
      TransientMonitor::default()
        .process(&mut series, "20261001", 500)
        .unwrap(),
      Verdict::WithinThreshold(0.0)
    );
  }

  #[test]
  fn highest_sample_is_discarded() {
    let mut series = series(&[("20261001", 10), ("20261002", 1000)]);

    let verdict = TransientMonitor::default()
      .process(&mut series, "20261003", 30)
      .unwrap();

    assert_eq!(verdict, Verdict::WithinThreshold(20.0));
  }

  #[test]
  fn sustained_volume_exceeds_threshold() {
    let mut series = series(&[("20261001", 60), ("20261002", 80)]);

    let verdict = TransientMonitor::default()
      .process(&mut series, "20261003", 70)
      .unwrap();

    assert_eq!(verdict, Verdict::ExceedsThreshold(65.0));
    assert!(verdict.exceeds_threshold());
  }

  #[test]
  fn huge_counts_do_not_overflow() {
    let monitor = TransientMonitor::default();

    let mut saturated = series(&[("20260101", u64::MAX)]);

    assert_eq!(
      monitor.process(&mut saturated, "20260102", 5).unwrap(),
      Verdict::WithinThreshold(5.0)
    );

    let mut sustained =
      series(&[("20260101", u64::MAX), ("20260102", u64::MAX)]);

    let verdict = monitor.process(&mut sustained, "20260103", 5).unwrap();

    assert_eq!(verdict.average(), (u64::MAX as f64 + 5.0) / 2.0);
    assert!(verdict.exceeds_threshold());
  }

  #[test]
  fn window_keeps_newest_days() {
    let mut series = series(&[
      ("20261001", 1),
      ("20261002", 2),
      ("20261003", 3),
    ]);

    TransientMonitor::new(10.0, 2)
      .process(&mut series, "20261004", 4)
      .unwrap();

    assert_eq!(
      series.iter().map(|(day, _)| day).collect::<Vec<&str>>(),
      vec!["20261003", "20261004"]
    );
  }

  #[test]
  fn same_day_overwrites_count() {
    let mut series = TimeSeries::new();
    let monitor = TransientMonitor::default();

    monitor.process(&mut series, "20261001", 3).unwrap();
    monitor.process(&mut series, "20261001", 9).unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series.get("20261001"), Some(9));
  }

  #[test]
  fn malformed_day_is_rejected() {
    let mut series = TimeSeries::new();

    assert!(matches!(
      TransientMonitor::default().process(&mut series, "2026-10-01", 1),
      Err(Error::InvalidDay(day)) if day == "2026-10-01"
    ));
    assert!(series.is_empty());
  }

  #[test]
  fn non_positive_settings_fall_back_to_defaults() {
    let monitor = TransientMonitor::new(-1.0, 0);

    assert_eq!(monitor, TransientMonitor::default());
    assert_eq!(TransientMonitor::new(f64::NAN, 3).threshold(), 50.0);
    assert_eq!(TransientMonitor::new(5.0, 3).sampling_range(), 3);
  }

  #[test]
  fn series_serializes_as_object() {
    let series = series(&[("20261002", 4), ("20261001", 7)]);

    assert_eq!(
      serde_json::to_value(&series).unwrap(),
      json!({ "20261001": 7, "20261002": 4 })
    );

    assert_eq!(
      serde_json::from_value::<TimeSeries>(json!({
        "20261001": 7,
        "20261002": 4
      }))
      .unwrap(),
      series
    );
  }
}
