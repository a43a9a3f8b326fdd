use std::fmt;

// ---------------------------------------------------------------------------
// SeriesKind – which implementation a row of timings belongs to
// ---------------------------------------------------------------------------

/// The three measured implementations, in the row order of the timing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeriesKind {
    Scalar,
    Unrolled,
    Avx2,
}

impl SeriesKind {
    /// All kinds in file row order.
    pub const ALL: [SeriesKind; 3] = [SeriesKind::Scalar, SeriesKind::Unrolled, SeriesKind::Avx2];

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::Scalar => "Scalar",
            SeriesKind::Unrolled => "Unrolled",
            SeriesKind::Avx2 => "AVX2",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Series – one row of transformed samples
// ---------------------------------------------------------------------------

/// One named sequence of log2-transformed timings.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    /// log2(seconds), one per non-blank token of the source row.
    pub values: Vec<f64>,
}

impl Series {
    pub fn empty(kind: SeriesKind) -> Self {
        Series {
            kind,
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(run index, value)` pairs with 1-based run indices.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values.iter().enumerate().map(|(i, &v)| (i + 1, v))
    }
}

// ---------------------------------------------------------------------------
// TimingDataset – the three series loaded from one file
// ---------------------------------------------------------------------------

/// Scalar, Unrolled and AVX2 series. Lengths are not required to match.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingDataset {
    pub scalar: Series,
    pub unrolled: Series,
    pub avx2: Series,
}

impl Default for TimingDataset {
    fn default() -> Self {
        TimingDataset {
            scalar: Series::empty(SeriesKind::Scalar),
            unrolled: Series::empty(SeriesKind::Unrolled),
            avx2: Series::empty(SeriesKind::Avx2),
        }
    }
}

impl TimingDataset {
    pub fn from_values(scalar: Vec<f64>, unrolled: Vec<f64>, avx2: Vec<f64>) -> Self {
        TimingDataset {
            scalar: Series {
                kind: SeriesKind::Scalar,
                values: scalar,
            },
            unrolled: Series {
                kind: SeriesKind::Unrolled,
                values: unrolled,
            },
            avx2: Series {
                kind: SeriesKind::Avx2,
                values: avx2,
            },
        }
    }

    /// Number of runs on the horizontal axis. Driven by the AVX2 series only.
    pub fn run_count(&self) -> usize {
        self.avx2.len()
    }

    /// Run indices `1..=N`.
    pub fn run_indices(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.run_count()
    }

    pub fn series(&self) -> [&Series; 3] {
        [&self.scalar, &self.unrolled, &self.avx2]
    }

    /// Whether all three series are empty.
    pub fn is_empty(&self) -> bool {
        self.series().iter().all(|s| s.is_empty())
    }

    /// Chart title; embeds the run count.
    pub fn title(&self) -> String {
        format!("Performance Comparison Over {} Runs", self.run_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_indices_follow_avx2_length() {
        let ds = TimingDataset::from_values(vec![1.0; 5], vec![2.0; 2], vec![3.0; 3]);
        assert_eq!(ds.run_count(), 3);
        assert_eq!(ds.run_indices().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_dataset_has_no_runs() {
        let ds = TimingDataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.run_count(), 0);
        assert_eq!(ds.run_indices().count(), 0);
        assert_eq!(ds.title(), "Performance Comparison Over 0 Runs");
    }

    #[test]
    fn points_are_one_based() {
        let ds = TimingDataset::from_values(vec![0.5, 1.5], vec![], vec![]);
        let pts: Vec<_> = ds.scalar.points().collect();
        assert_eq!(pts, vec![(1, 0.5), (2, 1.5)]);
    }

    #[test]
    fn series_are_in_row_order() {
        let ds = TimingDataset::default();
        let kinds: Vec<_> = ds.series().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SeriesKind::ALL.to_vec());
        assert_eq!(SeriesKind::Avx2.to_string(), "AVX2");
    }
}
