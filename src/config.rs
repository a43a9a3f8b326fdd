use std::path::PathBuf;

/// Where the benchmark leaves its timings.
pub const DEFAULT_INPUT: &str = "misc/timing.csv";
/// Where the chart is written. Overwritten on every run.
pub const DEFAULT_OUTPUT: &str = "misc/img.png";

/// Fixed run settings. There are no flags; `main` always uses `default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Figure size in pixels (10×6 in at 100 dpi).
    pub size: (u32, u32),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            size: (1000, 600),
        }
    }
}
