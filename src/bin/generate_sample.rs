use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

const OUTPUT_PATH: &str = "misc/timing.csv";
const RUNS: usize = 10;
const SEED: u64 = 42;

/// Typical seconds per call and relative jitter for each implementation,
/// in the row order the chart expects.
const PROFILES: [(&str, f64, f64); 3] = [
    ("scalar", 2.4e-3, 0.08),
    ("unrolled", 1.1e-3, 0.10),
    ("avx2", 3.5e-4, 0.15),
];

/// splitmix64; plenty for jittering sample timings.
struct Jitter(u64);

impl Jitter {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Standard normal sample (Box-Muller).
    fn normal(&mut self) -> f64 {
        let u1 = self.next_unit().max(f64::MIN_POSITIVE);
        let u2 = self.next_unit();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

/// One row of positive timings, log-normally spread around `typical`.
fn timing_row(rng: &mut Jitter, typical: f64, spread: f64, runs: usize) -> Vec<f64> {
    (0..runs)
        .map(|_| typical * (spread * rng.normal()).exp())
        .collect()
}

/// Write the three timing rows, each ending with a separator like the
/// benchmark output.
fn write_sample<W: Write>(out: W, seed: u64, runs: usize) -> Result<()> {
    let mut rng = Jitter(seed);
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);

    for (name, typical, spread) in PROFILES {
        let fields = timing_row(&mut rng, typical, spread, runs)
            .into_iter()
            .map(|t| format!("{t:e}"))
            .chain(std::iter::once(String::new()));
        writer
            .write_record(fields)
            .with_context(|| format!("writing {name} row"))?;
    }
    writer.flush().context("flushing timing rows")?;
    Ok(())
}

fn main() -> Result<()> {
    let output = Path::new(OUTPUT_PATH);
    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let file = std::fs::File::create(output).with_context(|| format!("creating {OUTPUT_PATH}"))?;
    write_sample(file, SEED, RUNS)?;

    println!("Wrote {} rows of {RUNS} runs to {OUTPUT_PATH}", PROFILES.len());
    Ok(())
}
