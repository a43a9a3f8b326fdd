use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use super::model::{SeriesKind, TimingDataset};
use super::transform::log2_row;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the three timing series from a comma-separated file.
///
/// Layout: no header; line 1 is Scalar, line 2 Unrolled, line 3 AVX2. Rows
/// may have different widths and blank cells (the benchmark leaves a trailing
/// comma), and a blank line is a row with no cells. Anything after row 3 is
/// ignored.
///
/// A file with fewer than three rows yields an empty dataset.
pub fn load_file(path: &Path) -> Result<TimingDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening timing file {}", path.display()))?;
    load_reader(file).with_context(|| format!("loading {}", path.display()))
}

/// Same as [`load_file`] but over any reader.
pub fn load_reader<R: Read>(rdr: R) -> Result<TimingDataset> {
    let rows = read_rows(rdr)?;

    if rows.len() < SeriesKind::ALL.len() {
        warn!(
            "timing file has {} row(s), need {}; plotting empty series",
            rows.len(),
            SeriesKind::ALL.len()
        );
        return Ok(TimingDataset::default());
    }

    Ok(TimingDataset::from_values(
        series_row(&rows[0], SeriesKind::Scalar, 1)?,
        series_row(&rows[1], SeriesKind::Unrolled, 2)?,
        series_row(&rows[2], SeriesKind::Avx2, 3)?,
    ))
}

fn series_row(record: &StringRecord, kind: SeriesKind, row_no: usize) -> Result<Vec<f64>> {
    let values =
        log2_row(record.iter(), row_no).with_context(|| format!("transforming {kind} row"))?;
    debug!("{kind}: {} of {} cells kept", values.len(), record.len());
    Ok(values)
}

// ---------------------------------------------------------------------------
// CSV helpers
// ---------------------------------------------------------------------------

/// One record per line. A blank line is an empty record and still counts as
/// a row; only non-blank lines go through the CSV tokenizer.
fn read_rows<R: Read>(mut rdr: R) -> Result<Vec<StringRecord>> {
    let mut text = String::new();
    rdr.read_to_string(&mut text).context("reading timing rows")?;

    text.lines()
        .enumerate()
        .map(|(i, line)| tokenize_line(line).with_context(|| format!("CSV row {}", i + 1)))
        .collect()
}

fn tokenize_line(line: &str) -> Result<StringRecord> {
    if line.is_empty() {
        return Ok(StringRecord::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(rec) => Ok(rec?),
        None => Ok(StringRecord::new()),
    }
}
