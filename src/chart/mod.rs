//! Chart layer: draws a [`TimingDataset`] and writes it out as an image.

pub mod plot;

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use plotters::prelude::*;

use crate::data::model::TimingDataset;
use plot::{draw_chart, ChartStyle};

/// Render `dataset` to a raster image at `path`, replacing any existing file.
///
/// The image format follows the file extension.
pub fn save_image(
    dataset: &TimingDataset,
    path: &Path,
    size: (u32, u32),
    style: &ChartStyle,
) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw_chart(&root, dataset, style).context("drawing chart")?;
    root.present()
        .with_context(|| format!("writing chart to {}", path.display()))?;

    info!(
        "wrote {}x{} chart of {} run(s) to {}",
        size.0,
        size.1,
        dataset.run_count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_png_of_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("img.png");
        let ds = TimingDataset::from_values(
            vec![-9.0, -9.5],
            vec![-10.0, -10.2],
            vec![-12.0, -12.1],
        );

        save_image(&ds, &out, (1000, 600), &ChartStyle::default()).unwrap();

        let img = image::open(&out).unwrap();
        assert_eq!((img.width(), img.height()), (1000, 600));
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("img.png");
        std::fs::write(&out, b"stale").unwrap();

        save_image(&TimingDataset::default(), &out, (400, 300), &ChartStyle::default()).unwrap();

        let img = image::open(&out).unwrap();
        assert_eq!((img.width(), img.height()), (400, 300));
    }

    #[test]
    fn unwritable_destination_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("img.png");

        let err = save_image(&TimingDataset::default(), &out, (400, 300), &ChartStyle::default());
        assert!(err.is_err());
        assert!(!out.exists());
    }
}
