use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

use crate::data::model::SeriesKind;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Start at 210° so the first series is blue.
            let hue = 210.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colour of a series, stable across runs.
pub fn series_color(kind: SeriesKind) -> RGBColor {
    let palette = generate_palette(SeriesKind::ALL.len());
    let idx = SeriesKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(0);
    palette[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn series_colors_are_distinct() {
        let colors: Vec<_> = SeriesKind::ALL.iter().map(|&k| series_color(k)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn palette_is_deterministic() {
        assert_eq!(generate_palette(3), generate_palette(3));
    }
}
