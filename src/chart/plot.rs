use anyhow::Result;
use log::warn;
use plotters::coord::Shift;
use plotters::element::ComposedElement;
use plotters::prelude::*;

use crate::color::series_color;
use crate::data::model::{Series, SeriesKind, TimingDataset};

pub const X_LABEL: &str = "Run Number";
pub const Y_LABEL: &str = "Log(Time (seconds))";

// ---------------------------------------------------------------------------
// Chart style
// ---------------------------------------------------------------------------

/// Font sizes and stroke geometry of the comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub font: &'static str,
    pub title_size: u32,
    pub axis_desc_size: u32,
    pub tick_size: u32,
    pub legend_size: u32,
    pub marker_size: i32,
    pub line_width: u32,
    pub margin: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            font: "sans-serif",
            title_size: 28,
            axis_desc_size: 20,
            tick_size: 15,
            legend_size: 16,
            marker_size: 5,
            line_width: 2,
            margin: 20,
        }
    }
}

// ---------------------------------------------------------------------------
// Chart rendering
// ---------------------------------------------------------------------------

/// Draw the Scalar / Unrolled / AVX2 comparison onto `root`.
///
/// The horizontal axis spans run indices `1..=N` with N the AVX2 length.
/// Points of longer series past N are dropped (with a warning); shorter
/// series just end early. Non-finite values are not drawn.
pub fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    dataset: &TimingDataset,
    style: &ChartStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let n = *dataset.run_indices().end();
    let plotted: Vec<(SeriesKind, Vec<(f64, f64)>)> = dataset
        .series()
        .iter()
        .map(|s| (s.kind, visible_points(s, n)))
        .collect();

    let (x_min, x_max) = x_bounds(n);
    let (y_min, y_max) = y_bounds(plotted.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.1)));

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(dataset.title(), (style.font, style.title_size))
        .margin(style.margin)
        .x_label_area_size(55)
        .y_label_area_size(75)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style((style.font, style.axis_desc_size))
        .label_style((style.font, style.tick_size))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .x_label_formatter(&run_label)
        .y_label_formatter(&|v| format!("{v:.1}"))
        .draw()?;

    for (kind, points) in &plotted {
        let kind = *kind;
        let color = series_color(kind);
        let fill = color.filled();
        let size = style.marker_size;

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(style.line_width),
            ))?
            .label(kind.label())
            .legend(move |(x, y)| legend_glyph::<DB>(kind, (x, y), size, color));

        match kind {
            SeriesKind::Scalar => {
                chart.draw_series(points.iter().map(|&p| TriangleMarker::new(p, size, fill)))?;
            }
            SeriesKind::Unrolled => {
                chart.draw_series(points.iter().map(|&p| {
                    EmptyElement::at(p) + Rectangle::new([(-size, -size), (size, size)], fill)
                }))?;
            }
            SeriesKind::Avx2 => {
                chart.draw_series(points.iter().map(|&p| Circle::new(p, size, fill)))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(0.4))
        .label_font((style.font, style.legend_size))
        .draw()?;

    Ok(())
}

/// Line segment through the series marker, as shown in the legend.
fn legend_glyph<DB: DrawingBackend>(
    kind: SeriesKind,
    at: (i32, i32),
    size: i32,
    color: RGBColor,
) -> ComposedElement<(i32, i32), DB, PathElement<(i32, i32)>, Polygon<(i32, i32)>> {
    let line = PathElement::new(vec![(0, 0), (24, 0)], color.stroke_width(2));
    let outline = marker_outline(kind, (12, 0), size);
    EmptyElement::at(at) + line + Polygon::new(outline, color.filled())
}

/// Vertices of a marker centred on `c`, in pixels.
fn marker_outline(kind: SeriesKind, c: (i32, i32), size: i32) -> Vec<(i32, i32)> {
    let (cx, cy) = c;
    match kind {
        SeriesKind::Scalar => vec![(cx, cy - size), (cx - size, cy + size), (cx + size, cy + size)],
        SeriesKind::Unrolled => vec![
            (cx - size, cy - size),
            (cx + size, cy - size),
            (cx + size, cy + size),
            (cx - size, cy + size),
        ],
        SeriesKind::Avx2 => (0..16)
            .map(|i| {
                let a = i as f64 * std::f64::consts::TAU / 16.0;
                (
                    cx + (a.cos() * size as f64).round() as i32,
                    cy + (a.sin() * size as f64).round() as i32,
                )
            })
            .collect(),
    }
}

/// Points of `series` that fall on run indices `1..=n`, as chart coordinates.
pub fn visible_points(series: &Series, n: usize) -> Vec<(f64, f64)> {
    if series.len() > n {
        warn!(
            "{} has {} points but only {} runs are plotted; dropping {}",
            series.kind,
            series.len(),
            n,
            series.len() - n
        );
    }
    series
        .points()
        .take(n)
        .filter(|(_, v)| v.is_finite())
        .map(|(i, v)| (i as f64, v))
        .collect()
}

/// Horizontal range: half a run of padding either side of `1..=n`.
pub fn x_bounds(n: usize) -> (f64, f64) {
    if n == 0 {
        (0.0, 1.0)
    } else {
        (0.5, n as f64 + 0.5)
    }
}

/// Vertical range over the plotted values with 5% padding.
pub fn y_bounds<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    let span = hi - lo;
    if span < f64::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = span * 0.05;
    (lo - pad, hi + pad)
}

/// Tick label for the run axis; only whole runs are labelled.
fn run_label(x: &f64) -> String {
    if x.fract().abs() < 1e-9 {
        format!("{x:.0}")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn render_svg(ds: &TimingDataset) -> String {
        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, (1000, 600)).into_drawing_area();
            draw_chart(&root, ds, &ChartStyle::default()).unwrap();
            root.present().unwrap();
        }
        buf
    }

    #[test]
    fn svg_has_title_axes_and_legend() {
        let ds =
            TimingDataset::from_values(vec![0.0, 1.0, 2.0], vec![3.0, 4.0], vec![5.0, 5.5, 6.0]);
        let svg = render_svg(&ds);
        assert!(svg.contains("Performance Comparison Over 3 Runs"));
        assert!(svg.contains(X_LABEL));
        assert!(svg.contains(Y_LABEL));
        for kind in SeriesKind::ALL {
            assert!(svg.contains(kind.label()), "legend missing {kind}");
        }
    }

    #[test]
    fn empty_dataset_still_renders() {
        let svg = render_svg(&TimingDataset::default());
        assert!(svg.contains("Performance Comparison Over 0 Runs"));
    }

    #[test]
    fn longer_series_are_truncated_to_run_count() {
        let ds = TimingDataset::from_values(vec![1.0, 2.0, 3.0, 4.0], vec![1.0], vec![0.0, 0.5]);
        assert_eq!(visible_points(&ds.scalar, ds.run_count()), vec![(1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(visible_points(&ds.unrolled, ds.run_count()), vec![(1.0, 1.0)]);
    }

    #[test]
    fn non_finite_values_are_not_plotted() {
        let ds =
            TimingDataset::from_values(vec![f64::NAN, 1.0, f64::INFINITY], vec![], vec![0.0; 3]);
        assert_eq!(visible_points(&ds.scalar, 3), vec![(2.0, 1.0)]);
    }

    #[test]
    fn x_bounds_cover_runs() {
        assert_eq!(x_bounds(0), (0.0, 1.0));
        assert_eq!(x_bounds(4), (0.5, 4.5));
    }

    #[test]
    fn y_bounds_pad_the_span() {
        let (lo, hi) = y_bounds([-10.0, -5.0, f64::NAN]);
        assert_relative_eq!(lo, -10.25);
        assert_relative_eq!(hi, -4.75);
    }

    #[test]
    fn y_bounds_degenerate_cases() {
        assert_eq!(y_bounds(std::iter::empty()), (0.0, 1.0));
        assert_eq!(y_bounds([2.0, 2.0]), (1.5, 2.5));
    }

    #[test]
    fn marker_outlines_have_expected_shape() {
        assert_eq!(marker_outline(SeriesKind::Scalar, (0, 0), 4).len(), 3);
        assert_eq!(marker_outline(SeriesKind::Unrolled, (0, 0), 4).len(), 4);
        let circle = marker_outline(SeriesKind::Avx2, (10, 10), 5);
        assert_eq!(circle[0], (15, 10));
        assert!(circle.iter().all(|&(x, y)| (x - 10).abs() <= 5 && (y - 10).abs() <= 5));
    }

    #[test]
    fn run_labels_skip_fractions() {
        assert_eq!(run_label(&3.0), "3");
        assert_eq!(run_label(&2.5), "");
    }
}
