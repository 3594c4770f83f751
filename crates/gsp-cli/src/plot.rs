//! Per-source bar chart rendering
//!
//! For every distinct result source (first-seen order) renders a horizontal
//! bar chart of -log10(p-value) per term, bars in service order with the
//! first row at the top, and saves it next to the result table as
//! `<output><source>.svg` and `<output><source>.png`.

use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::{CliError, Result};
use gsp_common::EnrichmentTable;

// ============================================================================
// Figure Geometry Constants
// ============================================================================

/// Figure width in chart units.
pub const FIGURE_WIDTH_UNITS: f64 = 10.0;

/// Figure height per bar in chart units.
pub const ROW_HEIGHT_UNITS: f64 = 0.2;

/// Pixels per chart unit when rasterizing.
const PX_PER_UNIT: f64 = 100.0;

/// Extra vertical pixels for the caption area.
const CAPTION_AREA_PX: u32 = 40;

/// Extra vertical pixels for the x-axis label area.
const X_LABEL_AREA_PX: u32 = 40;

/// Horizontal pixels reserved for term names on the y-axis.
const Y_LABEL_AREA_PX: u32 = 240;

/// Negative decadic logarithm used to scale p-values for plotting
pub fn neg_log10(p_value: f64) -> f64 {
    -p_value.log10()
}

/// Figure size in chart units for a partition with `rows` bars
pub fn figure_size(rows: usize) -> (f64, f64) {
    (FIGURE_WIDTH_UNITS, ROW_HEIGHT_UNITS * rows as f64)
}

/// Figure size in pixels: the axes area plus caption and axis label areas
fn pixel_size(rows: usize) -> (u32, u32) {
    let (width, height) = figure_size(rows);
    (
        (width * PX_PER_UNIT) as u32,
        (height * PX_PER_UNIT).ceil() as u32 + CAPTION_AREA_PX + X_LABEL_AREA_PX,
    )
}

/// Bars for one source: `(term name, -log10 p)` in table order
///
/// The plotting view is indexed by term name: a later row with an already
/// seen name overwrites the earlier value but keeps its position.
fn source_bars(table: &EnrichmentTable, source: &str) -> Vec<(String, f64)> {
    let mut bars: Vec<(String, f64)> = Vec::new();

    for row in 0..table.len() {
        if table.str_cell(row, "source") != Some(source) {
            continue;
        }
        let name = table.str_cell(row, "name").unwrap_or_default().to_string();
        let value = neg_log10(table.f64_cell(row, "p_value").unwrap_or(f64::NAN));

        match bars.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => bars.push((name, value)),
        }
    }

    bars
}

/// Render one SVG and one PNG chart per distinct source
///
/// Returns the paths of the written image files.
pub fn render_plots(table: &EnrichmentTable, output: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for source in table.sources() {
        let bars = source_bars(table, &source);
        if bars.is_empty() {
            continue;
        }

        let (width, height) = pixel_size(bars.len());
        let svg_path = PathBuf::from(format!("{}{}.svg", output.display(), source));
        let png_path = PathBuf::from(format!("{}{}.png", output.display(), source));

        {
            let root = SVGBackend::new(&svg_path, (width, height)).into_drawing_area();
            draw_chart(&root, &source, &bars)
                .map_err(|e| CliError::plot(svg_path.display().to_string(), e))?;
        }
        {
            let root = BitMapBackend::new(&png_path, (width, height)).into_drawing_area();
            draw_chart(&root, &source, &bars)
                .map_err(|e| CliError::plot(png_path.display().to_string(), e))?;
        }

        info!(source = %source, bars = bars.len(), "Rendered charts");

        written.push(svg_path);
        written.push(png_path);
    }

    Ok(written)
}

/// Draw a horizontal bar chart onto a drawing area
///
/// First bar at the top (inverted y-axis), x-axis "-log10(p-value)", y-axis
/// "process", caption = source name. A p-value of zero renders as a
/// full-width bar.
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    source: &str,
    bars: &[(String, f64)],
) -> std::result::Result<(), String> {
    let n = bars.len();
    let finite_max = bars
        .iter()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);
    let x_max = if finite_max > 0.0 {
        finite_max * 1.05
    } else {
        1.0
    };

    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(root)
        .caption(source, ("sans-serif", 16))
        .margin(5)
        .x_label_area_size(X_LABEL_AREA_PX)
        .y_label_area_size(Y_LABEL_AREA_PX)
        .build_cartesian_2d(0f64..x_max, (0..n as i32).into_segmented())
        .map_err(|e| e.to_string())?;

    let names: Vec<&str> = bars.iter().map(|(name, _)| name.as_str()).collect();
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("-log10(p-value)")
        .y_desc("process")
        .y_labels(n)
        .y_label_formatter(&|segment| {
            let idx = match segment {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => *i as usize,
                SegmentValue::Last => return String::new(),
            };
            // segment 0 is the bottom band; the last table row sits there
            n.checked_sub(1 + idx)
                .and_then(|row| names.get(row))
                .map(|name| name.to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, (_, value))| {
            let slot = (n - 1 - i) as i32;
            Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(slot)),
                    (value.min(x_max), SegmentValue::Exact(slot + 1)),
                ],
                BLUE.filled(),
            )
        }))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use gsp_common::DetailLevel;
    use serde_json::{json, Map, Value};
    use tempfile::tempdir;

    fn record(source: &str, name: &str, p_value: f64) -> Map<String, Value> {
        match json!({
            "source": source,
            "native": "GO:0000001",
            "name": name,
            "p_value": p_value,
            "description": "a term",
            "query": "query_1",
            "significant": true,
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn table(records: &[Map<String, Value>]) -> EnrichmentTable {
        EnrichmentTable::from_records(records, DetailLevel::BASE).unwrap()
    }

    #[test]
    fn test_neg_log10_reference_points() {
        assert!((neg_log10(0.01) - 2.0).abs() < 1e-12);
        assert_eq!(neg_log10(1.0), 0.0);
        assert!((neg_log10(0.05) - 1.301).abs() < 1e-3);
    }

    #[test]
    fn test_figure_size_scales_with_rows() {
        let (width, height) = figure_size(3);
        assert_eq!(width, 10.0);
        assert!((height - 0.6).abs() < 1e-12);
        assert_eq!(figure_size(5), (10.0, 1.0));
    }

    #[test]
    fn test_source_bars_in_table_order() {
        let t = table(&[
            record("GO:BP", "first", 0.05),
            record("KEGG", "other", 0.01),
            record("GO:BP", "second", 0.0025),
        ]);

        let bars = source_bars(&t, "GO:BP");
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].0, "first");
        assert_eq!(bars[1].0, "second");
        assert!((bars[1].1 - 2.602).abs() < 1e-3);
    }

    #[test]
    fn test_duplicate_names_last_wins_keeps_position() {
        let t = table(&[
            record("GO:BP", "dup", 0.1),
            record("GO:BP", "unique", 0.05),
            record("GO:BP", "dup", 0.001),
        ]);

        let bars = source_bars(&t, "GO:BP");
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].0, "dup");
        assert!((bars[0].1 - 3.0).abs() < 1e-12);
        assert_eq!(bars[1].0, "unique");
    }

    #[test]
    fn test_render_plots_two_files_per_source() {
        let t = table(&[
            record("GO:BP", "t1", 0.05),
            record("GO:BP", "t2", 0.0025),
            record("GO:BP", "t3", 0.01),
            record("KEGG", "k1", 0.02),
            record("KEGG", "k2", 0.03),
        ]);

        let dir = tempdir().unwrap();
        let output = dir.path().join("out");
        let written = render_plots(&t, &output).unwrap();

        assert_eq!(written.len(), 4);
        for suffix in ["GO:BP.svg", "GO:BP.png", "KEGG.svg", "KEGG.png"] {
            let path = PathBuf::from(format!("{}{}", output.display(), suffix));
            assert!(path.exists(), "missing {}", path.display());
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }
    }
}
