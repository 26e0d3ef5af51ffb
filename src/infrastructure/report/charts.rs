// ============================================================
// CHART RENDERING
// ============================================================
// Per-feature SVG charts drawn with plotters

use plotters::prelude::*;

use crate::domain::error::{AppError, Result};
use crate::domain::statistics::{NumericStatistics, RankHistogram};

/// Chart canvas size in pixels
const CHART_WIDTH: u32 = 640;
const CHART_HEIGHT: u32 = 360;

/// Longest axis label before truncation
const MAX_LABEL_CHARS: usize = 12;

fn render_error(title: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Render(format!("Failed to draw chart for '{}': {}", title, err))
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let head: String = label.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}...", head)
    }
}

/// Render the value histogram of a numeric feature as an SVG string
pub fn numeric_histogram_svg(title: &str, numeric: &NumericStatistics) -> Result<String> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| render_error(title, e))?;

        let max_count = numeric.histogram.iter().map(|b| b.count).max().unwrap_or(0);
        let y_max = (max_count as f64).max(1.0) * 1.1;

        // Pad the range for constant columns so the axis stays drawable
        let (x_min, x_max) = if numeric.max > numeric.min {
            (numeric.min, numeric.max)
        } else {
            (numeric.min - 0.5, numeric.max + 0.5)
        };

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)
            .map_err(|e| render_error(title, e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("value")
            .y_desc("count")
            .y_label_formatter(&|v| format!("{:.0}", v))
            .draw()
            .map_err(|e| render_error(title, e))?;

        chart
            .draw_series(numeric.histogram.iter().map(|bucket| {
                Rectangle::new(
                    [(bucket.low, 0.0), (bucket.high, bucket.count as f64)],
                    BLUE.mix(0.5).filled(),
                )
            }))
            .map_err(|e| render_error(title, e))?;

        root.present().map_err(|e| render_error(title, e))?;
    }
    Ok(svg)
}

/// Render a rank histogram as a bar chart SVG string
pub fn rank_histogram_svg(title: &str, histogram: &RankHistogram) -> Result<String> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| render_error(title, e))?;

        let max_count = histogram.buckets.iter().map(|b| b.count).max().unwrap_or(0);
        let y_max = (max_count as f64).max(1.0) * 1.1;
        let n = histogram.buckets.len().max(1);
        let labels: Vec<&str> = histogram.buckets.iter().map(|b| b.label.as_str()).collect();

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0..n as i32, 0f64..y_max)
            .map_err(|e| render_error(title, e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&|idx| {
                usize::try_from(*idx)
                    .ok()
                    .and_then(|i| labels.get(i))
                    .map(|label| truncate_label(label))
                    .unwrap_or_default()
            })
            .y_desc("count")
            .y_label_formatter(&|v| format!("{:.0}", v))
            .draw()
            .map_err(|e| render_error(title, e))?;

        chart
            .draw_series(histogram.buckets.iter().enumerate().map(|(idx, bucket)| {
                Rectangle::new(
                    [(idx as i32, 0.0), (idx as i32 + 1, bucket.count as f64)],
                    RED.mix(0.5).filled(),
                )
            }))
            .map_err(|e| render_error(title, e))?;

        root.present().map_err(|e| render_error(title, e))?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::statistics::{HistogramBucket, RankBucket};

    fn sample_rank_histogram() -> RankHistogram {
        RankHistogram {
            buckets: vec![
                RankBucket {
                    rank: 1,
                    label: "ham".to_string(),
                    count: 87,
                },
                RankBucket {
                    rank: 2,
                    label: "spam".to_string(),
                    count: 13,
                },
            ],
        }
    }

    fn sample_numeric() -> NumericStatistics {
        NumericStatistics {
            min: 0.0,
            max: 10.0,
            mean: 5.0,
            std_dev: 2.0,
            median: 5.0,
            q1: 2.5,
            q3: 7.5,
            histogram: vec![
                HistogramBucket {
                    low: 0.0,
                    high: 5.0,
                    count: 4,
                },
                HistogramBucket {
                    low: 5.0,
                    high: 10.0,
                    count: 6,
                },
            ],
        }
    }

    #[test]
    fn test_rank_histogram_svg() {
        let svg = rank_histogram_svg("label", &sample_rank_histogram()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_numeric_histogram_svg() {
        let svg = numeric_histogram_svg("amount", &sample_numeric()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_constant_column_still_renders() {
        let numeric = NumericStatistics {
            min: 3.0,
            max: 3.0,
            mean: 3.0,
            std_dev: 0.0,
            median: 3.0,
            q1: 3.0,
            q3: 3.0,
            histogram: vec![HistogramBucket {
                low: 3.0,
                high: 3.0,
                count: 5,
            }],
        };
        assert!(numeric_histogram_svg("constant", &numeric).is_ok());
    }

    #[test]
    fn test_empty_rank_histogram_renders_axes_only() {
        let svg = rank_histogram_svg("empty", &RankHistogram::default()).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_long_labels_are_truncated() {
        assert_eq!(truncate_label("short"), "short");
        assert_eq!(
            truncate_label("averylongcategoryname"),
            "averylongcat..."
        );
    }
}
