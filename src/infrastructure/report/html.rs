// ============================================================
// HTML REPORT
// ============================================================
// Self-contained statistics page with embedded SVG charts

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::error::{AppError, Result};
use crate::domain::statistics::{DatasetStatistics, FeatureStatistics, StatisticsReport};

use super::charts;

const STYLE: &str = "<style>\n\
body { font-family: sans-serif; margin: 2em auto; max-width: 52em; color: #222; }\n\
h1 { border-bottom: 2px solid #444; padding-bottom: 0.2em; }\n\
.meta { color: #666; font-size: 0.9em; }\n\
.feature { border: 1px solid #ddd; border-radius: 6px; padding: 1em; margin: 1em 0; }\n\
.feature h3 { margin-top: 0; }\n\
.type { color: #888; font-weight: normal; font-size: 0.8em; }\n\
table { border-collapse: collapse; margin-bottom: 1em; }\n\
th { text-align: left; padding: 0.15em 1em 0.15em 0; color: #555; font-weight: normal; }\n\
td { padding: 0.15em 0; font-family: monospace; }\n\
</style>\n";

/// Render the whole report into a self-contained HTML page
pub fn render_report(report: &StatisticsReport) -> Result<String> {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Dataset statistics</title>\n");
    page.push_str(STYLE);
    page.push_str("</head>\n<body>\n");
    page.push_str("<h1>Dataset statistics</h1>\n");
    page.push_str(&format!(
        "<p class=\"meta\">Generated {}</p>\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    for dataset in &report.datasets {
        page.push_str(&render_dataset(dataset)?);
    }

    // The serialized report rides along inside the page, like the raw
    // statistics payload of notebook-style viewers. "<" is escaped so a
    // value can never terminate the script block early.
    let payload = serde_json::to_string(report)
        .map_err(|e| AppError::Render(format!("Failed to serialize report: {}", e)))?
        .replace('<', "\\u003c");
    page.push_str(&format!(
        "<script id=\"statistics-payload\" type=\"application/json\">{}</script>\n",
        payload
    ));

    page.push_str("</body>\n</html>\n");
    Ok(page)
}

/// Write the rendered report into the given directory, returning its path
pub fn write_report(report: &StatisticsReport, dir: &Path) -> Result<PathBuf> {
    let page = render_report(report)?;
    let file_name = format!(
        "statistics-report-{}.html",
        Local::now().format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(file_name);

    fs::write(&path, page)
        .map_err(|e| AppError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(path)
}

fn render_dataset(dataset: &DatasetStatistics) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("<h2>{}</h2>\n", escape_html(&dataset.name)));
    out.push_str(&format!(
        "<p class=\"meta\">{} rows, {} features</p>\n",
        dataset.num_rows,
        dataset.features.len()
    ));

    for feature in &dataset.features {
        out.push_str(&render_feature(feature)?);
    }

    Ok(out)
}

fn render_feature(feature: &FeatureStatistics) -> Result<String> {
    let mut out = String::new();
    out.push_str("<section class=\"feature\">\n");
    out.push_str(&format!(
        "<h3>{} <span class=\"type\" title=\"{}\">{}</span></h3>\n",
        escape_html(&feature.name),
        feature.feature_type.description(),
        feature.feature_type
    ));

    out.push_str("<table>\n");
    push_stat_row(&mut out, "count", &feature.common.count.to_string());
    push_stat_row(&mut out, "missing", &feature.common.missing.to_string());
    if let Some(numeric) = &feature.numeric {
        push_stat_row(&mut out, "min", &format_number(numeric.min));
        push_stat_row(&mut out, "max", &format_number(numeric.max));
        push_stat_row(&mut out, "mean", &format_number(numeric.mean));
        push_stat_row(&mut out, "std dev", &format_number(numeric.std_dev));
        push_stat_row(&mut out, "median", &format_number(numeric.median));
        push_stat_row(&mut out, "q1", &format_number(numeric.q1));
        push_stat_row(&mut out, "q3", &format_number(numeric.q3));
    }
    if let Some(string) = &feature.string {
        push_stat_row(&mut out, "distinct values", &string.distinct_count.to_string());
        push_stat_row(&mut out, "min length", &string.min_length.to_string());
        push_stat_row(&mut out, "mean length", &format_number(string.mean_length));
        push_stat_row(&mut out, "max length", &string.max_length.to_string());
    }
    out.push_str("</table>\n");

    if feature.common.non_missing == 0 {
        out.push_str("<p class=\"meta\">No values to chart.</p>\n");
    } else if let Some(numeric) = &feature.numeric {
        out.push_str(&charts::numeric_histogram_svg(&feature.name, numeric)?);
        out.push('\n');
    } else if let Some(string) = &feature.string {
        if string.rank_histogram.is_empty() {
            out.push_str("<p class=\"meta\">No values to chart.</p>\n");
        } else {
            out.push_str(&charts::rank_histogram_svg(
                &feature.name,
                &string.rank_histogram,
            )?);
            out.push('\n');
        }
    }

    out.push_str("</section>\n");
    Ok(out)
}

fn push_stat_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "<tr><th>{}</th><td>{}</td></tr>\n",
        escape_html(label),
        escape_html(value)
    ));
}

fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value)
    } else {
        format!("{:.4}", value)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::StatisticsGenerator;
    use crate::infrastructure::loader::CsvLoader;

    fn sample_report() -> StatisticsReport {
        let dataset = CsvLoader::new()
            .load_str("label,amount\nham,1\nspam,2\nham,3", "sample")
            .unwrap();
        StatisticsGenerator::default_config().generate(&dataset).unwrap()
    }

    #[test]
    fn test_render_report_structure() {
        let page = render_report(&sample_report()).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h2>sample</h2>"));
        assert!(page.contains("3 rows, 2 features"));
        assert!(page.contains("<h3>label"));
        assert!(page.contains("<h3>amount"));
        assert!(page.contains("<svg"));
        assert!(page.contains("statistics-payload"));
        assert!(page.contains("\"num_rows\":3"));
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&sample_report(), dir.path()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(path.extension().map(|e| e == "html").unwrap_or(false));
        assert!(written.contains("</html>"));
    }

    #[test]
    fn test_html_escaping() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(2.5), "2.5000");
        assert_eq!(format_number(1.29099), "1.2910");
    }
}
