// ============================================================
// REPORT RENDERING
// ============================================================
// SVG charts and the self-contained HTML statistics page

mod charts;
mod html;

pub use charts::{numeric_histogram_svg, rank_histogram_svg};
pub use html::{render_report, write_report};
