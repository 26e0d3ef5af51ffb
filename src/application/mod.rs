// ============================================================
// APPLICATION LAYER
// ============================================================
// Use cases orchestrating the load -> analyze -> report pipeline

pub mod reporter;
pub mod statistics_generator;

pub use reporter::Reporter;
pub use statistics_generator::StatisticsGenerator;
