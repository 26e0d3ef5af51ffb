// ============================================================
// INFRASTRUCTURE LAYER
// ============================================================
// I/O edges: dataset loading and report rendering

pub mod loader;
pub mod report;
