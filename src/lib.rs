//! Core of the games dashboard: dataset loading, filtering, aggregation and
//! per-viewer state. Nothing here depends on the UI toolkit.

pub mod color;
pub mod data;
pub mod state;
