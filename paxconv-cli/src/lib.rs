//! Library entry for paxconv-cli used by integration tests and embedding.

pub mod batch;
pub mod commands;

// Re-export commonly used items
pub use crate::batch::{BatchOptions, BatchSummary, ConversionRow, RowOutcome};
pub use crate::commands::{convert, selftest};
