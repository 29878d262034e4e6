//! Core utilities for the college football data loader
//!
//! - `cache`: CSV cache files on local disk
//! - `table`: tabular record sets, JSON flattening and CSV encoding

pub mod cache;
pub mod table;

// Re-export commonly used items for convenience
pub use cache::{default_raw_dir, TableCache};
pub use table::{json_cell, json_kind, Row, Table};
