//! Shared primitive types used across the pipeline.

/// A surrogate key in the normalized store. Keys are assigned by SQLite
/// in insertion order, so a RowId doubles as the 1-based input position.
pub type RowId = i64;
