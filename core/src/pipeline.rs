//! The end-to-end load pipeline.
//!
//! STAGE ORDER (fixed):
//!   1. read raw rows from the flat file
//!   2. clean (dedup, currency, coercion, completeness)
//!   3. reset the schema (drop and recreate, destructive)
//!   4. project rows into the five entities
//!   5. bulk-append each entity in dependency order
//!
//! The store handle is passed in by the caller and released by drop on
//! every exit path; the pipeline owns no connection state. No retries:
//! the first error terminates the run.

use crate::{
    cleaner, config::MartConfig, error::MartResult, loader, normalizer, record::CleanRecord,
    store::MartStore,
};

pub struct LoadSummary {
    pub raw_rows: usize,
    pub duplicates_dropped: usize,
    /// Cleaned rows, retained so the caller can render a preview.
    pub cleaned: Vec<CleanRecord>,
}

impl LoadSummary {
    /// Rows appended to each of the five tables.
    pub fn cleaned_rows(&self) -> usize {
        self.cleaned.len()
    }
}

pub fn run(config: &MartConfig, store: &MartStore) -> MartResult<LoadSummary> {
    let raw = loader::read_orders(&config.input_csv)?;
    log::info!("read {} raw rows from {}", raw.len(), config.input_csv);

    let cleaned = cleaner::clean(&raw)?;
    let duplicates_dropped = raw.len() - cleaned.len();
    if duplicates_dropped > 0 {
        log::info!("dropped {duplicates_dropped} duplicate rows");
    }

    store.reset_schema()?;
    log::debug!("schema reset: five tables dropped and recreated");

    let rows = normalizer::project(&cleaned, config);
    normalizer::load(store, &rows)?;
    log::info!("appended {} rows to each of the five tables", cleaned.len());

    Ok(LoadSummary {
        raw_rows: raw.len(),
        duplicates_dropped,
        cleaned,
    })
}
