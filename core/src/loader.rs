//! Flat-file ingestion: reads the delimited order export into raw records.
//!
//! The header row must carry exactly the expected column set; anything
//! else aborts before a single table is touched.

use csv::{ReaderBuilder, StringRecord};

use crate::error::{MartError, MartResult};
use crate::record::{RawRecord, COLUMNS};

pub fn read_orders(path: &str) -> MartResult<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let index = column_index(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(RawRecord {
            first_name: field(&record, index[0]),
            last_name: field(&record, index[1]),
            date_of_birth: field(&record, index[2]),
            street: field(&record, index[3]),
            city: field(&record, index[4]),
            state: field(&record, index[5]),
            postal_code: field(&record, index[6]),
            phone: field(&record, index[7]),
            email: field(&record, index[8]),
            product_name: field(&record, index[9]),
            price: field(&record, index[10]),
            order_id: field(&record, index[11]),
            order_date: field(&record, index[12]),
            quantity: field(&record, index[13]),
            order_total: field(&record, index[14]),
        });
    }
    Ok(rows)
}

fn field(record: &StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_string()
}

/// Map each expected column to its position in the file's header row.
fn column_index(headers: &StringRecord) -> MartResult<[usize; COLUMNS.len()]> {
    let names: Vec<String> = headers
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut missing = Vec::new();
    let mut index = [0usize; COLUMNS.len()];
    for (slot, col) in COLUMNS.iter().enumerate() {
        match names.iter().position(|n| n.as_str() == *col) {
            Some(pos) => index[slot] = pos,
            None => missing.push((*col).to_string()),
        }
    }
    let unexpected: Vec<String> = names
        .iter()
        .filter(|n| !COLUMNS.iter().any(|c| *c == n.as_str()))
        .cloned()
        .collect();

    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(MartError::HeaderMismatch {
            missing,
            unexpected,
        });
    }
    Ok(index)
}
