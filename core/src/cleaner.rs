//! Field-level cleaning rules for the flat order export.
//!
//! Rules run in a fixed order and each is idempotent on its own output:
//!   1. exact-duplicate removal (structural comparison, no fuzzing)
//!   2. currency normalization (order_total to two decimals)
//!   3. type coercion (postal_code and order_id stay text, totals numeric)
//!   4. completeness check (any missing value fails the run)
//!
//! Row order is preserved throughout; nothing is imputed.

use std::collections::HashSet;

use crate::error::{MartError, MartResult};
use crate::record::{CleanRecord, RawRecord};

pub fn clean(rows: &[RawRecord]) -> MartResult<Vec<CleanRecord>> {
    let deduped = drop_duplicates(rows);
    let mut cleaned = Vec::with_capacity(deduped.len());
    for (idx, raw) in deduped.iter().enumerate() {
        cleaned.push(clean_row(idx + 1, raw)?);
    }
    Ok(cleaned)
}

/// Collapse fully identical rows to their first occurrence.
fn drop_duplicates(rows: &[RawRecord]) -> Vec<RawRecord> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|r| seen.insert((*r).clone()))
        .cloned()
        .collect()
}

fn clean_row(row: usize, raw: &RawRecord) -> MartResult<CleanRecord> {
    // Completeness first: a blank field must surface as missing data,
    // not as a numeric parse failure.
    for (column, value) in raw.fields() {
        if value.is_empty() {
            return Err(MartError::MissingValue { row, column });
        }
    }

    let price = parse_number(row, "price", &raw.price)?;
    let quantity = parse_integer(row, "quantity", &raw.quantity)?;
    let order_total = round_currency(parse_number(row, "order_total", &raw.order_total)?);
    if order_total < 0.0 {
        return Err(MartError::NegativeTotal {
            row,
            value: order_total,
        });
    }

    Ok(CleanRecord {
        first_name: raw.first_name.clone(),
        last_name: raw.last_name.clone(),
        date_of_birth: raw.date_of_birth.clone(),
        street: raw.street.clone(),
        city: raw.city.clone(),
        state: raw.state.clone(),
        postal_code: raw.postal_code.clone(),
        phone: raw.phone.clone(),
        email: raw.email.clone(),
        product_name: raw.product_name.clone(),
        price,
        order_id: raw.order_id.clone(),
        order_date: raw.order_date.clone(),
        quantity,
        order_total,
    })
}

/// Round to two decimals, half away from zero.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_number(row: usize, column: &'static str, value: &str) -> MartResult<f64> {
    value.parse::<f64>().map_err(|_| MartError::InvalidNumber {
        row,
        column,
        value: value.to_string(),
    })
}

fn parse_integer(row: usize, column: &'static str, value: &str) -> MartResult<i64> {
    value.parse::<i64>().map_err(|_| MartError::InvalidNumber {
        row,
        column,
        value: value.to_string(),
    })
}
