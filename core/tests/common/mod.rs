//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use salesmart_core::cleaner;
use salesmart_core::config::MartConfig;
use salesmart_core::normalizer;
use salesmart_core::record::RawRecord;
use salesmart_core::store::MartStore;

/// A distinct, fully populated flat row for index `n`.
pub fn raw_order(n: u32) -> RawRecord {
    RawRecord {
        first_name: format!("First{n}"),
        last_name: format!("Last{n}"),
        date_of_birth: format!("19{:02}-04-12", 70 + (n % 20)),
        street: format!("{n} Elm Street"),
        city: "Springfield".to_string(),
        state: if n % 2 == 0 { "IL" } else { "OH" }.to_string(),
        postal_code: format!("{:05}", 60000 + n),
        phone: format!("555-01{:02}", n % 100),
        email: format!("first{n}.last{n}@example.com"),
        product_name: format!("Widget {}", n % 3),
        price: "19.99".to_string(),
        order_id: format!("{:04}", 1000 + n),
        order_date: "03/15/2023".to_string(),
        quantity: "2".to_string(),
        order_total: "39.98".to_string(),
    }
}

/// Clean, reset the schema, project, and bulk-load `raws`. Returns the
/// cleaned row count.
pub fn load_into(store: &MartStore, raws: &[RawRecord], config: &MartConfig) -> usize {
    let cleaned = cleaner::clean(raws).unwrap();
    store.reset_schema().unwrap();
    let rows = normalizer::project(&cleaned, config);
    normalizer::load(store, &rows).unwrap();
    cleaned.len()
}
