//! Projection of cleaned flat rows into the five normalized tables.
//!
//! Surrogate keys line up positionally: row i (1-based) of every table
//! derives from cleaned input row i, so the foreign key carried by child
//! row i is simply i. The chain order -> customer -> contact -> address
//! therefore resolves back to the address at the same position. Repeated
//! addresses and contacts are NOT deduplicated at load time.

use crate::config::MartConfig;
use crate::error::MartResult;
use crate::record::CleanRecord;
use crate::store::MartStore;
use crate::types::RowId;

#[derive(Debug, Clone)]
pub struct AddressRow {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone)]
pub struct ContactRow {
    pub phone: String,
    pub email: String,
    pub address_id: RowId,
}

#[derive(Debug, Clone)]
pub struct CustomerRow {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub contact_id: RowId,
}

#[derive(Debug, Clone)]
pub struct ProductRow {
    pub product_name: String,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct OrderRow {
    pub order_date: String,
    pub placed: bool,
    pub customer_id: RowId,
    pub product_id: RowId,
    pub quantity: i64,
    pub order_total: f64,
}

#[derive(Debug, Default)]
pub struct NormalizedRows {
    pub addresses: Vec<AddressRow>,
    pub contacts: Vec<ContactRow>,
    pub customers: Vec<CustomerRow>,
    pub products: Vec<ProductRow>,
    pub orders: Vec<OrderRow>,
}

/// Split every cleaned row into its five per-table sub-records. Pure
/// projection, no I/O.
pub fn project(records: &[CleanRecord], config: &MartConfig) -> NormalizedRows {
    let start_date = config.address_window.start_date.to_string();
    let end_date = config.address_window.end_date.to_string();

    let mut rows = NormalizedRows::default();
    for (idx, r) in records.iter().enumerate() {
        let position = (idx + 1) as RowId;
        rows.addresses.push(AddressRow {
            street: r.street.clone(),
            city: r.city.clone(),
            state: r.state.clone(),
            postal_code: r.postal_code.clone(),
            start_date: start_date.clone(),
            end_date: end_date.clone(),
        });
        rows.contacts.push(ContactRow {
            phone: r.phone.clone(),
            email: r.email.clone(),
            address_id: position,
        });
        rows.customers.push(CustomerRow {
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
            date_of_birth: r.date_of_birth.clone(),
            contact_id: position,
        });
        rows.products.push(ProductRow {
            product_name: r.product_name.clone(),
            price: r.price,
        });
        rows.orders.push(OrderRow {
            order_date: r.order_date.clone(),
            placed: config.order_status_default,
            customer_id: position,
            product_id: position,
            quantity: r.quantity,
            order_total: r.order_total,
        });
    }
    rows
}

/// Bulk-append every entity in dependency order: parents before the
/// children that reference them. Each entity is one transaction, so a
/// bad row aborts that entity's whole batch.
pub fn load(store: &MartStore, rows: &NormalizedRows) -> MartResult<()> {
    store.insert_addresses(&rows.addresses)?;
    store.insert_contacts(&rows.contacts)?;
    store.insert_customers(&rows.customers)?;
    store.insert_products(&rows.products)?;
    store.insert_orders(&rows.orders)?;
    Ok(())
}
