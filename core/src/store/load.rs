use rusqlite::params;

use super::MartStore;
use crate::error::MartResult;
use crate::normalizer::{AddressRow, ContactRow, CustomerRow, OrderRow, ProductRow};

impl MartStore {
    // Each entity loads as one transaction: any bad row rolls back the
    // whole batch for that table. Surrogate keys come from AUTOINCREMENT,
    // so insertion order is the positional linkage.

    pub fn insert_addresses(&self, rows: &[AddressRow]) -> MartResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO address_history (street, city, state, postal_code, start_date, end_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for r in rows {
                stmt.execute(params![
                    r.street,
                    r.city,
                    r.state,
                    r.postal_code,
                    r.start_date,
                    r.end_date
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn insert_contacts(&self, rows: &[ContactRow]) -> MartResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO contact_info (phone, email, address_id)
                 VALUES (?1, ?2, ?3)",
            )?;
            for r in rows {
                stmt.execute(params![r.phone, r.email, r.address_id])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn insert_customers(&self, rows: &[CustomerRow]) -> MartResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO customers (first_name, last_name, date_of_birth, contact_id)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for r in rows {
                stmt.execute(params![r.first_name, r.last_name, r.date_of_birth, r.contact_id])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn insert_products(&self, rows: &[ProductRow]) -> MartResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO products (product_name, price)
                 VALUES (?1, ?2)",
            )?;
            for r in rows {
                stmt.execute(params![r.product_name, r.price])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn insert_orders(&self, rows: &[OrderRow]) -> MartResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO orders (order_date, order_status, customer_id, product_id, quantity, order_total)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for r in rows {
                stmt.execute(params![
                    r.order_date,
                    if r.placed { 1i64 } else { 0i64 },
                    r.customer_id,
                    r.product_id,
                    r.quantity,
                    r.order_total
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
