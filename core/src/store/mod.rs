//! SQLite persistence layer.
//!
//! RULE: only the store module talks to the database. The pipeline and
//! report engine call store methods; they never execute SQL directly.

mod load;
mod report;

use rusqlite::Connection;

use crate::error::MartResult;
use crate::types::RowId;

pub struct MartStore {
    conn: Connection,
}

impl MartStore {
    /// Open (or create) the mart database at `path`. The connection is
    /// scoped to the run and closed by drop on every exit path.
    pub fn open(path: &str) -> MartResult<Self> {
        let conn = Connection::open(path)?;
        // WAL only matters for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> MartResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Drop and recreate the five tables. Destructive: a second call
    /// discards everything the first load wrote.
    pub fn reset_schema(&self) -> MartResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_sales_schema.sql"))?;
        Ok(())
    }

    // ── Row counts ─────────────────────────────────────────────

    pub fn address_count(&self) -> MartResult<i64> {
        self.table_count("address_history")
    }

    pub fn contact_count(&self) -> MartResult<i64> {
        self.table_count("contact_info")
    }

    pub fn customer_count(&self) -> MartResult<i64> {
        self.table_count("customers")
    }

    pub fn product_count(&self) -> MartResult<i64> {
        self.table_count("products")
    }

    pub fn order_count(&self) -> MartResult<i64> {
        self.table_count("orders")
    }

    fn table_count(&self, table: &str) -> MartResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        self.conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(Into::into)
    }

    // ── Linkage inspection (used in tests) ─────────────────────

    /// (order_id, customer_id, product_id) for every order, in key order.
    pub fn order_links(&self) -> MartResult<Vec<(RowId, RowId, RowId)>> {
        let mut stmt = self.conn.prepare(
            "SELECT order_id, customer_id, product_id
             FROM orders ORDER BY order_id ASC",
        )?;
        let links = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(links)
    }

    /// (order_id, address_id) with the address reached through the full
    /// customer/contact chain.
    pub fn order_address_chain(&self) -> MartResult<Vec<(RowId, RowId)>> {
        let mut stmt = self.conn.prepare(
            "SELECT o.order_id, ah.address_id
             FROM orders o
             JOIN customers c ON o.customer_id = c.customer_id
             JOIN contact_info ci ON c.contact_id = ci.contact_id
             JOIN address_history ah ON ci.address_id = ah.address_id
             ORDER BY o.order_id ASC",
        )?;
        let chain = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(chain)
    }
}
