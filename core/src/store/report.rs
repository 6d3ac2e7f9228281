use super::MartStore;
use crate::error::MartResult;
use crate::report::{
    CustomerAddress, CustomerName, CustomerSales, OrderStatusLine, ProductSales, StateOrderCount,
};

impl MartStore {
    // The six fixed report queries. All pure reads; result order is
    // pinned so repeated runs return identical sequences.

    /// Report 1: order counts by destination state and order date.
    /// customers and contact_info only bridge orders to address_history.
    pub fn orders_by_state_and_date(&self) -> MartResult<Vec<StateOrderCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT COUNT(o.order_id) AS total_orders, ah.state, o.order_date
             FROM orders o
             JOIN customers c ON o.customer_id = c.customer_id
             JOIN contact_info ci ON c.contact_id = ci.contact_id
             JOIN address_history ah ON ci.address_id = ah.address_id
             GROUP BY ah.state, o.order_date
             ORDER BY ah.state ASC, o.order_date ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(StateOrderCount {
                total_orders: row.get(0)?,
                state: row.get(1)?,
                order_date: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Report 2: every customer's current address.
    pub fn customer_addresses(&self) -> MartResult<Vec<CustomerAddress>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.first_name, c.last_name, ah.street, ah.city, ah.state, ah.postal_code
             FROM customers c
             JOIN contact_info ci ON c.contact_id = ci.contact_id
             JOIN address_history ah ON ci.address_id = ah.address_id
             ORDER BY c.customer_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CustomerAddress {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
                street: row.get(2)?,
                city: row.get(3)?,
                state: row.get(4)?,
                postal_code: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Report 3: every order with customer, product, and status.
    pub fn order_statuses(&self) -> MartResult<Vec<OrderStatusLine>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.first_name, c.last_name, p.product_name, o.order_date, o.order_status
             FROM orders o
             JOIN products p ON o.product_id = p.product_id
             JOIN customers c ON o.customer_id = c.customer_id
             ORDER BY o.order_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(OrderStatusLine {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
                product_name: row.get(2)?,
                order_date: row.get(3)?,
                placed: row.get::<_, i32>(4)? != 0,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Report 4: customers whose orders were never placed. Empty under
    /// the default load, where every order is stamped placed.
    pub fn customers_with_unplaced_orders(&self) -> MartResult<Vec<CustomerName>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.first_name, c.last_name
             FROM orders o
             JOIN customers c ON o.customer_id = c.customer_id
             WHERE o.order_status = 0
             ORDER BY c.customer_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CustomerName {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Report 5: total sales per customer name.
    pub fn sales_by_customer(&self) -> MartResult<Vec<CustomerSales>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.first_name, c.last_name, SUM(o.order_total) AS sales
             FROM orders o
             JOIN customers c ON o.customer_id = c.customer_id
             GROUP BY c.first_name, c.last_name
             ORDER BY c.last_name ASC, c.first_name ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CustomerSales {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
                sales: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Report 6: total sales per product.
    pub fn sales_by_product(&self) -> MartResult<Vec<ProductSales>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.product_name, SUM(o.order_total) AS sales
             FROM orders o
             JOIN products p ON o.product_id = p.product_id
             GROUP BY p.product_name
             ORDER BY p.product_name ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ProductSales {
                product_name: row.get(0)?,
                sales: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
