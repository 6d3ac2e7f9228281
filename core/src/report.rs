//! The fixed report suite: six read-only aggregates over the mart.
//!
//! Typed result rows live here; the SQL behind them lives in the store.
//! `run_all` flattens everything into renderable tables for whatever
//! sink the caller points at (terminal, file, log).

use crate::error::MartResult;
use crate::store::MartStore;

#[derive(Debug, Clone, PartialEq)]
pub struct StateOrderCount {
    pub total_orders: i64,
    pub state: String,
    pub order_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerAddress {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderStatusLine {
    pub first_name: String,
    pub last_name: String,
    pub product_name: String,
    pub order_date: String,
    pub placed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSales {
    pub first_name: String,
    pub last_name: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    pub product_name: String,
    pub sales: f64,
}

/// One rendered report: a title, named columns, and string rows.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Run all six reports against a loaded store.
pub fn run_all(store: &MartStore) -> MartResult<Vec<Report>> {
    let mut reports = Vec::with_capacity(6);

    reports.push(Report {
        title: "Orders shipped by state and date",
        headers: vec!["total_orders", "state", "order_date"],
        rows: store
            .orders_by_state_and_date()?
            .into_iter()
            .map(|r| vec![r.total_orders.to_string(), r.state, r.order_date])
            .collect(),
    });

    reports.push(Report {
        title: "Current customer addresses",
        headers: vec![
            "first_name",
            "last_name",
            "street",
            "city",
            "state",
            "postal_code",
        ],
        rows: store
            .customer_addresses()?
            .into_iter()
            .map(|r| {
                vec![
                    r.first_name,
                    r.last_name,
                    r.street,
                    r.city,
                    r.state,
                    r.postal_code,
                ]
            })
            .collect(),
    });

    reports.push(Report {
        title: "Orders and their statuses",
        headers: vec![
            "first_name",
            "last_name",
            "product_name",
            "order_date",
            "order_status",
        ],
        rows: store
            .order_statuses()?
            .into_iter()
            .map(|r| {
                vec![
                    r.first_name,
                    r.last_name,
                    r.product_name,
                    r.order_date,
                    if r.placed { "placed" } else { "not placed" }.to_string(),
                ]
            })
            .collect(),
    });

    reports.push(Report {
        title: "Customers with unplaced orders",
        headers: vec!["first_name", "last_name"],
        rows: store
            .customers_with_unplaced_orders()?
            .into_iter()
            .map(|r| vec![r.first_name, r.last_name])
            .collect(),
    });

    reports.push(Report {
        title: "Sales by customer",
        headers: vec!["first_name", "last_name", "sales"],
        rows: store
            .sales_by_customer()?
            .into_iter()
            .map(|r| vec![r.first_name, r.last_name, format!("{:.2}", r.sales)])
            .collect(),
    });

    reports.push(Report {
        title: "Sales by product",
        headers: vec!["product_name", "sales"],
        rows: store
            .sales_by_product()?
            .into_iter()
            .map(|r| vec![r.product_name, format!("{:.2}", r.sales)])
            .collect(),
    });

    Ok(reports)
}
