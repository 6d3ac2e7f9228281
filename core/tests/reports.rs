//! Report suite tests against small, purpose-built loads.

mod common;

use common::{load_into, raw_order};
use salesmart_core::config::MartConfig;
use salesmart_core::report::{self, StateOrderCount};
use salesmart_core::store::MartStore;

#[test]
fn unplaced_orders_report_is_empty_under_default_load() {
    let store = MartStore::in_memory().unwrap();
    let raws: Vec<_> = (0..3).map(raw_order).collect();
    load_into(&store, &raws, &MartConfig::default());

    let rows = store.customers_with_unplaced_orders().unwrap();
    assert!(rows.is_empty(), "every order defaults to placed, got {rows:?}");
}

#[test]
fn unplaced_orders_report_lists_everyone_when_default_flipped() {
    let store = MartStore::in_memory().unwrap();
    let raws: Vec<_> = (0..3).map(raw_order).collect();
    let mut config = MartConfig::default();
    config.order_status_default = false;

    let n = load_into(&store, &raws, &config);
    assert_eq!(store.customers_with_unplaced_orders().unwrap().len(), n);
}

#[test]
fn sales_by_customer_groups_same_name() {
    let store = MartStore::in_memory().unwrap();
    let mut a = raw_order(1);
    a.first_name = "Pat".to_string();
    a.last_name = "Lee".to_string();
    a.order_total = "10.00".to_string();
    let mut b = raw_order(2);
    b.first_name = "Pat".to_string();
    b.last_name = "Lee".to_string();
    b.order_total = "20.00".to_string();

    load_into(&store, &[a, b], &MartConfig::default());

    let rows = store.sales_by_customer().unwrap();
    assert_eq!(rows.len(), 1, "same name must collapse into one grouped row");
    assert_eq!(rows[0].first_name, "Pat");
    assert_eq!(rows[0].last_name, "Lee");
    assert!(
        (rows[0].sales - 30.0).abs() < 1e-9,
        "10.00 + 20.00 must sum to 30.00, got {}",
        rows[0].sales
    );
}

#[test]
fn orders_by_state_counts_state_and_date_groups() {
    let store = MartStore::in_memory().unwrap();
    let mut a = raw_order(1);
    a.state = "CA".to_string();
    a.order_date = "01/02/2023".to_string();
    let mut b = raw_order(2);
    b.state = "CA".to_string();
    b.order_date = "01/02/2023".to_string();
    let mut c = raw_order(3);
    c.state = "NY".to_string();
    c.order_date = "01/02/2023".to_string();

    load_into(&store, &[a, b, c], &MartConfig::default());

    let rows = store.orders_by_state_and_date().unwrap();
    assert_eq!(
        rows,
        vec![
            StateOrderCount {
                total_orders: 2,
                state: "CA".to_string(),
                order_date: "01/02/2023".to_string(),
            },
            StateOrderCount {
                total_orders: 1,
                state: "NY".to_string(),
                order_date: "01/02/2023".to_string(),
            },
        ]
    );
}

#[test]
fn customer_addresses_returns_one_row_per_customer() {
    let store = MartStore::in_memory().unwrap();
    let raws: Vec<_> = (0..3).map(raw_order).collect();
    let n = load_into(&store, &raws, &MartConfig::default());

    let rows = store.customer_addresses().unwrap();
    assert_eq!(rows.len(), n);
    assert_eq!(rows[0].first_name, "First0");
    assert_eq!(rows[0].street, "0 Elm Street", "positional join reaches the right address");
}

#[test]
fn sales_by_product_groups_product_names() {
    let store = MartStore::in_memory().unwrap();
    let mut a = raw_order(1);
    a.product_name = "Widget".to_string();
    a.order_total = "15.50".to_string();
    let mut b = raw_order(2);
    b.product_name = "Widget".to_string();
    b.order_total = "4.50".to_string();
    let mut c = raw_order(3);
    c.product_name = "Sprocket".to_string();
    c.order_total = "9.99".to_string();

    load_into(&store, &[a, b, c], &MartConfig::default());

    let rows = store.sales_by_product().unwrap();
    assert_eq!(rows.len(), 2);
    // Alphabetical: Sprocket before Widget.
    assert_eq!(rows[0].product_name, "Sprocket");
    assert!((rows[0].sales - 9.99).abs() < 1e-9);
    assert_eq!(rows[1].product_name, "Widget");
    assert!((rows[1].sales - 20.0).abs() < 1e-9);
}

#[test]
fn run_all_returns_six_stable_reports() {
    let store = MartStore::in_memory().unwrap();
    let raws: Vec<_> = (0..4).map(raw_order).collect();
    load_into(&store, &raws, &MartConfig::default());

    let first = report::run_all(&store).unwrap();
    let second = report::run_all(&store).unwrap();

    assert_eq!(first.len(), 6);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.title, b.title);
        assert_eq!(a.rows, b.rows, "report '{}' must be stable across runs", a.title);
    }
}
