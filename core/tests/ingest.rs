//! Flat-file ingestion tests: header validation and row materialization.

use std::io::Write;

use salesmart_core::error::MartError;
use salesmart_core::loader;
use tempfile::NamedTempFile;

fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn reads_rows_by_header_name_not_position() {
    // Columns deliberately out of the canonical order.
    let file = write_csv(&[
        "order_total,first_name,last_name,date_of_birth,street,city,state,postal_code,phone,email,product_name,price,order_id,order_date,quantity",
        "1000.0,Ada,Lovelace,1815-12-10,12 Byron Row,London,LN,02134,555-0100,ada@example.com,Analytical Engine,1000.0,0042,06/14/1843,1",
    ]);

    let rows = loader::read_orders(file.path().to_str().unwrap()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].first_name, "Ada");
    assert_eq!(rows[0].postal_code, "02134", "leading zero survives ingestion");
    assert_eq!(rows[0].order_id, "0042");
    assert_eq!(rows[0].order_total, "1000.0");
}

#[test]
fn missing_column_rejected_before_any_rows() {
    let file = write_csv(&[
        "first_name,last_name,date_of_birth,street,city,state,postal_code,phone,email,product_name,price,order_id,order_date,quantity",
        "Ada,Lovelace,1815-12-10,12 Byron Row,London,LN,02134,555-0100,ada@example.com,Analytical Engine,1000.0,0042,06/14/1843,1",
    ]);

    match loader::read_orders(file.path().to_str().unwrap()) {
        Err(MartError::HeaderMismatch { missing, unexpected }) => {
            assert_eq!(missing, vec!["order_total".to_string()]);
            assert!(unexpected.is_empty());
        }
        other => panic!("expected HeaderMismatch, got {other:?}"),
    }
}

#[test]
fn unexpected_column_rejected() {
    let file = write_csv(&[
        "first_name,last_name,date_of_birth,street,city,state,postal_code,phone,email,product_name,price,order_id,order_date,quantity,order_total,loyalty_tier",
        "Ada,Lovelace,1815-12-10,12 Byron Row,London,LN,02134,555-0100,ada@example.com,Analytical Engine,1000.0,0042,06/14/1843,1,1000.0,gold",
    ]);

    match loader::read_orders(file.path().to_str().unwrap()) {
        Err(MartError::HeaderMismatch { missing, unexpected }) => {
            assert!(missing.is_empty());
            assert_eq!(unexpected, vec!["loyalty_tier".to_string()]);
        }
        other => panic!("expected HeaderMismatch, got {other:?}"),
    }
}

#[test]
fn missing_file_is_fatal() {
    assert!(loader::read_orders("/no/such/path/orders.csv").is_err());
}
