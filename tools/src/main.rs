//! mart-runner: headless loader and report runner for the sales data mart.
//!
//! Usage:
//!   mart-runner --input data/historical_orders.csv --db sales_mart.db
//!   mart-runner --config mart_config.json --preview-rows 20

mod render;

use anyhow::Result;
use salesmart_core::{config::MartConfig, pipeline, report, store::MartStore};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match arg_value(&args, "--config") {
        Some(path) => MartConfig::load(path)?,
        None => MartConfig::default(),
    };
    if let Some(input) = arg_value(&args, "--input") {
        config.input_csv = input.to_string();
    }
    if let Some(db) = arg_value(&args, "--db") {
        config.db_path = db.to_string();
    }
    let preview_rows = parse_arg(&args, "--preview-rows", 10usize);

    println!("Sales Data Mart (mart-runner)");
    println!("  input: {}", config.input_csv);
    println!("  db:    {}", config.db_path);
    println!();

    let store = MartStore::open(&config.db_path)?;
    let summary = pipeline::run(&config, &store)?;

    println!("=== LOAD SUMMARY ===");
    println!("  raw rows:           {}", summary.raw_rows);
    println!("  duplicates dropped: {}", summary.duplicates_dropped);
    println!("  rows per table:     {}", summary.cleaned_rows());
    println!();

    render::print_cleaned_preview(&summary.cleaned, preview_rows);

    for report in report::run_all(&store)? {
        render::print_report(&report);
    }

    Ok(())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
