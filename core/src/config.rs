//! Run configuration: input/output paths plus the constants the source
//! export does not carry (address validity window, default order status).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validity window stamped on every address row. The export has no
/// address history, so the window is a configured constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MartConfig {
    pub input_csv: String,
    pub db_path: String,
    pub address_window: AddressWindow,
    /// Status stamped on every order; the export has no status column.
    pub order_status_default: bool,
}

impl Default for MartConfig {
    fn default() -> Self {
        Self {
            input_csv: "data/historical_orders.csv".to_string(),
            db_path: "historical_sales_records.db".to_string(),
            address_window: AddressWindow {
                start_date: NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid date"),
                end_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            },
            order_status_default: true,
        }
    }
}

impl MartConfig {
    /// Load from a JSON file. Keys left out of the file keep their
    /// default values.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: MartConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
