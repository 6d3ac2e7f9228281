//! The flat order record, before and after cleaning.

use serde::{Deserialize, Serialize};

/// The expected input header set, in column order.
pub const COLUMNS: [&str; 15] = [
    "first_name",
    "last_name",
    "date_of_birth",
    "street",
    "city",
    "state",
    "postal_code",
    "phone",
    "email",
    "product_name",
    "price",
    "order_id",
    "order_date",
    "quantity",
    "order_total",
];

/// One row of the flat export, exactly as the file said it. Every field
/// is text; typing happens in the cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    pub product_name: String,
    pub price: String,
    pub order_id: String,
    pub order_date: String,
    pub quantity: String,
    pub order_total: String,
}

impl RawRecord {
    /// Field name/value pairs in input column order.
    pub fn fields(&self) -> [(&'static str, &str); 15] {
        [
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("date_of_birth", self.date_of_birth.as_str()),
            ("street", self.street.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("postal_code", self.postal_code.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("product_name", self.product_name.as_str()),
            ("price", self.price.as_str()),
            ("order_id", self.order_id.as_str()),
            ("order_date", self.order_date.as_str()),
            ("quantity", self.quantity.as_str()),
            ("order_total", self.order_total.as_str()),
        ]
    }
}

/// A cleaned row. `postal_code` and `order_id` stay text so leading
/// zeros survive; `order_total` carries two-decimal semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    pub product_name: String,
    pub price: f64,
    pub order_id: String,
    pub order_date: String,
    pub quantity: i64,
    pub order_total: f64,
}

impl CleanRecord {
    /// Re-render in flat text form, as the cleaned export prints:
    /// `order_total` keeps its two-decimal formatting, everything else
    /// is rendered unchanged.
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            product_name: self.product_name.clone(),
            price: format!("{}", self.price),
            order_id: self.order_id.clone(),
            order_date: self.order_date.clone(),
            quantity: self.quantity.to_string(),
            order_total: format!("{:.2}", self.order_total),
        }
    }
}
