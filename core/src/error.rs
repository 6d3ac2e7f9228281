use thiserror::Error;

#[derive(Error, Debug)]
pub enum MartError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input header mismatch: missing {missing:?}, unexpected {unexpected:?}")]
    HeaderMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("Missing value at row {row}, column '{column}'")]
    MissingValue { row: usize, column: &'static str },

    #[error("Row {row}, column '{column}': cannot parse '{value}' as a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Row {row}: negative order_total {value}")]
    NegativeTotal { row: usize, value: f64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type MartResult<T> = Result<T, MartError>;
