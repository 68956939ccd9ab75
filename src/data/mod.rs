pub mod export;
pub mod loader;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub product: String,
    pub category: String,
    pub sales: f64,
    pub views: f64,
    pub price: f64,
    /// Monday-start calendar week containing `date`, derived by the loader.
    #[serde(skip)]
    pub week: String,
}

#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Empty data source")]
    EmptySource,
}

pub type Result<T> = std::result::Result<T, DataFormatError>;
