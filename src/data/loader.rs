use super::{DataFormatError, Result, Transaction};
use chrono::{NaiveDate, Weekday};
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

pub struct DataLoader;

impl DataLoader {
    fn verify_required_columns(headers: &[String]) -> Result<()> {
        let required_columns =
            ["date", "product", "category", "sales", "views", "price"].map(String::from);
        let headers_set: HashSet<_> = headers.iter().map(|s| s.to_lowercase()).collect();

        for column in required_columns {
            if !headers_set.contains(&column.to_lowercase()) {
                return Err(DataFormatError::MissingColumn(column));
            }
        }
        Ok(())
    }

    /// Label for the Monday-start calendar week containing `date`, formatted
    /// as `"<week-start>/<week-end>"`. Two dates get the same label iff they
    /// fall in the same Monday–Sunday span; labels sort chronologically.
    pub fn week_label(date: NaiveDate) -> String {
        let week = date.week(Weekday::Mon);
        format!("{}/{}", week.first_day(), week.last_day())
    }

    /// Load transactions from a CSV file, deriving the `week` column.
    pub fn load_data<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
        let rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&path)?;
        Self::read_transactions(rdr)
    }

    /// Load transactions from an in-memory byte stream with the same
    /// contract as [`DataLoader::load_data`].
    pub fn load_from_reader<R: Read>(source: R) -> Result<Vec<Transaction>> {
        let rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);
        Self::read_transactions(rdr)
    }

    fn read_transactions<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Transaction>> {
        let headers: Vec<String> = rdr.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
            return Err(DataFormatError::EmptySource);
        }
        Self::verify_required_columns(&headers)?;

        // Any row that fails to parse aborts the whole load; no partial tables.
        let mut transactions = Vec::new();
        for result in rdr.deserialize() {
            let mut record: Transaction = result?;
            record.week = Self::week_label(record.date);
            transactions.push(record);
        }
        Ok(transactions)
    }
}
