use super::Result;
use crate::analysis::weekly::WeeklyRecord;
use csv::Writer;
use std::io::Write;
use std::path::Path;

/// Write the weekly table as CSV with the header
/// `product,week,sales,views,price,category,view_to_purchase,sales_pct_change,trend_score`.
/// An undefined `view_to_purchase` serializes to an empty field.
pub fn write_weekly_csv<W: Write>(sink: W, weekly: &[WeeklyRecord]) -> Result<()> {
    let mut writer = Writer::from_writer(sink);
    for record in weekly {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// [`write_weekly_csv`] straight to a file path.
pub fn write_weekly_csv_path<P: AsRef<Path>>(path: P, weekly: &[WeeklyRecord]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    for record in weekly {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
