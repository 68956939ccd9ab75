//! Weekly sales-trend rollups for per-transaction e-commerce data.
//!
//! The pipeline has three stages: [`data::loader::DataLoader`] parses raw
//! transactions and derives a calendar-week key, [`analysis::weekly::compute_weekly`]
//! rolls them up to one row per (product, week), and
//! [`analysis::trending::find_trending`] ranks products by week-over-week
//! sales change in both directions.

pub mod analysis;
pub mod config;
pub mod data;
