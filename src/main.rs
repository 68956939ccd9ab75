use anyhow::Result;
use std::env;

use trend_toolkit::analysis::summary;
use trend_toolkit::analysis::trending::{self, TrendDirection};
use trend_toolkit::analysis::weekly::{self, WeeklyRecord};
use trend_toolkit::config::Config;
use trend_toolkit::data::{export, loader::DataLoader};

fn main() -> Result<()> {
    let config = Config::load("config/trends.yaml")?;

    // Get data file path from command line or use the configured sample
    let data_path = env::args()
        .nth(1)
        .unwrap_or_else(|| config.data.sample_path.clone());

    println!("Loading transactions from: {}", data_path);
    let transactions = DataLoader::load_data(&data_path)?;
    println!("Loaded {} transactions", transactions.len());

    let weekly = weekly::compute_weekly(&transactions);
    let products = summary::products(&weekly);
    println!(
        "\nWeekly rollup: {} product-week rows across {} products",
        weekly.len(),
        products.len()
    );

    println!("\n=== Category Performance ===");
    println!(
        "{:<20} {:>10} {:>14} {:>10}",
        "Category", "Sales", "Revenue", "Products"
    );
    println!("{:-<58}", "");
    for row in summary::category_performance(&transactions) {
        println!(
            "{:<20} {:>10.0} {:>14.2} {:>10}",
            row.category, row.sales, row.revenue, row.products
        );
    }

    let ranking = trending::find_trending_top(&weekly, config.ranking.top_n);
    println!("\n=== Top Rising Products (latest week) ===");
    print_trend_table(&ranking.rising, &config);
    println!("\n=== Top Falling Products (latest week) ===");
    print_trend_table(&ranking.falling, &config);

    // Optional second argument: where to export the weekly dataset
    if let Some(out_path) = env::args().nth(2) {
        export::write_weekly_csv_path(&out_path, &weekly)?;
        println!("\nWrote weekly dataset to {}", out_path);
    }

    Ok(())
}

fn print_trend_table(records: &[WeeklyRecord], config: &Config) {
    println!(
        "{:<25} {:<23} {:>8} {:>8} {:>8}  {:<15}",
        "Product", "Week", "Sales", "Trend", "V/P", "Status"
    );
    println!("{:-<94}", "");
    for record in records {
        let direction = TrendDirection::classify(
            record.trend_score,
            config.classification.growth_threshold,
            config.classification.rapid_threshold,
        );
        let view_to_purchase = record
            .view_to_purchase
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<25} {:<23} {:>8.0} {:>7.1}% {:>8}  {:<15}",
            record.product,
            record.week,
            record.sales,
            record.trend_score * 100.0,
            view_to_purchase,
            direction.label()
        );
    }
}
