use super::weekly::WeeklyRecord;
use crate::data::Transaction;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Totals for one category across the raw transaction table.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub sales: f64,
    pub revenue: f64,
    pub products: usize,
}

struct CategoryAccumulator {
    sales: f64,
    revenue: f64,
    products: HashSet<String>,
}

/// Per-category sales, revenue (`sales * price` per transaction) and
/// distinct product counts, sorted by category name.
pub fn category_performance(transactions: &[Transaction]) -> Vec<CategorySummary> {
    let mut groups: HashMap<String, CategoryAccumulator> = HashMap::new();
    for tx in transactions {
        let acc = groups
            .entry(tx.category.clone())
            .or_insert_with(|| CategoryAccumulator {
                sales: 0.0,
                revenue: 0.0,
                products: HashSet::new(),
            });
        acc.sales += tx.sales;
        acc.revenue += tx.sales * tx.price;
        acc.products.insert(tx.product.clone());
    }

    let mut summaries: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, acc)| CategorySummary {
            category,
            sales: acc.sales,
            revenue: acc.revenue,
            products: acc.products.len(),
        })
        .collect();
    summaries.sort_by(|a, b| a.category.cmp(&b.category));
    summaries
}

/// Distinct products in the weekly table, sorted.
pub fn products(weekly: &[WeeklyRecord]) -> Vec<String> {
    let mut products: Vec<String> = weekly
        .iter()
        .map(|r| r.product.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    products.sort();
    products
}

/// One product's weekly rows, ordered by week ascending.
pub fn product_history(weekly: &[WeeklyRecord], product: &str) -> Vec<WeeklyRecord> {
    let mut history: Vec<WeeklyRecord> = weekly
        .iter()
        .filter(|r| r.product == product)
        .cloned()
        .collect();
    history.sort_by(|a, b| a.week.cmp(&b.week));
    history
}
