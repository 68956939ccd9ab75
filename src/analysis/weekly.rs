use crate::data::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated metrics for one product over one calendar week.
///
/// Field order matches the weekly CSV export header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyRecord {
    pub product: String,
    pub week: String,
    pub sales: f64,
    pub views: f64,
    pub price: f64,
    pub category: String,
    pub view_to_purchase: Option<f64>,
    pub sales_pct_change: f64,
    pub trend_score: f64,
}

struct WeeklyAccumulator {
    sales: f64,
    views: f64,
    prices: Vec<f64>,
    category: String,
}

/// Roll transactions up to one row per (product, week) that saw at least
/// one transaction, sorted by (product, week ascending).
///
/// Per group: `sales` and `views` are sums, `price` is the median,
/// `category` comes from the first transaction in input order.
/// `sales_pct_change` compares each week's sales to the product's previous
/// available week and stays 0.0 for a product's first week or when the
/// previous week's sales were zero. `trend_score` copies
/// `sales_pct_change` so ranking is decoupled from the backing metric.
pub fn compute_weekly(transactions: &[Transaction]) -> Vec<WeeklyRecord> {
    let mut groups: HashMap<(String, String), WeeklyAccumulator> = HashMap::new();
    for tx in transactions {
        let acc = groups
            .entry((tx.product.clone(), tx.week.clone()))
            .or_insert_with(|| WeeklyAccumulator {
                sales: 0.0,
                views: 0.0,
                prices: Vec::new(),
                category: tx.category.clone(),
            });
        acc.sales += tx.sales;
        acc.views += tx.views;
        acc.prices.push(tx.price);
    }

    let mut weekly: Vec<WeeklyRecord> = groups
        .into_iter()
        .map(|((product, week), mut acc)| {
            let view_to_purchase = (acc.sales > 0.0).then(|| acc.views / acc.sales);
            WeeklyRecord {
                product,
                week,
                sales: acc.sales,
                views: acc.views,
                price: median(&mut acc.prices),
                category: acc.category,
                view_to_purchase,
                sales_pct_change: 0.0,
                trend_score: 0.0,
            }
        })
        .collect();

    weekly.sort_by(|a, b| {
        (a.product.as_str(), a.week.as_str()).cmp(&(b.product.as_str(), b.week.as_str()))
    });

    // The pct-change scan is sequential per product; after the sort each
    // product's weeks form one contiguous ascending run.
    for i in 0..weekly.len() {
        if i > 0 && weekly[i - 1].product == weekly[i].product {
            let prev_sales = weekly[i - 1].sales;
            if prev_sales != 0.0 {
                weekly[i].sales_pct_change = (weekly[i].sales - prev_sales) / prev_sales;
            }
        }
        weekly[i].trend_score = weekly[i].sales_pct_change;
    }

    weekly
}

// Callers guarantee a non-empty slice (every group has at least one row).
fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::DataLoader;
    use approx::assert_relative_eq;

    fn tx(date: &str, product: &str, category: &str, sales: f64, views: f64, price: f64) -> Transaction {
        let date: chrono::NaiveDate = date.parse().unwrap();
        Transaction {
            date,
            product: product.to_string(),
            category: category.to_string(),
            sales,
            views,
            price,
            week: DataLoader::week_label(date),
        }
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_relative_eq!(median(&mut [5.0]), 5.0);
        assert_relative_eq!(median(&mut [9.0, 1.0, 5.0]), 5.0);
        assert_relative_eq!(median(&mut [6.0, 4.0]), 5.0);
        assert_relative_eq!(median(&mut [1.0, 7.0, 3.0, 5.0]), 4.0);
    }

    #[test]
    fn test_groups_by_product_and_week() {
        let transactions = vec![
            tx("2024-01-01", "Widget", "X", 6.0, 60.0, 4.0),
            tx("2024-01-03", "Widget", "X", 4.0, 40.0, 6.0),
            tx("2024-01-02", "Gadget", "Y", 3.0, 30.0, 2.0),
        ];
        let weekly = compute_weekly(&transactions);

        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[0].product, "Gadget");
        assert_eq!(weekly[1].product, "Widget");
        assert_relative_eq!(weekly[1].sales, 10.0);
        assert_relative_eq!(weekly[1].views, 100.0);
        // Even-sized group: median is the mean of the two middle prices
        assert_relative_eq!(weekly[1].price, 5.0);
        assert_relative_eq!(weekly[1].view_to_purchase.unwrap(), 10.0);
    }

    #[test]
    fn test_category_is_first_encountered() {
        let transactions = vec![
            tx("2024-01-01", "Widget", "Electronics", 1.0, 10.0, 5.0),
            tx("2024-01-02", "Widget", "Accessories", 1.0, 10.0, 5.0),
        ];
        let weekly = compute_weekly(&transactions);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].category, "Electronics");
    }

    #[test]
    fn test_week_over_week_growth() {
        // Two distinct weeks, 10 -> 20 units: 100% growth
        let transactions = vec![
            tx("2024-01-01", "Widget", "X", 10.0, 100.0, 5.0),
            tx("2024-01-08", "Widget", "X", 20.0, 150.0, 5.0),
        ];
        let weekly = compute_weekly(&transactions);

        assert_eq!(weekly.len(), 2);
        assert_relative_eq!(weekly[0].sales_pct_change, 0.0);
        assert_relative_eq!(weekly[1].sales_pct_change, 1.0);
        assert_relative_eq!(weekly[1].trend_score, 1.0);
        assert_relative_eq!(weekly[0].view_to_purchase.unwrap(), 10.0);
        assert_relative_eq!(weekly[1].view_to_purchase.unwrap(), 7.5);
    }

    #[test]
    fn test_first_week_pct_change_is_zero() {
        let transactions = vec![tx("2024-01-01", "Widget", "X", 42.0, 100.0, 5.0)];
        let weekly = compute_weekly(&transactions);
        assert_relative_eq!(weekly[0].sales_pct_change, 0.0);
    }

    #[test]
    fn test_zero_sales_week() {
        let transactions = vec![tx("2024-01-01", "Widget", "X", 0.0, 30.0, 5.0)];
        let weekly = compute_weekly(&transactions);
        assert!(weekly[0].view_to_purchase.is_none());
        assert_relative_eq!(weekly[0].sales_pct_change, 0.0);
    }

    #[test]
    fn test_zero_base_growth_is_masked() {
        // Growth from a zero base stays 0.0 rather than going infinite
        let transactions = vec![
            tx("2024-01-01", "Widget", "X", 0.0, 10.0, 5.0),
            tx("2024-01-08", "Widget", "X", 500.0, 600.0, 5.0),
        ];
        let weekly = compute_weekly(&transactions);
        assert_relative_eq!(weekly[1].sales_pct_change, 0.0);
    }

    #[test]
    fn test_pct_change_does_not_cross_products() {
        let transactions = vec![
            tx("2024-01-01", "Gadget", "Y", 100.0, 200.0, 2.0),
            tx("2024-01-08", "Widget", "X", 50.0, 100.0, 5.0),
        ];
        let weekly = compute_weekly(&transactions);
        assert_relative_eq!(weekly[0].sales_pct_change, 0.0);
        assert_relative_eq!(weekly[1].sales_pct_change, 0.0);
    }
}
