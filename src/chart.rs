//! Spend chart
//!
//! Percentage-of-spending breakdown across categories and the text bar
//! chart that renders it.

use serde::Serialize;

use crate::models::{Category, Money};

/// Spending share for one category
#[derive(Debug, Clone, Serialize)]
pub struct CategorySpend {
    /// Category name
    pub name: String,
    /// Total withdrawn, as a positive amount
    pub spent: Money,
    /// Share of all spending, 0.0 to 100.0
    pub percentage: f64,
}

/// Compute each category's share of the total spending
///
/// Returns one entry per category in input order. Shares are 0.0 across
/// the board when nothing has been withdrawn from any category.
pub fn spend_breakdown(categories: &[Category]) -> Vec<CategorySpend> {
    let total: Money = categories.iter().map(Category::spent).sum();

    categories
        .iter()
        .map(|category| {
            let spent = category.spent();
            let percentage = if total.is_zero() {
                0.0
            } else {
                (spent.cents() as f64 / total.cents() as f64) * 100.0
            };
            CategorySpend {
                name: category.name().to_string(),
                spent,
                percentage,
            }
        })
        .collect()
}

/// Render the percentage-spent bar chart
///
/// Eleven grid rows run from 100 down to 0. A category gets a marker on a
/// row when its share of total spending, rounded down to the nearest ten
/// percent, reaches that row. Categories that have spent nothing sit on
/// the 0 row, as does everything when there is no spending at all. Names
/// are spelled vertically under the chart base. No trailing newline.
pub fn create_spend_chart(categories: &[Category]) -> String {
    let spent: Vec<Money> = categories.iter().map(Category::spent).collect();
    let total: Money = spent.iter().copied().sum();

    let mut chart = String::from("Percentage spent by category");

    for tens in (0..=10).rev() {
        chart.push_str(&format!("\n{:>3}| ", tens * 10));
        for &amount in &spent {
            // floor(share / 10) >= tens, carried out in exact cents
            let marker = if total.is_zero() {
                tens == 0
            } else {
                amount.cents() * 10 >= total.cents() * tens
            };
            chart.push_str(if marker { "o  " } else { "   " });
        }
    }

    chart.push_str("\n    -");
    chart.push_str(&"---".repeat(categories.len()));

    let labels: Vec<Vec<char>> = categories
        .iter()
        .map(|c| c.name().chars().collect())
        .collect();
    let label_rows = labels.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..label_rows {
        chart.push_str("\n     ");
        for label in &labels {
            match label.get(row) {
                Some(&ch) => {
                    chart.push(ch);
                    chart.push_str("  ");
                }
                None => chart.push_str("   "),
            }
        }
    }

    chart
}
