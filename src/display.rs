//! Terminal display formatting
//!
//! Formats category summaries for terminal output. The per-category
//! ledger report and the spend chart render through their own types.

use crate::models::Category;

/// Format a balance and spending summary table for a set of categories
pub fn format_category_summary(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories yet.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>10}  {:>10}\n",
        "Category",
        "Balance",
        "Spent",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->10}  {:->10}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:>10}  {:>10}\n",
            category.name(),
            category.balance().to_string(),
            category.spent().to_string(),
            width = name_width
        ));
    }

    output
}
