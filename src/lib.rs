//! spendbook - In-memory budgeting ledger
//!
//! This library tracks deposits, withdrawals, and transfers across named
//! spending categories, and renders text reports: a per-category ledger,
//! a balance summary table, and a percentage-spent bar chart. Everything
//! lives in memory; the only outputs are formatted strings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, categories)
//! - `chart`: Spending breakdown and the text bar chart
//! - `display`: Terminal summary formatting
//! - `export`: JSON and CSV snapshot serialization
//! - `cli`: Demo and interactive session commands
//!
//! # Example
//!
//! ```rust
//! use spendbook::models::{Category, Money};
//!
//! # fn main() -> spendbook::error::BudgetResult<()> {
//! let mut food = Category::new("Food")?;
//! food.deposit(Money::from_cents(100000), "deposit")?;
//! let paid = food.withdraw(Money::from_cents(1015), "groceries")?;
//! assert!(paid);
//! assert_eq!(food.balance(), Money::from_cents(98985));
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod cli;
pub mod display;
pub mod error;
pub mod export;
pub mod models;

pub use chart::{create_spend_chart, spend_breakdown, CategorySpend};
pub use error::{BudgetError, BudgetResult};
pub use models::{Category, Money, Transaction};
