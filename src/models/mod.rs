//! Core data models for spendbook
//!
//! This module contains the data structures that represent the budgeting
//! domain: money amounts, ledger transactions, and spending categories.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::{Category, MAX_NAME_LEN};
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
