//! Transaction model
//!
//! A single signed ledger entry: positive amounts are deposits, negative
//! amounts are withdrawals (including the outgoing leg of a transfer).
//! Entries are immutable once appended to a category ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount (positive for deposits, negative for withdrawals)
    pub amount: Money,

    /// Free-form description; reports truncate it to 23 characters
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new ledger entry
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    /// Check if this is a deposit (positive amount)
    pub fn is_deposit(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is a withdrawal (negative amount)
    pub fn is_withdrawal(&self) -> bool {
        self.amount.is_negative()
    }
}

impl fmt::Display for Transaction {
    /// Render the 30-column report line: description left-aligned in 23
    /// columns, amount right-aligned in 7 with two decimals. Amounts wider
    /// than 7 columns push the line wider rather than losing digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc: String = self.description.chars().take(23).collect();
        write!(f, "{:<23}{:>7}", desc, self.amount.to_string())
    }
}
