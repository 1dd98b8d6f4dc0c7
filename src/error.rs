//! Custom error types for spendbook
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use crate::models::{Money, MoneyParseError};
use thiserror::Error;

/// The main error type for spendbook operations
///
/// Validation failures come in two families: invalid arguments (a value
/// that is the right kind but out of range) and type mismatches (text
/// that cannot be read as a money amount). Insufficient funds is not an
/// error at all; withdraw and transfer report it as `Ok(false)`.
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Deposit, withdrawal, or transfer amount that is zero or negative
    #[error("Amount must be positive: {0}")]
    NonPositiveAmount(Money),

    /// Category name longer than the report title field
    #[error("Category name exceeds {limit} characters: {name}")]
    NameTooLong { name: String, limit: usize },

    /// Text that could not be parsed as a money amount
    #[error("Amount is not a number: {0}")]
    AmountNotNumeric(String),

    /// Category lookup by name failed
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl BudgetError {
    /// Create a "not found" error for categories
    pub fn category_not_found(name: impl Into<String>) -> Self {
        Self::CategoryNotFound(name.into())
    }

    /// Check if this is an invalid-argument validation error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveAmount(_) | Self::NameTooLong { .. }
        )
    }

    /// Check if this is a type-mismatch validation error
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::AmountNotNumeric(_))
    }
}

impl From<MoneyParseError> for BudgetError {
    fn from(err: MoneyParseError) -> Self {
        let MoneyParseError::InvalidFormat(s) = err;
        Self::AmountNotNumeric(s)
    }
}

/// Result type alias for spendbook operations
pub type BudgetResult<T> = Result<T, BudgetError>;
