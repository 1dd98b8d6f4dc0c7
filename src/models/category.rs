//! Category model
//!
//! A named spending category owning an append-only ledger of transactions.
//! Balance is derived by summing the ledger, never stored. Withdrawals and
//! transfers that would overdraw the balance are declined without touching
//! the ledger, so every prefix of a ledger sums to a non-negative balance.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BudgetError, BudgetResult};

use super::money::Money;
use super::transaction::Transaction;

/// Maximum category name length, matching the width of the report title line
pub const MAX_NAME_LEN: usize = 30;

/// A spending category with its own ledger
///
/// Fields stay private so the ledger can only grow through [`deposit`],
/// [`withdraw`], and [`transfer`], which enforce the balance invariant.
///
/// [`deposit`]: Category::deposit
/// [`withdraw`]: Category::withdraw
/// [`transfer`]: Category::transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, at most [`MAX_NAME_LEN`] characters
    name: String,

    /// Ledger entries in insertion order
    #[serde(default)]
    ledger: Vec<Transaction>,
}

impl Category {
    /// Create a new category with an empty ledger
    pub fn new(name: impl Into<String>) -> BudgetResult<Self> {
        let name = name.into();
        if name.chars().count() > MAX_NAME_LEN {
            return Err(BudgetError::NameTooLong {
                name,
                limit: MAX_NAME_LEN,
            });
        }
        Ok(Self {
            name,
            ledger: Vec::new(),
        })
    }

    /// Get the category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the ledger entries in insertion order
    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    /// Current balance: the sum of all ledger amounts
    pub fn balance(&self) -> Money {
        self.ledger.iter().map(|t| t.amount).sum()
    }

    /// Total withdrawn so far, as a positive amount
    pub fn spent(&self) -> Money {
        self.ledger
            .iter()
            .filter(|t| t.is_withdrawal())
            .map(|t| t.amount.abs())
            .sum()
    }

    /// Check whether the balance covers `amount`
    pub fn check_funds(&self, amount: Money) -> bool {
        amount <= self.balance()
    }

    /// Append a deposit to the ledger
    ///
    /// The amount must be strictly positive.
    pub fn deposit(&mut self, amount: Money, description: impl Into<String>) -> BudgetResult<()> {
        if !amount.is_positive() {
            return Err(BudgetError::NonPositiveAmount(amount));
        }
        self.ledger.push(Transaction::new(amount, description));
        Ok(())
    }

    /// Append a withdrawal to the ledger
    ///
    /// The amount must be strictly positive. Returns `Ok(false)` without
    /// touching the ledger when the balance cannot cover the amount.
    pub fn withdraw(
        &mut self,
        amount: Money,
        description: impl Into<String>,
    ) -> BudgetResult<bool> {
        if !amount.is_positive() {
            return Err(BudgetError::NonPositiveAmount(amount));
        }
        if !self.check_funds(amount) {
            return Ok(false);
        }
        self.ledger.push(Transaction::new(-amount, description));
        Ok(true)
    }

    /// Move funds to another category
    ///
    /// Withdraws from `self` described as `Transfer to {destination}` and
    /// deposits into `destination` described as `Transfer from {self}`.
    /// Returns `Ok(false)` and touches neither ledger when the balance
    /// cannot cover the amount. The two legs are appended one after the
    /// other with no shared record linking them. Transferring a category
    /// into itself would alias two `&mut` borrows and does not compile.
    pub fn transfer(&mut self, amount: Money, destination: &mut Category) -> BudgetResult<bool> {
        if !self.withdraw(amount, format!("Transfer to {}", destination.name))? {
            return Ok(false);
        }
        destination.deposit(amount, format!("Transfer from {}", self.name))?;
        Ok(true)
    }
}

impl fmt::Display for Category {
    /// Render the ledger report: the name centered in a 30-column field
    /// padded with `*`, one line per entry, and a closing total. No
    /// trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:*^30}", self.name)?;
        for txn in &self.ledger {
            write!(f, "\n{}", txn)?;
        }
        write!(f, "\nTotal: {}", self.balance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_with_deposit(cents: i64) -> Category {
        let mut category = Category::new("Food").unwrap();
        category.deposit(Money::from_cents(cents), "deposit").unwrap();
        category
    }

    #[test]
    fn test_new_category() {
        let category = Category::new("Food").unwrap();
        assert_eq!(category.name(), "Food");
        assert!(category.ledger().is_empty());
        assert_eq!(category.balance(), Money::zero());
    }

    #[test]
    fn test_name_at_limit() {
        let name = "a".repeat(30);
        let category = Category::new(name.clone()).unwrap();
        assert_eq!(category.name(), name);
    }

    #[test]
    fn test_name_too_long() {
        let err = Category::new("a".repeat(31)).unwrap_err();
        assert!(matches!(err, BudgetError::NameTooLong { limit: 30, .. }));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_deposit() {
        let mut category = Category::new("Food").unwrap();
        category
            .deposit(Money::from_cents(100000), "initial deposit")
            .unwrap();

        assert_eq!(category.ledger().len(), 1);
        assert_eq!(category.balance(), Money::from_cents(100000));
        assert!(category.ledger()[0].is_deposit());
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut category = Category::new("Food").unwrap();

        let err = category.deposit(Money::zero(), "nothing").unwrap_err();
        assert!(matches!(err, BudgetError::NonPositiveAmount(_)));

        let err = category
            .deposit(Money::from_cents(-100), "negative")
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(category.ledger().is_empty());
    }

    #[test]
    fn test_withdraw() {
        let mut category = food_with_deposit(100000);
        let ok = category
            .withdraw(Money::from_cents(1015), "groceries")
            .unwrap();

        assert!(ok);
        assert_eq!(category.balance(), Money::from_cents(98985));
        assert_eq!(category.ledger().len(), 2);
        assert!(category.ledger()[1].is_withdrawal());
        assert_eq!(category.ledger()[1].amount, Money::from_cents(-1015));
    }

    #[test]
    fn test_withdraw_insufficient_funds_declines() {
        let mut category = food_with_deposit(1000);
        let ok = category
            .withdraw(Money::from_cents(1001), "too much")
            .unwrap();

        assert!(!ok);
        assert_eq!(category.ledger().len(), 1);
        assert_eq!(category.balance(), Money::from_cents(1000));
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let mut category = food_with_deposit(1000);
        let ok = category
            .withdraw(Money::from_cents(1000), "everything")
            .unwrap();

        assert!(ok);
        assert_eq!(category.balance(), Money::zero());
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut category = food_with_deposit(1000);
        let err = category.withdraw(Money::zero(), "nothing").unwrap_err();
        assert!(matches!(err, BudgetError::NonPositiveAmount(_)));
        assert_eq!(category.ledger().len(), 1);
    }

    #[test]
    fn test_check_funds() {
        let category = food_with_deposit(1000);
        assert!(category.check_funds(Money::from_cents(999)));
        assert!(category.check_funds(Money::from_cents(1000)));
        assert!(!category.check_funds(Money::from_cents(1001)));
    }

    #[test]
    fn test_transfer() {
        let mut food = food_with_deposit(100000);
        let mut clothing = Category::new("Clothing").unwrap();

        let ok = food.transfer(Money::from_cents(5000), &mut clothing).unwrap();

        assert!(ok);
        assert_eq!(food.balance(), Money::from_cents(95000));
        assert_eq!(clothing.balance(), Money::from_cents(5000));
        assert_eq!(food.ledger()[1].description, "Transfer to Clothing");
        assert_eq!(clothing.ledger()[0].description, "Transfer from Food");
    }

    #[test]
    fn test_transfer_insufficient_funds_declines() {
        let mut food = food_with_deposit(1000);
        let mut clothing = Category::new("Clothing").unwrap();

        let ok = food.transfer(Money::from_cents(5000), &mut clothing).unwrap();

        assert!(!ok);
        assert_eq!(food.ledger().len(), 1);
        assert!(clothing.ledger().is_empty());
    }

    #[test]
    fn test_transfer_rejects_non_positive() {
        let mut food = food_with_deposit(1000);
        let mut clothing = Category::new("Clothing").unwrap();

        let err = food
            .transfer(Money::from_cents(-100), &mut clothing)
            .unwrap_err();
        assert!(matches!(err, BudgetError::NonPositiveAmount(_)));
        assert_eq!(food.ledger().len(), 1);
        assert!(clothing.ledger().is_empty());
    }

    #[test]
    fn test_spent_counts_only_withdrawals() {
        let mut food = food_with_deposit(100000);
        food.withdraw(Money::from_cents(1015), "groceries").unwrap();
        food.withdraw(Money::from_cents(1589), "restaurant").unwrap();

        assert_eq!(food.spent(), Money::from_cents(2604));
        assert_eq!(food.balance(), Money::from_cents(97396));
    }

    #[test]
    fn test_display_report() {
        let mut food = Category::new("Food").unwrap();
        let mut clothing = Category::new("Clothing").unwrap();

        food.deposit(Money::from_cents(100000), "deposit").unwrap();
        food.withdraw(Money::from_cents(1015), "groceries").unwrap();
        food.withdraw(
            Money::from_cents(1589),
            "restaurant and more food for dessert",
        )
        .unwrap();
        food.transfer(Money::from_cents(5000), &mut clothing).unwrap();

        let expected = "\
*************Food*************\n\
deposit                1000.00\n\
groceries               -10.15\n\
restaurant and more foo -15.89\n\
Transfer to Clothing    -50.00\n\
Total: 923.96";
        assert_eq!(food.to_string(), expected);
    }

    #[test]
    fn test_display_empty_ledger() {
        let category = Category::new("Food").unwrap();
        assert_eq!(
            category.to_string(),
            "*************Food*************\nTotal: 0.00"
        );
    }

    #[test]
    fn test_display_name_at_field_width() {
        let category = Category::new("a".repeat(30)).unwrap();
        let report = category.to_string();
        assert!(report.starts_with(&"a".repeat(30)));
        assert!(!report.contains('*'));
    }

    #[test]
    fn test_serialization() {
        let mut food = food_with_deposit(100000);
        food.withdraw(Money::from_cents(1015), "groceries").unwrap();

        let json = serde_json::to_string(&food).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(food, deserialized);
        assert_eq!(deserialized.balance(), Money::from_cents(98985));
    }
}
