//! Snapshot export
//!
//! Serializes a set of category ledgers to JSON and CSV with schema
//! versioning. Nothing here opens files; callers hand in any writer.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Money, MAX_NAME_LEN};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0.0";

/// Serialized view of a set of category ledgers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// All categories with their ledgers
    pub categories: Vec<Category>,

    /// Snapshot metadata
    pub metadata: SnapshotMetadata,
}

/// Snapshot metadata for reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Total number of categories
    pub category_count: usize,

    /// Total number of ledger entries
    pub transaction_count: usize,

    /// Sum of all category balances
    pub total_balance: Money,

    /// Sum of all category spending
    pub total_spent: Money,
}

impl SnapshotMetadata {
    /// Compute the metadata a set of categories should carry
    fn for_categories(categories: &[Category]) -> Self {
        Self {
            category_count: categories.len(),
            transaction_count: categories.iter().map(|c| c.ledger().len()).sum(),
            total_balance: categories.iter().map(Category::balance).sum(),
            total_spent: categories.iter().map(Category::spent).sum(),
        }
    }
}

impl LedgerSnapshot {
    /// Build a snapshot from a set of categories
    pub fn from_categories(categories: &[Category]) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            metadata: SnapshotMetadata::for_categories(categories),
            categories: categories.to_vec(),
        }
    }

    /// Validate the snapshot structure
    ///
    /// Deserialization bypasses the category constructors, so imported
    /// data is checked against the same rules here: name length, a
    /// non-negative running balance after every ledger entry, and a
    /// metadata block that matches the ledgers it describes.
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                SNAPSHOT_SCHEMA_VERSION, self.schema_version
            ));
        }

        for category in &self.categories {
            if category.name().chars().count() > MAX_NAME_LEN {
                return Err(format!(
                    "Category name exceeds {} characters: {}",
                    MAX_NAME_LEN,
                    category.name()
                ));
            }

            let mut running = Money::zero();
            for (i, txn) in category.ledger().iter().enumerate() {
                running += txn.amount;
                if running.is_negative() {
                    return Err(format!(
                        "Category '{}' is overdrawn after entry {}",
                        category.name(),
                        i + 1
                    ));
                }
            }
        }

        let expected = SnapshotMetadata::for_categories(&self.categories);
        if self.metadata != expected {
            return Err(format!(
                "Metadata does not match the ledgers: expected {} categories, \
                 {} entries, balance {}, spent {}",
                expected.category_count,
                expected.transaction_count,
                expected.total_balance,
                expected.total_spent
            ));
        }

        Ok(())
    }
}

/// Export a snapshot of the categories as JSON
pub fn export_snapshot_json<W: Write>(
    categories: &[Category],
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let snapshot = LedgerSnapshot::from_categories(categories);

    if pretty {
        serde_json::to_writer_pretty(writer, &snapshot)
    } else {
        serde_json::to_writer(writer, &snapshot)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Import a snapshot from JSON (for verification/restore)
pub fn import_snapshot_json(json_str: &str) -> BudgetResult<LedgerSnapshot> {
    let snapshot: LedgerSnapshot =
        serde_json::from_str(json_str).map_err(|e| BudgetError::Import(e.to_string()))?;

    snapshot.validate().map_err(BudgetError::Import)?;

    Ok(snapshot)
}

/// Export all ledger entries to CSV, one row per entry
pub fn export_transactions_csv<W: Write>(
    categories: &[Category],
    writer: &mut W,
) -> BudgetResult<()> {
    writeln!(writer, "category,description,amount")
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for category in categories {
        for txn in category.ledger() {
            writeln!(
                writer,
                "{},{},{}",
                escape_csv(category.name()),
                escape_csv(&txn.description),
                txn.amount
            )
            .map_err(|e| BudgetError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
