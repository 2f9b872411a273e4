//! Core business logic - framework-agnostic receipt, warranty and vault operations.

/// Fixed receipt categories and the vault category filter
pub mod category;
/// Home and reminders views built from stored receipts
pub mod dashboard;
/// Display strings for dates, amounts and warranty tiers
pub mod format;
/// Receipt persistence: the scan flow, scoped queries and edits
pub mod receipt;
/// Vault filtering by category and search text
pub mod vault;
/// Warranty expiry computation and urgency classification
pub mod warranty;
