//! Receipt vault filtering.
//!
//! The vault lists a user's receipts newest purchase first and lets them narrow the
//! list by category and by a free-text search over store name and category label.

use crate::{core::category::CategoryFilter, entities::receipt};

/// Filters receipts by category and a case-insensitive search query.
///
/// `CategoryFilter::All` keeps every category. A non-empty `query` keeps receipts
/// whose store name or category label contains it, ignoring case; a receipt without
/// a store name can still match on its category. Input order is preserved, so callers
/// pass receipts already sorted for display.
#[must_use]
pub fn filter_by_category_and_query(
    receipts: &[receipt::Model],
    category: CategoryFilter,
    query: &str,
) -> Vec<receipt::Model> {
    let needle = query.to_lowercase();

    receipts
        .iter()
        .filter(|r| category.matches(r.category))
        .filter(|r| needle.is_empty() || matches_query(r, &needle))
        .cloned()
        .collect()
}

fn matches_query(receipt: &receipt::Model, needle: &str) -> bool {
    let store_matches = receipt
        .store_name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(needle));

    store_matches || receipt.category.label().to_lowercase().contains(needle)
}
