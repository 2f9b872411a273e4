//! Display formatting for receipts and warranties.
//!
//! The warranty engine returns raw dates and day counts; these helpers turn them
//! into the short strings the bot layer shows to users.

use crate::{
    core::warranty::UrgencyTier,
    entities::receipt,
    errors::{Error, Result},
};
use chrono::NaiveDate;

/// Placeholder shown for receipts recorded without a store name.
pub const UNKNOWN_STORE: &str = "Unknown Store";

/// Formats a date like `Jan 15, 2025`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parses user-entered `YYYY-MM-DD` text.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}

/// Formats an optional amount like `$12.50`, showing `$0.00` when absent.
#[must_use]
pub fn format_amount(amount: Option<f64>) -> String {
    format!("${:.2}", amount.unwrap_or(0.0))
}

/// Store name for display, falling back to [`UNKNOWN_STORE`].
#[must_use]
pub fn display_store_name(receipt: &receipt::Model) -> &str {
    receipt.store_name.as_deref().unwrap_or(UNKNOWN_STORE)
}

/// Formats a day count like `1 day left` or `12 days left`.
#[must_use]
pub fn format_days_left(days: i64) -> String {
    if days == 1 {
        "1 day left".to_string()
    } else {
        format!("{days} days left")
    }
}

/// Status marker shown next to a warranty of the given tier.
#[must_use]
pub const fn tier_badge(tier: UrgencyTier) -> &'static str {
    match tier {
        UrgencyTier::Critical => "🔴",
        UrgencyTier::Warning => "🟡",
        UrgencyTier::Normal => "🟢",
        UrgencyTier::None => "⚪",
    }
}

/// Section heading for a reminders bucket.
#[must_use]
pub const fn tier_heading(tier: UrgencyTier) -> &'static str {
    match tier {
        UrgencyTier::Critical => "URGENT - Expiring This Week",
        UrgencyTier::Warning => "Expiring This Month",
        UrgencyTier::Normal => "Future Warranties",
        UrgencyTier::None => "No Warranty",
    }
}

/// One-line summary of a receipt: `#id | store | category | $amount | date`.
#[must_use]
pub fn format_receipt_line(receipt: &receipt::Model) -> String {
    format!(
        "#{} | {} | {} | {} | {}",
        receipt.id,
        display_store_name(receipt),
        receipt.category,
        format_amount(receipt.amount),
        format_date(receipt.purchase_date)
    )
}
