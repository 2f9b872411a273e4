//! Warranty expiry business logic.
//!
//! This module derives warranty expiry dates from purchase dates, measures how many
//! calendar days remain until a warranty ends, and sorts receipts into urgency tiers
//! for the home and reminders views. Every function here is pure: the caller supplies
//! "today" as a calendar date, so one rendered view always uses a single reference
//! day and a receipt can never land in two tiers at once.

use crate::entities::receipt;
use chrono::{Months, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

/// Warranties ending within this many days are critical.
pub const CRITICAL_WITHIN_DAYS: i64 = 7;

/// Warranties ending within this many days (and not critical) are a warning.
pub const WARNING_WITHIN_DAYS: i64 = 30;

/// How urgently a warranty needs attention. Recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    /// Ends within a week (or already ended)
    Critical,
    /// Ends within a month
    Warning,
    /// Ends more than a month from now
    Normal,
    /// The receipt has no warranty
    None,
}

/// Derived warranty figures for one receipt at a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarrantyStatus {
    /// Last day of cover
    pub expiry: NaiveDate,
    /// Calendar days from the reference day to `expiry`
    pub days_remaining: i64,
    /// Tier for `days_remaining`
    pub tier: UrgencyTier,
}

/// Receipts with active warranties grouped by tier, each group soonest-first.
#[derive(Debug, Clone, Default)]
pub struct ReminderBuckets {
    /// Ending within a week
    pub critical: Vec<receipt::Model>,
    /// Ending within a month
    pub warning: Vec<receipt::Model>,
    /// Ending later
    pub normal: Vec<receipt::Model>,
}

impl ReminderBuckets {
    /// Total receipts across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.critical.len() + self.warning.len() + self.normal.len()
    }

    /// Whether every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buckets in display order, paired with their tier.
    #[must_use]
    pub fn in_display_order(&self) -> [(UrgencyTier, &[receipt::Model]); 3] {
        [
            (UrgencyTier::Critical, self.critical.as_slice()),
            (UrgencyTier::Warning, self.warning.as_slice()),
            (UrgencyTier::Normal, self.normal.as_slice()),
        ]
    }
}

/// Computes the warranty expiry for a purchase.
///
/// Returns `None` when `warranty_months` is absent, zero or negative. Otherwise the
/// purchase date is advanced by that many calendar months, keeping the day of month
/// where possible and clamping to the last day of the target month otherwise
/// (Jan 31 + 1 month is Feb 28, or Feb 29 in a leap year).
#[must_use]
pub fn compute_expiry(purchase_date: NaiveDate, warranty_months: Option<i32>) -> Option<NaiveDate> {
    let months = u32::try_from(warranty_months?).ok().filter(|&m| m > 0)?;
    purchase_date.checked_add_months(Months::new(months))
}

/// Calendar days from `today` until `expiry`.
///
/// Zero on the expiry day itself, negative once the warranty has ended.
#[must_use]
pub fn days_remaining(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

/// Maps a days-remaining count onto a tier. Never returns [`UrgencyTier::None`].
#[must_use]
pub const fn classify(days_remaining: i64) -> UrgencyTier {
    if days_remaining <= CRITICAL_WITHIN_DAYS {
        UrgencyTier::Critical
    } else if days_remaining <= WARNING_WITHIN_DAYS {
        UrgencyTier::Warning
    } else {
        UrgencyTier::Normal
    }
}

/// Warranty figures for a receipt, or `None` when it has no warranty.
#[must_use]
pub fn warranty_status(receipt: &receipt::Model, today: NaiveDate) -> Option<WarrantyStatus> {
    let expiry = receipt.warranty_expiry?;
    let days_remaining = days_remaining(expiry, today);
    Some(WarrantyStatus {
        expiry,
        days_remaining,
        tier: classify(days_remaining),
    })
}

/// Tier of a receipt, [`UrgencyTier::None`] when it has no warranty.
#[must_use]
pub fn tier_for_receipt(receipt: &receipt::Model, today: NaiveDate) -> UrgencyTier {
    warranty_status(receipt, today).map_or(UrgencyTier::None, |status| status.tier)
}

/// Selects receipts whose warranty is still running and ends within `window_days`.
///
/// Receipts without an expiry and receipts whose warranty ended before `today` are
/// dropped. With `window_days = None` there is no upper bound. The result is ordered
/// by expiry ascending, ties broken by id ascending.
#[must_use]
pub fn select_expiring_within(
    receipts: &[receipt::Model],
    today: NaiveDate,
    window_days: Option<i64>,
) -> Vec<receipt::Model> {
    let latest = match window_days {
        Some(days) => match TimeDelta::try_days(days).and_then(|d| today.checked_add_signed(d)) {
            Some(latest) => Some(latest),
            // A window reaching past the calendar range bounds nothing
            None if days > 0 => None,
            None => return Vec::new(),
        },
        None => None,
    };

    let mut selected: Vec<receipt::Model> = receipts
        .iter()
        .filter(|r| {
            r.warranty_expiry.is_some_and(|expiry| {
                expiry >= today && latest.is_none_or(|latest| expiry <= latest)
            })
        })
        .cloned()
        .collect();

    selected.sort_by_key(|r| (r.warranty_expiry, r.id));
    selected
}

/// Groups every still-running warranty into critical, warning and normal buckets.
#[must_use]
pub fn partition_by_tier(receipts: &[receipt::Model], today: NaiveDate) -> ReminderBuckets {
    let mut buckets = ReminderBuckets::default();

    for receipt in select_expiring_within(receipts, today, None) {
        match tier_for_receipt(&receipt, today) {
            UrgencyTier::Critical => buckets.critical.push(receipt),
            UrgencyTier::Warning => buckets.warning.push(receipt),
            UrgencyTier::Normal => buckets.normal.push(receipt),
            UrgencyTier::None => {}
        }
    }

    buckets
}
