//! Home and reminders views.
//!
//! Loads a user's receipts from the store and runs them through the warranty engine
//! with one caller-supplied "today", so every receipt in a view is measured against
//! the same day.

use crate::{
    config::settings::Settings,
    core::{
        receipt,
        warranty::{self, ReminderBuckets},
    },
    entities::receipt::Model as ReceiptModel,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Data behind the home screen.
#[derive(Debug, Clone)]
pub struct HomeSummary {
    /// Day the summary was computed for
    pub today: NaiveDate,
    /// Most recently recorded receipts
    pub recent: Vec<ReceiptModel>,
    /// Warranties ending within the configured window, soonest first
    pub upcoming: Vec<ReceiptModel>,
    /// Window used for `upcoming`
    pub window_days: i64,
}

/// Data behind the reminders screen.
#[derive(Debug, Clone)]
pub struct ReminderBoard {
    /// Day the board was computed for
    pub today: NaiveDate,
    /// Running warranties by tier
    pub buckets: ReminderBuckets,
}

/// Builds the home summary for a user.
pub async fn load_home_summary(
    db: &DatabaseConnection,
    user_id: &str,
    today: NaiveDate,
    settings: &Settings,
) -> Result<HomeSummary> {
    let recent = receipt::get_recent_receipts(db, user_id, settings.home.recent_limit).await?;
    let with_warranty = receipt::get_warranty_receipts_for_user(db, user_id).await?;
    let window_days = settings.reminders.upcoming_window_days;
    let upcoming = warranty::select_expiring_within(&with_warranty, today, Some(window_days));

    Ok(HomeSummary {
        today,
        recent,
        upcoming,
        window_days,
    })
}

/// Builds the reminders board for a user.
pub async fn load_reminder_board(
    db: &DatabaseConnection,
    user_id: &str,
    today: NaiveDate,
) -> Result<ReminderBoard> {
    let with_warranty = receipt::get_warranty_receipts_for_user(db, user_id).await?;

    Ok(ReminderBoard {
        today,
        buckets: warranty::partition_by_tier(&with_warranty, today),
    })
}
