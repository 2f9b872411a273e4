//! Shared test utilities for Receipt Vault.
//!
//! This module provides helpers for setting up test databases, creating stored
//! receipts with sensible defaults, and building in-memory receipt models for the
//! pure warranty and vault functions.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        category::Category,
        receipt::{self, NewReceipt},
        warranty::compute_expiry,
    },
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a calendar date in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Stores a receipt with sensible defaults.
///
/// # Defaults
/// * `store_name`: `"Test Store"`
/// * `amount`: 49.99
/// * `category`: Electronics
pub async fn create_test_receipt(
    db: &DatabaseConnection,
    user_id: &str,
    purchase_date: NaiveDate,
    warranty_months: Option<i32>,
) -> Result<entities::receipt::Model> {
    let mut new = NewReceipt::new(user_id, purchase_date, Category::Electronics);
    new.store_name = Some("Test Store".to_string());
    new.amount = Some(49.99);
    new.warranty_months = warranty_months;
    receipt::create_receipt(db, new).await
}

/// Stores a receipt with a custom store name and category.
pub async fn create_custom_receipt(
    db: &DatabaseConnection,
    user_id: &str,
    store_name: Option<&str>,
    category: Category,
    purchase_date: NaiveDate,
    warranty_months: Option<i32>,
) -> Result<entities::receipt::Model> {
    let mut new = NewReceipt::new(user_id, purchase_date, category);
    new.store_name = store_name.map(ToString::to_string);
    new.warranty_months = warranty_months;
    receipt::create_receipt(db, new).await
}

fn blank_model(id: i64) -> entities::receipt::Model {
    entities::receipt::Model {
        id,
        user_id: "test_user".to_string(),
        store_name: None,
        purchase_date: date(2024, 1, 1),
        amount: None,
        category: Category::Others,
        warranty_months: None,
        warranty_expiry: None,
        notes: None,
        image_ref: None,
        created_at: chrono::Utc::now(),
    }
}

/// In-memory receipt with the given expiry and no other meaningful fields.
pub fn receipt_with_expiry(id: i64, warranty_expiry: Option<NaiveDate>) -> entities::receipt::Model {
    entities::receipt::Model {
        warranty_expiry,
        ..blank_model(id)
    }
}

/// In-memory receipt whose expiry is derived the same way the store derives it.
pub fn receipt_with_warranty(
    id: i64,
    purchase_date: NaiveDate,
    warranty_months: Option<i32>,
) -> entities::receipt::Model {
    entities::receipt::Model {
        purchase_date,
        warranty_months,
        warranty_expiry: compute_expiry(purchase_date, warranty_months),
        ..blank_model(id)
    }
}

/// In-memory receipt with a store name and category, for vault filtering.
pub fn receipt_in_store(
    id: i64,
    store_name: Option<&str>,
    category: Category,
) -> entities::receipt::Model {
    entities::receipt::Model {
        store_name: store_name.map(ToString::to_string),
        category,
        ..blank_model(id)
    }
}
