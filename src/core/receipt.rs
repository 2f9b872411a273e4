//! Receipt business logic - Creating, reading, editing and deleting receipts.
//!
//! Every query is scoped to a single user: a receipt that exists but belongs to
//! someone else is treated exactly like a missing one. Write paths that touch
//! `purchase_date` or `warranty_months` always recompute `warranty_expiry` through
//! [`compute_expiry`], so the stored expiry can never drift from its sources.

use crate::{
    core::{category::Category, warranty::compute_expiry},
    entities::{Receipt, receipt},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{debug, info};

/// Input for recording a new receipt (the scan flow).
#[derive(Debug, Clone, PartialEq)]
pub struct NewReceipt {
    /// Discord user ID of the owner
    pub user_id: String,
    /// Store name; blank text is stored as absent
    pub store_name: Option<String>,
    /// Calendar date of purchase
    pub purchase_date: NaiveDate,
    /// Amount paid; must be finite and non-negative
    pub amount: Option<f64>,
    /// Purchase type
    pub category: Category,
    /// Warranty length in months; must be non-negative
    pub warranty_months: Option<i32>,
    /// Free-form notes; blank text is stored as absent
    pub notes: Option<String>,
    /// Reference to the uploaded image
    pub image_ref: Option<String>,
}

impl NewReceipt {
    /// A receipt with only the required fields set.
    #[must_use]
    pub fn new(user_id: impl Into<String>, purchase_date: NaiveDate, category: Category) -> Self {
        Self {
            user_id: user_id.into(),
            store_name: None,
            purchase_date,
            amount: None,
            category,
            warranty_months: None,
            notes: None,
            image_ref: None,
        }
    }
}

fn validate_amount(amount: Option<f64>) -> Result<()> {
    match amount {
        Some(amount) if !amount.is_finite() || amount < 0.0 => {
            Err(Error::InvalidAmount { amount })
        }
        _ => Ok(()),
    }
}

fn validate_warranty(warranty_months: Option<i32>) -> Result<()> {
    match warranty_months {
        Some(months) if months < 0 => Err(Error::InvalidWarranty { months }),
        _ => Ok(()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Records a new receipt and derives its warranty expiry.
///
/// Rejects negative or non-finite amounts and negative warranty lengths. A
/// warranty of zero months is stored as given but yields no expiry.
pub async fn create_receipt(db: &DatabaseConnection, new: NewReceipt) -> Result<receipt::Model> {
    validate_amount(new.amount)?;
    validate_warranty(new.warranty_months)?;

    let warranty_expiry = compute_expiry(new.purchase_date, new.warranty_months);

    let receipt_model = receipt::ActiveModel {
        user_id: Set(new.user_id),
        store_name: Set(non_blank(new.store_name)),
        purchase_date: Set(new.purchase_date),
        amount: Set(new.amount),
        category: Set(new.category),
        warranty_months: Set(new.warranty_months),
        warranty_expiry: Set(warranty_expiry),
        notes: Set(non_blank(new.notes)),
        image_ref: Set(new.image_ref),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let created = receipt_model.insert(db).await?;
    info!(
        receipt_id = created.id,
        user_id = %created.user_id,
        category = %created.category,
        warranty_expiry = ?created.warranty_expiry,
        "Recorded receipt"
    );
    Ok(created)
}

/// Finds one of the user's receipts by id.
pub async fn get_receipt_for_user(
    db: &DatabaseConnection,
    user_id: &str,
    receipt_id: i64,
) -> Result<Option<receipt::Model>> {
    Receipt::find_by_id(receipt_id)
        .filter(receipt::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

async fn require_receipt_for_user(
    db: &DatabaseConnection,
    user_id: &str,
    receipt_id: i64,
) -> Result<receipt::Model> {
    get_receipt_for_user(db, user_id, receipt_id)
        .await?
        .ok_or(Error::ReceiptNotFound { id: receipt_id })
}

/// All of the user's receipts, newest purchase first (ties: highest id first).
pub async fn get_receipts_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<receipt::Model>> {
    Receipt::find()
        .filter(receipt::Column::UserId.eq(user_id))
        .order_by_desc(receipt::Column::PurchaseDate)
        .order_by_desc(receipt::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// The user's most recently recorded receipts.
pub async fn get_recent_receipts(
    db: &DatabaseConnection,
    user_id: &str,
    limit: u64,
) -> Result<Vec<receipt::Model>> {
    Receipt::find()
        .filter(receipt::Column::UserId.eq(user_id))
        .order_by_desc(receipt::Column::CreatedAt)
        .order_by_desc(receipt::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// The user's receipts that carry a warranty expiry, in any order.
pub async fn get_warranty_receipts_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<receipt::Model>> {
    Receipt::find()
        .filter(receipt::Column::UserId.eq(user_id))
        .filter(receipt::Column::WarrantyExpiry.is_not_null())
        .all(db)
        .await
        .map_err(Into::into)
}

/// Changes a receipt's warranty length and recomputes its expiry.
pub async fn update_warranty_months(
    db: &DatabaseConnection,
    user_id: &str,
    receipt_id: i64,
    warranty_months: Option<i32>,
) -> Result<receipt::Model> {
    validate_warranty(warranty_months)?;
    let existing = require_receipt_for_user(db, user_id, receipt_id).await?;
    let warranty_expiry = compute_expiry(existing.purchase_date, warranty_months);

    let mut active_model: receipt::ActiveModel = existing.into();
    active_model.warranty_months = Set(warranty_months);
    active_model.warranty_expiry = Set(warranty_expiry);
    let updated = active_model.update(db).await?;

    debug!(receipt_id, ?warranty_months, ?warranty_expiry, "Updated warranty length");
    Ok(updated)
}

/// Changes a receipt's purchase date and recomputes its expiry.
pub async fn update_purchase_date(
    db: &DatabaseConnection,
    user_id: &str,
    receipt_id: i64,
    purchase_date: NaiveDate,
) -> Result<receipt::Model> {
    let existing = require_receipt_for_user(db, user_id, receipt_id).await?;
    let warranty_expiry = compute_expiry(purchase_date, existing.warranty_months);

    let mut active_model: receipt::ActiveModel = existing.into();
    active_model.purchase_date = Set(purchase_date);
    active_model.warranty_expiry = Set(warranty_expiry);
    let updated = active_model.update(db).await?;

    debug!(receipt_id, %purchase_date, ?warranty_expiry, "Updated purchase date");
    Ok(updated)
}

/// Deletes one of the user's receipts.
pub async fn delete_receipt(db: &DatabaseConnection, user_id: &str, receipt_id: i64) -> Result<()> {
    let existing = require_receipt_for_user(db, user_id, receipt_id).await?;
    existing.delete(db).await?;
    info!(receipt_id, user_id, "Deleted receipt");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_receipt_derives_expiry() -> Result<()> {
        let db = setup_test_db().await?;

        let mut new = NewReceipt::new("user1", date(2024, 1, 31), Category::Electronics);
        new.store_name = Some("  Best Buy ".to_string());
        new.amount = Some(199.99);
        new.warranty_months = Some(1);

        let created = create_receipt(&db, new).await?;
        assert!(created.id > 0);
        assert_eq!(created.store_name.as_deref(), Some("Best Buy"));
        assert_eq!(created.amount, Some(199.99));
        assert_eq!(created.category, Category::Electronics);
        assert_eq!(created.warranty_expiry, Some(date(2024, 2, 29)));

        let stored = get_receipt_for_user(&db, "user1", created.id).await?.unwrap();
        assert_eq!(stored, created);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_receipt_without_warranty_has_no_expiry() -> Result<()> {
        let db = setup_test_db().await?;

        let no_months = create_test_receipt(&db, "user1", date(2024, 5, 1), None).await?;
        assert_eq!(no_months.warranty_expiry, None);

        let zero_months = create_test_receipt(&db, "user1", date(2024, 5, 1), Some(0)).await?;
        assert_eq!(zero_months.warranty_months, Some(0));
        assert_eq!(zero_months.warranty_expiry, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_receipt_blank_text_is_absent() -> Result<()> {
        let db = setup_test_db().await?;

        let mut new = NewReceipt::new("user1", date(2024, 5, 1), Category::Others);
        new.store_name = Some("   ".to_string());
        new.notes = Some(String::new());

        let created = create_receipt(&db, new).await?;
        assert_eq!(created.store_name, None);
        assert_eq!(created.notes, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_receipt_rejects_bad_amounts() -> Result<()> {
        let db = setup_test_db().await?;

        for amount in [-1.0, f64::NAN, f64::INFINITY] {
            let mut new = NewReceipt::new("user1", date(2024, 5, 1), Category::Others);
            new.amount = Some(amount);
            let result = create_receipt(&db, new).await;
            assert!(matches!(result, Err(Error::InvalidAmount { .. })));
        }

        let mut free = NewReceipt::new("user1", date(2024, 5, 1), Category::Others);
        free.amount = Some(0.0);
        assert!(create_receipt(&db, free).await.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_receipt_rejects_negative_warranty() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_test_receipt(&db, "user1", date(2024, 5, 1), Some(-3)).await;
        assert!(matches!(result, Err(Error::InvalidWarranty { months: -3 })));
        assert!(get_receipts_for_user(&db, "user1").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_receipts_are_scoped_to_user() -> Result<()> {
        let db = setup_test_db().await?;

        let mine = create_test_receipt(&db, "user1", date(2024, 5, 1), None).await?;
        create_test_receipt(&db, "user2", date(2024, 5, 2), None).await?;

        let listed = get_receipts_for_user(&db, "user1").await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, mine.id);

        assert!(get_receipt_for_user(&db, "user2", mine.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_receipts_orders_by_purchase_date_desc() -> Result<()> {
        let db = setup_test_db().await?;

        let old = create_test_receipt(&db, "user1", date(2023, 1, 1), None).await?;
        let newest = create_test_receipt(&db, "user1", date(2024, 6, 1), None).await?;
        let middle = create_test_receipt(&db, "user1", date(2024, 1, 1), None).await?;

        let ids: Vec<i64> = get_receipts_for_user(&db, "user1")
            .await?
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![newest.id, middle.id, old.id]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_recent_receipts_limits_and_orders() -> Result<()> {
        let db = setup_test_db().await?;

        let mut created = Vec::new();
        for day in 1..=5 {
            created.push(create_test_receipt(&db, "user1", date(2024, 1, day), None).await?);
        }

        let recent = get_recent_receipts(&db, "user1", 3).await?;
        let ids: Vec<i64> = recent.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![created[4].id, created[3].id, created[2].id]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_warranty_receipts_only_with_expiry() -> Result<()> {
        let db = setup_test_db().await?;

        let covered = create_test_receipt(&db, "user1", date(2024, 1, 1), Some(24)).await?;
        create_test_receipt(&db, "user1", date(2024, 1, 1), None).await?;
        create_test_receipt(&db, "user2", date(2024, 1, 1), Some(24)).await?;

        let receipts = get_warranty_receipts_for_user(&db, "user1").await?;
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].id, covered.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_vault_filter_over_stored_receipts() -> Result<()> {
        use crate::core::{category::CategoryFilter, vault};

        let db = setup_test_db().await?;
        let tv = create_custom_receipt(
            &db,
            "user1",
            Some("Best Buy"),
            Category::Electronics,
            date(2024, 3, 1),
            Some(24),
        )
        .await?;
        let fridge = create_custom_receipt(
            &db,
            "user1",
            Some("Home Depot"),
            Category::Appliances,
            date(2024, 5, 1),
            Some(12),
        )
        .await?;
        create_custom_receipt(&db, "user1", None, Category::FoodAndDining, date(2024, 4, 1), None)
            .await?;

        let receipts = get_receipts_for_user(&db, "user1").await?;
        let ids = |list: &[receipt::Model]| list.iter().map(|r| r.id).collect::<Vec<_>>();

        let electronics =
            vault::filter_by_category_and_query(&receipts, CategoryFilter::Only(Category::Electronics), "");
        assert_eq!(ids(&electronics), vec![tv.id]);

        let depot = vault::filter_by_category_and_query(&receipts, CategoryFilter::All, "depot");
        assert_eq!(ids(&depot), vec![fridge.id]);

        let everything = vault::filter_by_category_and_query(&receipts, CategoryFilter::All, "");
        assert_eq!(everything, receipts);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_warranty_months_recomputes_expiry() -> Result<()> {
        let db = setup_test_db().await?;
        let receipt = create_test_receipt(&db, "user1", date(2024, 1, 15), Some(12)).await?;

        let updated = update_warranty_months(&db, "user1", receipt.id, Some(24)).await?;
        assert_eq!(updated.warranty_months, Some(24));
        assert_eq!(updated.warranty_expiry, Some(date(2026, 1, 15)));

        let cleared = update_warranty_months(&db, "user1", receipt.id, None).await?;
        assert_eq!(cleared.warranty_months, None);
        assert_eq!(cleared.warranty_expiry, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_purchase_date_recomputes_expiry() -> Result<()> {
        let db = setup_test_db().await?;
        let receipt = create_test_receipt(&db, "user1", date(2024, 1, 15), Some(6)).await?;

        let updated = update_purchase_date(&db, "user1", receipt.id, date(2024, 8, 31)).await?;
        assert_eq!(updated.purchase_date, date(2024, 8, 31));
        assert_eq!(updated.warranty_expiry, Some(date(2025, 2, 28)));
        Ok(())
    }

    #[tokio::test]
    async fn test_updates_reject_other_users_receipts() -> Result<()> {
        let db = setup_test_db().await?;
        let receipt = create_test_receipt(&db, "user1", date(2024, 1, 15), Some(6)).await?;

        let result = update_warranty_months(&db, "user2", receipt.id, Some(12)).await;
        assert!(matches!(result, Err(Error::ReceiptNotFound { id }) if id == receipt.id));

        let result = update_purchase_date(&db, "user2", receipt.id, date(2024, 2, 1)).await;
        assert!(matches!(result, Err(Error::ReceiptNotFound { .. })));

        let result = delete_receipt(&db, "user2", receipt.id).await;
        assert!(matches!(result, Err(Error::ReceiptNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_warranty_rejects_negative() -> Result<()> {
        let db = setup_test_db().await?;
        let receipt = create_test_receipt(&db, "user1", date(2024, 1, 15), Some(6)).await?;

        let result = update_warranty_months(&db, "user1", receipt.id, Some(-1)).await;
        assert!(matches!(result, Err(Error::InvalidWarranty { months: -1 })));

        let unchanged = get_receipt_for_user(&db, "user1", receipt.id).await?.unwrap();
        assert_eq!(unchanged.warranty_expiry, Some(date(2024, 7, 15)));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_receipt() -> Result<()> {
        let db = setup_test_db().await?;
        let receipt = create_test_receipt(&db, "user1", date(2024, 1, 15), None).await?;

        delete_receipt(&db, "user1", receipt.id).await?;
        assert!(get_receipt_for_user(&db, "user1", receipt.id).await?.is_none());

        let again = delete_receipt(&db, "user1", receipt.id).await;
        assert!(matches!(again, Err(Error::ReceiptNotFound { .. })));
        Ok(())
    }
}
