//! Receipt entity - One captured purchase receipt.
//!
//! Each receipt belongs to exactly one user and records the store, purchase date,
//! amount, category, warranty length and optional notes/image reference.
//! `warranty_expiry` is derived from `purchase_date` and `warranty_months` and is
//! only ever written by the store layer in `core::receipt`.

use crate::core::category::Category;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Receipt database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "receipts")]
pub struct Model {
    /// Unique identifier, assigned on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID of the owner
    pub user_id: String,
    /// Store the purchase was made at
    pub store_name: Option<String>,
    /// Calendar date of purchase
    pub purchase_date: Date,
    /// Amount paid in dollars
    pub amount: Option<f64>,
    /// Purchase type
    pub category: Category,
    /// Warranty length in calendar months
    pub warranty_months: Option<i32>,
    /// Last day of warranty cover, derived from `purchase_date` + `warranty_months`
    pub warranty_expiry: Option<Date>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Reference to the stored receipt image (attachment URL)
    pub image_ref: Option<String>,
    /// When the receipt was recorded
    pub created_at: DateTimeUtc,
}

/// Receipts have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
