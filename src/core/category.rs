//! Receipt categories.
//!
//! Every receipt carries exactly one [`Category`] from a fixed set. The vault
//! listing can additionally be narrowed with a [`CategoryFilter`], whose `All`
//! sentinel disables category filtering.

use crate::errors::{Error, Result};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Label of the "no category filter" sentinel.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Purchase type of a receipt. Stored in the database by its display label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Category {
    /// Phones, computers, gadgets
    #[sea_orm(string_value = "Electronics")]
    Electronics,
    /// Household appliances
    #[sea_orm(string_value = "Appliances")]
    Appliances,
    /// Groceries and restaurants
    #[sea_orm(string_value = "Food & Dining")]
    FoodAndDining,
    /// Tickets, lodging, transport
    #[sea_orm(string_value = "Travel")]
    Travel,
    /// Pharmacy and medical
    #[sea_orm(string_value = "Health")]
    Health,
    /// Clothing and accessories
    #[sea_orm(string_value = "Fashion")]
    Fashion,
    /// Furniture, tools, garden supplies
    #[sea_orm(string_value = "Home & Garden")]
    HomeAndGarden,
    /// Anything else
    #[default]
    #[sea_orm(string_value = "Others")]
    Others,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 8] = [
        Self::Electronics,
        Self::Appliances,
        Self::FoodAndDining,
        Self::Travel,
        Self::Health,
        Self::Fashion,
        Self::HomeAndGarden,
        Self::Others,
    ];

    /// Display label, also used as the stored value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Appliances => "Appliances",
            Self::FoodAndDining => "Food & Dining",
            Self::Travel => "Travel",
            Self::Health => "Health",
            Self::Fashion => "Fashion",
            Self::HomeAndGarden => "Home & Garden",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Category selection for the vault listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category filtering
    #[default]
    All,
    /// Keep only receipts in this category
    Only(Category),
}

impl CategoryFilter {
    /// Whether a receipt in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES_LABEL),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL_CATEGORIES_LABEL) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}
