//! Search filter for property listings.
//!
//! Each dimension is tri-state: absent, zero, and negative all mean
//! "unconstrained"; only a strictly positive value constrains the search.
//! A literal zero or negative filter value therefore cannot be searched for.

use serde::Deserialize;

use crate::types::{DbId, Money};

/// Optional criteria for `GET /properties`. Deserialized from query params.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyFilter {
    pub year: Option<i32>,
    pub price: Option<Money>,
    pub owner_id: Option<DbId>,
}

impl PropertyFilter {
    /// The year constraint, or `None` when absent or not strictly positive.
    pub fn year(&self) -> Option<i32> {
        self.year.filter(|y| *y > 0)
    }

    /// The exact-price constraint, or `None` when absent or not strictly
    /// positive.
    pub fn price(&self) -> Option<Money> {
        self.price.filter(|p| *p > Money::ZERO)
    }

    /// The owner constraint, or `None` when absent or not strictly positive.
    pub fn owner_id(&self) -> Option<DbId> {
        self.owner_id.filter(|o| *o > 0)
    }

    /// True when no dimension constrains the search (match everything).
    pub fn is_unconstrained(&self) -> bool {
        self.year().is_none() && self.price().is_none() && self.owner_id().is_none()
    }
}
