//! Property entity model, write DTOs, and read models.

use finca_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::property_image::{PropertyImage, PropertyImageInfo, UpdatePropertyImage};
use crate::models::property_trace::{PropertyTrace, PropertyTraceInfo, UpdatePropertyTrace};

/// A row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub price: Money,
    pub code_internal: Option<String>,
    pub year: Option<i32>,
    pub owner_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new property.
///
/// `name` and `price` are `Option` so the service can reject their absence
/// as a validation failure instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProperty {
    pub name: Option<String>,
    pub address: Option<String>,
    pub price: Option<Money>,
    pub code_internal: Option<String>,
    pub year: Option<i32>,
    pub owner_id: Option<DbId>,
}

/// DTO for replacing a property.
///
/// Scalars are overwritten wholesale -- partial scalar updates are not
/// supported. Nested `traces` and `images` entries are matched by id
/// against the property's existing children and updated in place;
/// unmatched entries are discarded without effect.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProperty {
    pub name: Option<String>,
    pub address: Option<String>,
    pub price: Option<Money>,
    pub code_internal: Option<String>,
    pub year: Option<i32>,
    pub owner_id: Option<DbId>,
    #[serde(default)]
    pub traces: Vec<UpdatePropertyTrace>,
    #[serde(default)]
    pub images: Vec<UpdatePropertyImage>,
}

/// A `properties` row joined with its owner's display name.
#[derive(Debug, Clone, FromRow)]
pub struct PropertySearchRow {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub price: Money,
    pub code_internal: Option<String>,
    pub year: Option<i32>,
    pub owner_id: Option<DbId>,
    pub owner_name: Option<String>,
}

/// Denormalized search result: property scalars, the owner's display name
/// (absent when the property has no owner), and the full image and trace
/// collections. Neither the sequence nor the collections carry an ordering
/// guarantee.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyInfo {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub price: Money,
    pub code_internal: Option<String>,
    pub year: Option<i32>,
    pub owner_name: Option<String>,
    pub images: Vec<PropertyImageInfo>,
    pub traces: Vec<PropertyTraceInfo>,
}

/// A property together with its owned collections, returned by the update
/// operation.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyDetail {
    #[serde(flatten)]
    pub property: Property,
    pub images: Vec<PropertyImage>,
    pub traces: Vec<PropertyTrace>,
}
