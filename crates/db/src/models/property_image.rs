//! Property image entity model and DTOs.

use finca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `property_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyImage {
    pub id: DbId,
    pub property_id: DbId,
    pub file_data: Option<Vec<u8>>,
    pub enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /properties/{id}/images`.
///
/// `file_data` must be present; an empty byte array is accepted, a missing
/// or `null` payload is rejected by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct AddPropertyImage {
    pub file_data: Option<Vec<u8>>,
}

/// One image entry inside an `UpdateProperty` request. Matched against the
/// property's existing images by `id`; only the payload is overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePropertyImage {
    pub id: DbId,
    pub file_data: Option<Vec<u8>>,
}

/// Image projection carried by the search read model: id and payload only.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyImageInfo {
    pub id: DbId,
    pub file_data: Option<Vec<u8>>,
}

impl From<PropertyImage> for PropertyImageInfo {
    fn from(image: PropertyImage) -> Self {
        Self {
            id: image.id,
            file_data: image.file_data,
        }
    }
}
