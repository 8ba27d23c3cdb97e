//! Repository for the `property_images` table.

use finca_core::types::DbId;
use sqlx::PgPool;

use crate::models::property_image::PropertyImage;

const COLUMNS: &str = "id, property_id, file_data, enabled, created_at, updated_at";

/// Provides persistence operations for property images.
pub struct PropertyImageRepo;

impl PropertyImageRepo {
    /// Insert a new image for a property, returning the created row.
    ///
    /// Images are always created enabled. An empty payload is a valid
    /// payload; callers reject an absent one before reaching here.
    pub async fn create(
        pool: &PgPool,
        property_id: DbId,
        file_data: &[u8],
    ) -> Result<PropertyImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO property_images (property_id, file_data, enabled)
             VALUES ($1, $2, TRUE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(property_id)
            .bind(file_data)
            .fetch_one(pool)
            .await
    }

    /// List all images belonging to one property.
    pub async fn list_by_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<PropertyImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property_images WHERE property_id = $1");
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(property_id)
            .fetch_all(pool)
            .await
    }

    /// Batch-load the images of several properties in one query.
    pub async fn list_by_properties(
        pool: &PgPool,
        property_ids: &[DbId],
    ) -> Result<Vec<PropertyImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property_images WHERE property_id = ANY($1)");
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(property_ids)
            .fetch_all(pool)
            .await
    }
}
