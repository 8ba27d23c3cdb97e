//! Repository for the `property_traces` table.

use finca_core::types::DbId;
use sqlx::PgPool;

use crate::models::property_trace::{CreatePropertyTrace, PropertyTrace};

const COLUMNS: &str = "id, property_id, sale_date, name, value, tax, created_at, updated_at";

/// Provides persistence operations for sale-history traces.
///
/// No public API operation inserts a trace; `create` serves fixtures and
/// seed data. Traces are mutated only through the property update merge.
pub struct PropertyTraceRepo;

impl PropertyTraceRepo {
    /// Insert a trace row, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePropertyTrace,
    ) -> Result<PropertyTrace, sqlx::Error> {
        let query = format!(
            "INSERT INTO property_traces (property_id, sale_date, name, value, tax)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyTrace>(&query)
            .bind(input.property_id)
            .bind(input.sale_date)
            .bind(&input.name)
            .bind(input.value)
            .bind(input.tax)
            .fetch_one(pool)
            .await
    }

    /// List all traces belonging to one property.
    pub async fn list_by_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<PropertyTrace>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property_traces WHERE property_id = $1");
        sqlx::query_as::<_, PropertyTrace>(&query)
            .bind(property_id)
            .fetch_all(pool)
            .await
    }

    /// Batch-load the traces of several properties in one query.
    pub async fn list_by_properties(
        pool: &PgPool,
        property_ids: &[DbId],
    ) -> Result<Vec<PropertyTrace>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property_traces WHERE property_id = ANY($1)");
        sqlx::query_as::<_, PropertyTrace>(&query)
            .bind(property_ids)
            .fetch_all(pool)
            .await
    }
}
