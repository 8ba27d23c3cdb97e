//! Property trace (sale history) entity model and DTOs.
//!
//! Traces are only ever matched-and-updated through the property update
//! merge; no public operation inserts one. The create DTO exists for
//! fixtures and seed data.

use finca_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `property_traces` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyTrace {
    pub id: DbId,
    pub property_id: DbId,
    pub sale_date: Option<Timestamp>,
    pub name: Option<String>,
    pub value: Option<Money>,
    pub tax: Option<Money>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a trace row directly (fixtures and seeds).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePropertyTrace {
    pub property_id: DbId,
    pub sale_date: Option<Timestamp>,
    pub name: Option<String>,
    pub value: Option<Money>,
    pub tax: Option<Money>,
}

/// One trace entry inside an `UpdateProperty` request. Matched against the
/// property's existing traces by `id`; the mutable fields are overwritten
/// wholesale (a `null` here writes NULL).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePropertyTrace {
    pub id: DbId,
    pub sale_date: Option<Timestamp>,
    pub name: Option<String>,
    pub value: Option<Money>,
    pub tax: Option<Money>,
}

/// Trace projection carried by the search read model.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyTraceInfo {
    pub id: DbId,
    pub sale_date: Option<Timestamp>,
    pub name: Option<String>,
    pub value: Option<Money>,
    pub tax: Option<Money>,
}

impl From<PropertyTrace> for PropertyTraceInfo {
    fn from(trace: PropertyTrace) -> Self {
        Self {
            id: trace.id,
            sale_date: trace.sale_date,
            name: trace.name,
            value: trace.value,
            tax: trace.tax,
        }
    }
}
