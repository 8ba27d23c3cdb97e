//! Owner entity model.
//!
//! Owners are referenced by properties through a nullable foreign key; the
//! API never mutates them directly, so there is no update DTO.

use chrono::NaiveDate;
use finca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `owners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Owner {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub photo: Option<Vec<u8>>,
    pub birthday: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new owner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOwner {
    pub name: String,
    pub address: Option<String>,
    pub photo: Option<Vec<u8>>,
    pub birthday: Option<NaiveDate>,
}
