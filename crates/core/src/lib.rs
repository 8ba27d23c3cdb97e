//! Domain core for the property listings backend.
//!
//! Pure types and rules shared by the database and API crates: id/timestamp
//! aliases, the domain error taxonomy, write-side validation rules, and the
//! tri-state search filter. Nothing here touches the database.

pub mod error;
pub mod filter;
pub mod types;
pub mod validation;
