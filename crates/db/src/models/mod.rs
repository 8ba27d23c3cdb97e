//! Row models, write DTOs, and read models.
//!
//! Each submodule pairs a `FromRow` + `Serialize` entity struct with the
//! `Deserialize` DTOs the API accepts for it. Read models used by the
//! search projection live next to the entity they denormalize.

pub mod owner;
pub mod property;
pub mod property_image;
pub mod property_trace;
