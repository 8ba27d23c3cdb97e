//! Request handlers.
//!
//! Handlers stay thin: extract, delegate to [`crate::service`], and map
//! errors via [`crate::error::AppError`].

pub mod property;
