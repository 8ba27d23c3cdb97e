//! Finca API server library.
//!
//! Exposes the building blocks (config, state, error handling, the property
//! service, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;
