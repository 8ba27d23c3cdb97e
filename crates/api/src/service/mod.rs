//! Business layer behind the HTTP handlers.

pub mod property;

pub use property::PropertyService;
