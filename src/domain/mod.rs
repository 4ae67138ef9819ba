//! Domain entities and value objects for the event catalog.

pub mod auth;
pub mod event;
pub mod geo;
pub mod marker;
pub mod types;
