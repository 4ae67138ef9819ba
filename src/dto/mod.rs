//! Presentation records derived from domain types.

pub mod events;
