//! User-entered input and its checked payload counterparts.

pub mod events;
