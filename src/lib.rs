//! Event-catalog state engine for a community event map.
//!
//! This crate maintains the transient UI state of an interactive map view:
//! category filters and free-text search over a caller-owned event
//! collection, a map-click driven draft-event workflow, per-category marker
//! presentation, geolocation recentering and the tile style toggle. The
//! embedding application supplies the collection and the host collaborators
//! (see [`host`]) and reconciles additions and deletions itself.

pub mod config;
pub mod domain;
pub mod dto;
pub mod explorer;
pub mod forms;
pub mod host;
pub mod services;

pub use crate::explorer::MapExplorer;
