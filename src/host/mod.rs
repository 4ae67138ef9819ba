//! Traits for the external collaborators hosting this engine.
//!
//! The embedding application owns the event collection, the map widget and
//! the geolocation capability; this crate only talks to them through these
//! seams. `host/test.rs` provides an in-memory recording implementation for
//! unit tests.

use thiserror::Error;

use crate::domain::event::Event;
use crate::domain::geo::GeoPoint;
use crate::domain::marker::MapStyle;
use crate::domain::types::{EventId, ZoomLevel};


/// Error reported by a host collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host-side operation failed; the message is host-specific.
    #[error("host backend error: {0}")]
    Backend(String),
}

/// Convenient alias for results returned from host collaborators.
pub type HostResult<T> = Result<T, HostError>;

/// Failures of the host geolocation capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    /// The host environment has no geolocation capability at all.
    #[error("geolocation is not supported by this environment")]
    Unsupported,
    /// The user declined to share their position.
    #[error("permission to access the current position was denied")]
    PermissionDenied,
    /// The position could not be determined.
    #[error("unable to retrieve the current position: {0}")]
    PositionUnavailable(String),
}

/// Receives finalized catalog changes.
///
/// The caller reconciles its collection and re-supplies `events` on the next
/// render; services guarantee at most one invocation per user action.
pub trait EventSink {
    /// A draft passed validation and was finalized.
    fn event_added(&self, event: &Event) -> HostResult<()>;
    /// The user confirmed deletion of an existing event.
    fn event_deleted(&self, id: &EventId) -> HostResult<()>;
}

/// The map widget rendering tiles and markers.
pub trait MapSurface {
    /// Recenters and re-zooms the visible viewport.
    fn set_view(&self, center: GeoPoint, zoom: ZoomLevel) -> HostResult<()>;
    /// Swaps the tile source, attribution and tile filter.
    fn set_tile_source(&self, style: MapStyle) -> HostResult<()>;
}

/// Asynchronous access to the user's current position.
///
/// The engine runs on the UI thread, so the returned future is not required
/// to be `Send`; only the requesting call path suspends while the position
/// is outstanding.
pub trait Geolocator {
    fn current_position(&self) -> impl Future<Output = Result<GeoPoint, GeolocationError>>;
}
