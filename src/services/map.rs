//! Map view services: geolocation recentering and the tile style toggle.

use crate::domain::geo::GeoPoint;
use crate::domain::marker::MapStyle;
use crate::domain::types::ZoomLevel;
use crate::host::{Geolocator, MapSurface};

use super::{ServiceError, ServiceResult};

/// Recenters the map on the user's current position.
///
/// Fire-and-forget: no retry and no explicit cancellation. Overlapping
/// requests are last-resolver-wins, which is harmless because recentering is
/// idempotent. On geolocation failure the map view is left unchanged and the
/// error is surfaced to the caller.
pub async fn find_nearby<G, M>(geolocator: &G, map: &M, zoom: ZoomLevel) -> ServiceResult<GeoPoint>
where
    G: Geolocator,
    M: MapSurface,
{
    let position = match geolocator.current_position().await {
        Ok(position) => position,
        Err(e) => {
            log::warn!("Geolocation request failed: {e}");
            return Err(ServiceError::Geolocation(e));
        }
    };

    match map.set_view(position, zoom) {
        Ok(()) => Ok(position),
        Err(e) => {
            log::error!("Failed to recenter map view: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Switches the two-valued tile mode and pushes the new source to the map.
///
/// Purely presentational; on a host failure the previous mode is retained.
pub fn change_map_style<M>(
    current: &mut MapStyle,
    requested: MapStyle,
    map: &M,
) -> ServiceResult<MapStyle>
where
    M: MapSurface,
{
    match map.set_tile_source(requested) {
        Ok(()) => {
            *current = requested;
            Ok(requested)
        }
        Err(e) => {
            log::error!("Failed to swap tile source: {e}");
            Err(ServiceError::Internal)
        }
    }
}
