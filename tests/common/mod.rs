use std::cell::RefCell;

use map_explorer::domain::event::Event;
use map_explorer::domain::geo::GeoPoint;
use map_explorer::domain::marker::MapStyle;
use map_explorer::domain::types::{EventId, ZoomLevel};
use map_explorer::host::{
    EventSink, GeolocationError, Geolocator, HostResult, MapSurface,
};

/// Records every host interaction so scenarios can assert callback delivery.
#[derive(Default)]
pub struct RecordingHost {
    pub added: RefCell<Vec<Event>>,
    pub deleted: RefCell<Vec<EventId>>,
    pub views: RefCell<Vec<(GeoPoint, ZoomLevel)>>,
    pub tile_sources: RefCell<Vec<MapStyle>>,
    pub position: Option<Result<GeoPoint, GeolocationError>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: GeoPoint) -> Self {
        self.position = Some(Ok(position));
        self
    }

    pub fn with_geolocation_error(mut self, error: GeolocationError) -> Self {
        self.position = Some(Err(error));
        self
    }
}

impl EventSink for RecordingHost {
    fn event_added(&self, event: &Event) -> HostResult<()> {
        self.added.borrow_mut().push(event.clone());
        Ok(())
    }

    fn event_deleted(&self, id: &EventId) -> HostResult<()> {
        self.deleted.borrow_mut().push(id.clone());
        Ok(())
    }
}

impl MapSurface for RecordingHost {
    fn set_view(&self, center: GeoPoint, zoom: ZoomLevel) -> HostResult<()> {
        self.views.borrow_mut().push((center, zoom));
        Ok(())
    }

    fn set_tile_source(&self, style: MapStyle) -> HostResult<()> {
        self.tile_sources.borrow_mut().push(style);
        Ok(())
    }
}

impl Geolocator for RecordingHost {
    async fn current_position(&self) -> Result<GeoPoint, GeolocationError> {
        match &self.position {
            Some(result) => result.clone(),
            None => Err(GeolocationError::Unsupported),
        }
    }
}
