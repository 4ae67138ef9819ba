//! Facade owning the transient UI state of the map view.
//!
//! The event collection itself is owned by the embedding application and is
//! passed into every call, so this struct never drifts from the canonical
//! store. All state updates happen synchronously within one method call.

use chrono::Utc;

use crate::config::ExplorerConfig;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::event::{DraftEvent, DraftField, Event};
use crate::domain::geo::GeoPoint;
use crate::domain::marker::MapStyle;
use crate::domain::types::{EventCategory, EventId};
use crate::dto::events::{EventMarkerDto, FilterTagDto};
use crate::host::{EventSink, Geolocator, MapSurface};
use crate::services::catalog::{self, DeleteConfirmation, FilterState, SearchQuery};
use crate::services::drafts::{DraftStage, DraftWorkflow};
use crate::services::{self, ServiceError, ServiceResult};

/// Event-catalog state engine for one map view.
#[derive(Debug, Default)]
pub struct MapExplorer {
    config: ExplorerConfig,
    filters: FilterState,
    query: SearchQuery,
    workflow: DraftWorkflow,
    style: MapStyle,
}

impl MapExplorer {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Positions the viewport at the configured initial center and zoom.
    pub fn apply_initial_view<M>(&self, map: &M) -> ServiceResult<()>
    where
        M: MapSurface,
    {
        let center = self.config.center().map_err(|e| {
            log::error!("Invalid configured map center: {e}");
            ServiceError::Internal
        })?;
        let zoom = self.config.initial_zoom().map_err(|e| {
            log::error!("Invalid configured zoom: {e}");
            ServiceError::Internal
        })?;
        map.set_view(center, zoom).map_err(|e| {
            log::error!("Failed to position initial view: {e}");
            ServiceError::Internal
        })
    }

    // --- Filter/search engine ---------------------------------------------

    /// Derives the visible subset of the caller's collection.
    pub fn visible_events<'a>(&'a self, events: &'a [Event]) -> impl Iterator<Item = &'a Event> {
        catalog::visible_events(events, &self.filters, &self.query)
    }

    /// Marker projections for the visible subset, in input order.
    pub fn markers(&self, events: &[Event]) -> Vec<EventMarkerDto> {
        self.visible_events(events).map(EventMarkerDto::from).collect()
    }

    /// One tag per category for the filter control row.
    pub fn filter_tags(&self) -> Vec<FilterTagDto> {
        self.filters
            .entries()
            .map(|(category, active)| FilterTagDto::new(category, active))
            .collect()
    }

    /// Flips visibility of exactly one category.
    pub fn toggle_category(&mut self, category: EventCategory) {
        self.filters.toggle(category);
    }

    pub fn is_category_visible(&self, category: EventCategory) -> bool {
        self.filters.is_visible(category)
    }

    pub fn set_search<S: Into<String>>(&mut self, query: S) {
        self.query.set(query);
    }

    pub fn search(&self) -> &str {
        self.query.as_str()
    }

    // --- Draft-event workflow ---------------------------------------------

    /// Handles a click on the map surface; gated on authentication.
    pub fn map_click(
        &mut self,
        user: Option<&AuthenticatedUser>,
        position: GeoPoint,
    ) -> ServiceResult<DraftStage> {
        self.workflow.map_click(user, position)
    }

    /// Merges a single field edit into the open draft form.
    pub fn edit_draft(&mut self, field: DraftField) -> ServiceResult<()> {
        self.workflow.edit(field)
    }

    /// Validates and finalizes the open draft, handing it to the sink.
    pub fn submit_draft<S>(&mut self, sink: &S) -> ServiceResult<Event>
    where
        S: EventSink,
    {
        self.workflow.submit(Utc::now(), sink)
    }

    /// Discards the open draft, if any.
    pub fn cancel_draft(&mut self) -> DraftStage {
        self.workflow.cancel()
    }

    pub fn draft_stage(&self) -> DraftStage {
        self.workflow.stage()
    }

    pub fn draft(&self) -> Option<&DraftEvent> {
        self.workflow.draft()
    }

    /// Requests deletion of an existing event after user confirmation.
    pub fn delete_event<S>(
        &self,
        id: &EventId,
        confirmation: DeleteConfirmation,
        events: &[Event],
        sink: &S,
    ) -> ServiceResult<bool>
    where
        S: EventSink,
    {
        catalog::delete_event(id, confirmation, events, sink)
    }

    // --- Map view ---------------------------------------------------------

    /// Recenters the map on the user's current position at the nearby zoom.
    pub async fn find_nearby<G, M>(&self, geolocator: &G, map: &M) -> ServiceResult<GeoPoint>
    where
        G: Geolocator,
        M: MapSurface,
    {
        let zoom = self.config.nearby().map_err(|e| {
            log::error!("Invalid configured nearby zoom: {e}");
            ServiceError::Internal
        })?;
        services::map::find_nearby(geolocator, map, zoom).await
    }

    /// Switches between the standard and satellite tile modes.
    pub fn set_map_style<M>(&mut self, style: MapStyle, map: &M) -> ServiceResult<MapStyle>
    where
        M: MapSurface,
    {
        services::map::change_map_style(&mut self.style, style, map)
    }

    pub fn map_style(&self) -> MapStyle {
        self.style
    }
}
