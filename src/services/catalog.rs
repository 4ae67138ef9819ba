//! Derivation of the visible event subset and confirmed deletions.
//!
//! The event collection is owned by the caller and passed into every
//! function; nothing here caches between calls. Derivation is a stable
//! filter over the input order.

use crate::domain::event::Event;
use crate::domain::types::{EventCategory, EventId};
use crate::host::EventSink;

use super::{ServiceError, ServiceResult};

/// Per-category visibility switches, defaulting to everything visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    visible: [bool; EventCategory::ALL.len()],
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            visible: [true; EventCategory::ALL.len()],
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips exactly one category switch; repeating the toggle restores it.
    pub fn toggle(&mut self, category: EventCategory) {
        self.visible[category.index()] = !self.visible[category.index()];
    }

    pub fn is_visible(&self, category: EventCategory) -> bool {
        self.visible[category.index()]
    }

    /// Iterates `(category, visible)` pairs in render order.
    pub fn entries(&self) -> impl Iterator<Item = (EventCategory, bool)> + '_ {
        EventCategory::ALL
            .iter()
            .map(move |category| (*category, self.visible[category.index()]))
    }
}

/// Free-text query matched case-insensitively against event fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn set<S: Into<String>>(&mut self, value: S) {
        self.0 = value.into();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Empty queries match everything; otherwise the case-folded query must
    /// be a substring of the title, description, category name or organizer.
    /// Absent optional fields are non-matches for that field only.
    pub fn matches(&self, event: &Event) -> bool {
        if self.0.is_empty() {
            return true;
        }

        let needle = self.0.to_lowercase();
        event.title.to_lowercase().contains(&needle)
            || event
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
            || event.category.as_str().to_lowercase().contains(&needle)
            || event
                .organizer
                .as_ref()
                .is_some_and(|o| o.to_lowercase().contains(&needle))
    }
}

/// Derives the visible subset: category switch on AND query match, with the
/// input order preserved. Lazy and recomputed on every call.
pub fn visible_events<'a>(
    events: &'a [Event],
    filters: &'a FilterState,
    query: &'a SearchQuery,
) -> impl Iterator<Item = &'a Event> {
    events
        .iter()
        .filter(move |event| filters.is_visible(event.category) && query.matches(event))
}

/// Outcome of the host-side deletion confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirmation {
    Confirmed,
    Declined,
}

/// Requests deletion of an existing event.
///
/// A declined confirmation is a normal no-op, not an error. The delete
/// callback fires at most once, and only for an id present in the caller's
/// collection. Returns `Ok(true)` when the callback was delivered.
pub fn delete_event<S>(
    id: &EventId,
    confirmation: DeleteConfirmation,
    events: &[Event],
    sink: &S,
) -> ServiceResult<bool>
where
    S: EventSink,
{
    if confirmation == DeleteConfirmation::Declined {
        return Ok(false);
    }

    if !events.iter().any(|event| event.id == *id) {
        return Err(ServiceError::NotFound);
    }

    match sink.event_deleted(id) {
        Ok(()) => Ok(true),
        Err(e) => {
            log::error!("Failed to deliver event deletion: {e}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::{EventIdSequence, NewEvent};
    use crate::domain::geo::GeoPoint;
    use crate::domain::types::{EventTitle, OrganizerName};
    use crate::host::test::TestHost;
    use chrono::{DateTime, Utc};

    fn sample_event(id: i64, title: &str, category: EventCategory) -> Event {
        let mut ids = EventIdSequence::new();
        let now = DateTime::<Utc>::from_timestamp_millis(id).unwrap();
        NewEvent {
            title: EventTitle::new(title).unwrap(),
            category,
            description: None,
            date: None,
            time: None,
            organizer: Some(OrganizerName::new("Community Center").unwrap()),
            contact: None,
            position: GeoPoint::new(40.71, -74.0).unwrap(),
        }
        .finalize(ids.next(now), now.naive_utc())
    }

    fn sample_events() -> Vec<Event> {
        vec![
            sample_event(1, "Jam Session", EventCategory::Music),
            sample_event(2, "Rust Meetup", EventCategory::Tech),
            sample_event(3, "Beach Cleanup", EventCategory::Volunteering),
        ]
    }

    #[test]
    fn default_filters_show_everything() {
        let events = sample_events();
        let filters = FilterState::default();
        let query = SearchQuery::default();

        let visible: Vec<_> = visible_events(&events, &filters, &query).collect();
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn toggled_category_hides_only_its_events() {
        let events = sample_events();
        let mut filters = FilterState::default();
        filters.toggle(EventCategory::Music);
        let query = SearchQuery::default();

        let visible: Vec<_> = visible_events(&events, &filters, &query).collect();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|e| e.category != EventCategory::Music));
        assert!(filters.is_visible(EventCategory::Tech));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut filters = FilterState::default();
        filters.toggle(EventCategory::Art);
        filters.toggle(EventCategory::Art);
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn disabled_category_yields_empty_set() {
        let events = vec![sample_event(1, "Jam Session", EventCategory::Music)];
        let mut filters = FilterState::default();
        filters.toggle(EventCategory::Music);
        let query = SearchQuery::default();

        assert_eq!(visible_events(&events, &filters, &query).count(), 0);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let events = sample_events();
        let filters = FilterState::default();

        let query = SearchQuery::new("jam");
        let visible: Vec<_> = visible_events(&events, &filters, &query).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Jam Session");

        let query = SearchQuery::new("rock");
        assert_eq!(visible_events(&events, &filters, &query).count(), 0);
    }

    #[test]
    fn query_matches_category_and_organizer() {
        let events = sample_events();
        let filters = FilterState::default();

        let query = SearchQuery::new("tech");
        assert_eq!(visible_events(&events, &filters, &query).count(), 1);

        // Every sample event shares the organizer.
        let query = SearchQuery::new("community center");
        assert_eq!(visible_events(&events, &filters, &query).count(), 3);
    }

    #[test]
    fn missing_description_is_not_a_match_but_not_an_exclusion() {
        let events = vec![sample_event(1, "Jam Session", EventCategory::Music)];
        let filters = FilterState::default();

        let query = SearchQuery::new("session");
        assert_eq!(visible_events(&events, &filters, &query).count(), 1);
    }

    #[test]
    fn derivation_preserves_input_order() {
        let events = sample_events();
        let filters = FilterState::default();
        let query = SearchQuery::default();

        let titles: Vec<_> = visible_events(&events, &filters, &query)
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, ["Jam Session", "Rust Meetup", "Beach Cleanup"]);
    }

    #[test]
    fn declined_confirmation_is_a_no_op() {
        let events = sample_events();
        let host = TestHost::new();

        let deleted = delete_event(
            &events[0].id,
            DeleteConfirmation::Declined,
            &events,
            &host,
        )
        .unwrap();

        assert!(!deleted);
        assert!(host.deleted.borrow().is_empty());
    }

    #[test]
    fn confirmed_deletion_fires_callback_once() {
        let events = sample_events();
        let host = TestHost::new();

        let deleted = delete_event(
            &events[1].id,
            DeleteConfirmation::Confirmed,
            &events,
            &host,
        )
        .unwrap();

        assert!(deleted);
        assert_eq!(host.deleted.borrow().as_slice(), &[events[1].id.clone()]);
    }

    #[test]
    fn deleting_unknown_id_is_not_found() {
        let events = sample_events();
        let host = TestHost::new();
        let unknown = EventId::new("999").unwrap();

        let err = delete_event(&unknown, DeleteConfirmation::Confirmed, &events, &host)
            .unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
        assert!(host.deleted.borrow().is_empty());
    }

    #[test]
    fn sink_failure_is_reported_without_panicking() {
        let events = sample_events();
        let host = TestHost::new().failing_sink();

        let deleted = delete_event(
            &events[0].id,
            DeleteConfirmation::Confirmed,
            &events,
            &host,
        )
        .unwrap();
        assert!(!deleted);
    }
}
