use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::geo::GeoPoint;
use crate::domain::types::{
    ContactInfo, EventCategory, EventDate, EventDescription, EventId, EventTime, EventTitle,
    OrganizerName,
};

/// A finalized catalog event.
///
/// The collection of these records is owned by the caller and re-supplied on
/// every render; this crate never mutates it in place. Construction goes
/// through [`NewEvent::finalize`], so an `Event` always carries a title, a
/// category, coordinates, an identity and a creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: EventTitle,
    pub category: EventCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<EventDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<EventDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<EventTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<OrganizerName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    #[serde(flatten)]
    pub position: GeoPoint,
    pub created_at: NaiveDateTime,
}

/// A validated event that has not yet been assigned identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: EventTitle,
    pub category: EventCategory,
    pub description: Option<EventDescription>,
    pub date: Option<EventDate>,
    pub time: Option<EventTime>,
    pub organizer: Option<OrganizerName>,
    pub contact: Option<ContactInfo>,
    pub position: GeoPoint,
}

impl NewEvent {
    /// Promotes the record to a finalized [`Event`].
    pub fn finalize(self, id: EventId, created_at: NaiveDateTime) -> Event {
        Event {
            id,
            title: self.title,
            category: self.category,
            description: self.description,
            date: self.date,
            time: self.time,
            organizer: self.organizer,
            contact: self.contact,
            position: self.position,
            created_at,
        }
    }
}

/// Names exactly one editable draft field together with its new raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Description(String),
    Category(String),
    Date(String),
    Time(String),
    Organizer(String),
    Contact(String),
}

/// Mutable working copy of an event under construction.
///
/// Text fields stay raw (possibly empty) until submit-time validation; the
/// position can only be set through a map click.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftEvent {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub organizer: String,
    pub contact: String,
    pub position: Option<GeoPoint>,
}

impl DraftEvent {
    /// Starts a draft anchored at a clicked map position.
    pub fn at_position(position: GeoPoint) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Merges a single field edit, leaving every other field untouched.
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Title(value) => self.title = value,
            DraftField::Description(value) => self.description = value,
            DraftField::Category(value) => self.category = value,
            DraftField::Date(value) => self.date = value,
            DraftField::Time(value) => self.time = value,
            DraftField::Organizer(value) => self.organizer = value,
            DraftField::Contact(value) => self.contact = value,
        }
    }

    /// Re-anchors the draft after a repeat map click, preserving typed input.
    pub fn reposition(&mut self, position: GeoPoint) {
        self.position = Some(position);
    }
}

/// Issues unique, timestamp-derived event identifiers.
///
/// Ids are the millisecond timestamp rendered as a string, bumped past the
/// previously issued value so two submits within the same millisecond still
/// receive distinct ids.
#[derive(Debug, Default)]
pub struct EventIdSequence {
    last_millis: i64,
}

impl EventIdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next identifier for the given instant.
    pub fn next(&mut self, now: DateTime<Utc>) -> EventId {
        let millis = now.timestamp_millis().max(self.last_millis + 1);
        self.last_millis = millis;
        EventId::from_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_new_event() -> NewEvent {
        NewEvent {
            title: EventTitle::new("Jam Session").unwrap(),
            category: EventCategory::Music,
            description: None,
            date: None,
            time: None,
            organizer: None,
            contact: None,
            position: GeoPoint::new(40.71, -74.0).unwrap(),
        }
    }

    #[test]
    fn finalize_carries_identity_and_timestamp() {
        let created_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap().naive_utc();
        let event = sample_new_event().finalize(EventId::new("1700000000000").unwrap(), created_at);

        assert_eq!(event.id, "1700000000000");
        assert_eq!(event.title, "Jam Session");
        assert_eq!(event.created_at, created_at);
    }

    #[test]
    fn apply_touches_exactly_one_field() {
        let mut draft = DraftEvent::at_position(GeoPoint::new(10.0, 20.0).unwrap());
        draft.apply(DraftField::Title("Meetup".into()));
        draft.apply(DraftField::Category("Tech".into()));

        assert_eq!(draft.title, "Meetup");
        assert_eq!(draft.category, "Tech");
        assert!(draft.description.is_empty());
        assert_eq!(draft.position, Some(GeoPoint::new(10.0, 20.0).unwrap()));
    }

    #[test]
    fn reposition_keeps_typed_input() {
        let mut draft = DraftEvent::at_position(GeoPoint::new(10.0, 20.0).unwrap());
        draft.apply(DraftField::Title("Meetup".into()));
        draft.reposition(GeoPoint::new(30.0, 40.0).unwrap());

        assert_eq!(draft.title, "Meetup");
        assert_eq!(draft.position, Some(GeoPoint::new(30.0, 40.0).unwrap()));
    }

    #[test]
    fn id_sequence_is_unique_within_one_millisecond() {
        let mut ids = EventIdSequence::new();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        let first = ids.next(now);
        let second = ids.next(now);
        let third = ids.next(now);

        assert_eq!(first, "1700000000000");
        assert_eq!(second, "1700000000001");
        assert_eq!(third, "1700000000002");
    }

    #[test]
    fn id_sequence_follows_the_clock() {
        let mut ids = EventIdSequence::new();
        let first = ids.next(Utc.timestamp_millis_opt(1_000).unwrap());
        let second = ids.next(Utc.timestamp_millis_opt(5_000).unwrap());

        assert_eq!(first, "1000");
        assert_eq!(second, "5000");
    }

    #[test]
    fn event_wire_shape_keeps_flat_coordinates() {
        let created_at = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        let event = sample_new_event().finalize(EventId::new("1").unwrap(), created_at);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["lat"], 40.71);
        assert_eq!(value["lng"], -74.0);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("position").is_none());

        let back: Event = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
    }
}
