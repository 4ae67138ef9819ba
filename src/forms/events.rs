use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::event::{DraftEvent, NewEvent};
use crate::domain::geo::GeoPoint;
use crate::domain::types::{
    ContactInfo, EventCategory, EventDate, EventDescription, EventTime, EventTitle, OrganizerName,
    TypeConstraintError,
};

fn optional_field(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Raw add-event form as entered by the user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EventForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub organizer: Option<String>,
    pub contact: Option<String>,
}

/// Checked add-event form data with domain-typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFormPayload {
    pub title: EventTitle,
    pub category: EventCategory,
    pub description: Option<EventDescription>,
    pub date: Option<EventDate>,
    pub time: Option<EventTime>,
    pub organizer: Option<OrganizerName>,
    pub contact: Option<ContactInfo>,
}

impl EventFormPayload {
    /// Anchors the payload at a map-click position, producing the record that
    /// is finalized on submit.
    pub fn into_new_event(self, position: GeoPoint) -> NewEvent {
        NewEvent {
            title: self.title,
            category: self.category,
            description: self.description,
            date: self.date,
            time: self.time,
            organizer: self.organizer,
            contact: self.contact,
            position,
        }
    }
}

#[derive(Debug, Error)]
pub enum EventFormError {
    #[error("event form validation failed: {0}")]
    Validation(String),
    #[error("event form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for EventFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for EventFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<EventForm> for EventFormPayload {
    type Error = EventFormError;

    fn try_from(value: EventForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let description = optional_field(value.description)
            .map(EventDescription::new)
            .transpose()?;
        let date = optional_field(value.date).map(EventDate::new).transpose()?;
        let time = optional_field(value.time).map(EventTime::new).transpose()?;
        let organizer = optional_field(value.organizer)
            .map(OrganizerName::new)
            .transpose()?;
        let contact = optional_field(value.contact)
            .map(ContactInfo::new)
            .transpose()?;

        Ok(Self {
            title: EventTitle::new(value.title)?,
            category: EventCategory::try_from(value.category)?,
            description,
            date,
            time,
            organizer,
            contact,
        })
    }
}

impl From<&DraftEvent> for EventForm {
    fn from(draft: &DraftEvent) -> Self {
        Self {
            title: draft.title.clone(),
            category: draft.category.clone(),
            description: optional_field(Some(draft.description.clone())),
            date: optional_field(Some(draft.date.clone())),
            time: optional_field(Some(draft.time.clone())),
            organizer: optional_field(Some(draft.organizer.clone())),
            contact: optional_field(Some(draft.contact.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EventForm {
        EventForm {
            title: "Meetup".to_string(),
            category: "Tech".to_string(),
            description: Some("Monthly meetup".to_string()),
            date: Some("2026-09-01".to_string()),
            time: Some("18:30".to_string()),
            organizer: Some("Ada".to_string()),
            contact: Some("ada@example.com".to_string()),
        }
    }

    #[test]
    fn converts_filled_form() {
        let payload: EventFormPayload = filled_form().try_into().unwrap();
        assert_eq!(payload.title, "Meetup");
        assert_eq!(payload.category, EventCategory::Tech);
        assert_eq!(payload.organizer.as_deref(), Some("Ada"));
    }

    #[test]
    fn rejects_missing_title() {
        let form = EventForm {
            title: String::new(),
            ..filled_form()
        };
        let err = EventFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, EventFormError::Validation(_)));
        assert!(err.to_string().contains("title is required"));
    }

    #[test]
    fn rejects_unknown_category() {
        let form = EventForm {
            category: "Karaoke".to_string(),
            ..filled_form()
        };
        let err = EventFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, EventFormError::TypeConstraint(_)));
        assert!(err.to_string().contains("unknown category"));
    }

    #[test]
    fn drops_blank_optional_fields() {
        let form = EventForm {
            description: Some("   ".to_string()),
            organizer: None,
            ..filled_form()
        };
        let payload: EventFormPayload = form.try_into().unwrap();
        assert!(payload.description.is_none());
        assert!(payload.organizer.is_none());
    }

    #[test]
    fn maps_draft_onto_form() {
        let mut draft = DraftEvent::default();
        draft.title = "Meetup".to_string();
        draft.category = "Tech".to_string();
        draft.organizer = " ".to_string();

        let form = EventForm::from(&draft);
        assert_eq!(form.title, "Meetup");
        assert!(form.organizer.is_none());
        assert!(form.description.is_none());
    }

    #[test]
    fn anchors_payload_at_position() {
        let payload: EventFormPayload = filled_form().try_into().unwrap();
        let new_event = payload.into_new_event(GeoPoint::new(10.0, 20.0).unwrap());
        assert_eq!(new_event.position.lat, 10.0);
        assert_eq!(new_event.title, "Meetup");
    }
}
