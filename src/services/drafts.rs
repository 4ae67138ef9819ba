//! Draft-event workflow: map click capture, field edits, submit and cancel.
//!
//! The workflow is a tagged state machine. A draft only exists in the
//! `Capturing` and `Editing` states, so a visible form without coordinates
//! is unrepresentable.

use chrono::{DateTime, Utc};

use crate::domain::auth::AuthenticatedUser;
use crate::domain::event::{DraftEvent, DraftField, Event, EventIdSequence};
use crate::domain::geo::GeoPoint;
use crate::forms::events::{EventForm, EventFormError, EventFormPayload};
use crate::host::EventSink;

use super::{ServiceError, ServiceResult};

/// Public view of the workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStage {
    /// No form shown.
    Idle,
    /// A map click seeded a draft; the form is shown with coordinates set.
    Capturing,
    /// The user has started modifying form fields.
    Editing,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Capturing(DraftEvent),
    Editing(DraftEvent),
}

/// Stateful draft-event workflow.
#[derive(Debug, Default)]
pub struct DraftWorkflow {
    state: State,
    ids: EventIdSequence,
}

impl DraftWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> DraftStage {
        match self.state {
            State::Idle => DraftStage::Idle,
            State::Capturing(_) => DraftStage::Capturing,
            State::Editing(_) => DraftStage::Editing,
        }
    }

    /// The draft under construction, if a form is open.
    pub fn draft(&self) -> Option<&DraftEvent> {
        match &self.state {
            State::Idle => None,
            State::Capturing(draft) | State::Editing(draft) => Some(draft),
        }
    }

    /// Handles a map click.
    ///
    /// Unauthenticated visitors are rejected without capturing anything.
    /// From `Idle` a fresh draft is seeded at the clicked position; while a
    /// form is already open only the coordinates are overwritten, so typed
    /// input survives repositioning the pin.
    pub fn map_click(
        &mut self,
        user: Option<&AuthenticatedUser>,
        position: GeoPoint,
    ) -> ServiceResult<DraftStage> {
        if user.is_none() {
            log::warn!("Map click ignored: visitor is not signed in");
            return Err(ServiceError::Unauthorized);
        }

        match &mut self.state {
            State::Idle => {
                self.state = State::Capturing(DraftEvent::at_position(position));
            }
            State::Capturing(draft) | State::Editing(draft) => {
                draft.reposition(position);
            }
        }
        Ok(self.stage())
    }

    /// Merges a single field edit into the open draft.
    pub fn edit(&mut self, field: DraftField) -> ServiceResult<()> {
        match std::mem::take(&mut self.state) {
            State::Idle => {
                log::warn!("Field edit ignored: no draft is open");
                Err(ServiceError::NotFound)
            }
            State::Capturing(mut draft) | State::Editing(mut draft) => {
                draft.apply(field);
                self.state = State::Editing(draft);
                Ok(())
            }
        }
    }

    /// Validates and finalizes the open draft.
    ///
    /// On validation failure the draft and stage are left untouched and the
    /// message names every unmet requirement. On success the finalized event
    /// is handed to the sink exactly once and the workflow returns to
    /// `Idle`. A sink failure keeps the draft so the user can retry.
    pub fn submit<S>(&mut self, now: DateTime<Utc>, sink: &S) -> ServiceResult<Event>
    where
        S: EventSink,
    {
        let draft = match self.draft() {
            Some(draft) => draft,
            None => {
                log::warn!("Submit ignored: no draft is open");
                return Err(ServiceError::NotFound);
            }
        };

        let mut problems: Vec<String> = Vec::new();

        let payload = match EventFormPayload::try_from(EventForm::from(draft)) {
            Ok(payload) => Some(payload),
            Err(EventFormError::Validation(message))
            | Err(EventFormError::TypeConstraint(message)) => {
                problems.push(message);
                None
            }
        };

        let position = draft.position;
        if position.is_none() {
            problems.push("select a location on the map".to_string());
        }

        if !problems.is_empty() {
            return Err(ServiceError::Validation(problems.join("; ")));
        }

        let (Some(payload), Some(position)) = (payload, position) else {
            return Err(ServiceError::Internal);
        };

        let event = payload
            .into_new_event(position)
            .finalize(self.ids.next(now), now.naive_utc());

        if let Err(e) = sink.event_added(&event) {
            log::error!("Failed to deliver finalized event: {e}");
            return Err(ServiceError::Internal);
        }

        self.state = State::Idle;
        Ok(event)
    }

    /// Discards the draft unconditionally and returns to `Idle`.
    pub fn cancel(&mut self) -> DraftStage {
        self.state = State::Idle;
        DraftStage::Idle
    }
}
