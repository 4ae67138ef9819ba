use serde::Serialize;

use crate::domain::event::Event;
use crate::domain::marker::MarkerStyle;
use crate::domain::types::EventCategory;

/// Marker projection handed to the host map surface for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMarkerDto {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub color: &'static str,
    pub glyph: &'static str,
    pub css_class: String,
    pub title: String,
    pub category: String,
}

impl From<&Event> for EventMarkerDto {
    fn from(event: &Event) -> Self {
        let style = MarkerStyle::for_category(event.category);
        let category = event.category.as_str();
        Self {
            id: event.id.as_str().to_string(),
            lat: event.position.lat.get(),
            lng: event.position.lng.get(),
            color: style.color,
            glyph: style.glyph,
            css_class: format!("event-marker {}-marker", category.to_lowercase()),
            title: event.title.as_str().to_string(),
            category: category.to_string(),
        }
    }
}

/// Filter control row entry: one tag per category with its active flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterTagDto {
    pub category: String,
    pub color: &'static str,
    pub glyph: &'static str,
    pub active: bool,
}

impl FilterTagDto {
    pub fn new(category: EventCategory, active: bool) -> Self {
        let style = MarkerStyle::for_category(category);
        Self {
            category: category.as_str().to_string(),
            color: style.color,
            glyph: style.glyph,
            active,
        }
    }
}
