//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so
//! that identifiers, text values and coordinate ranges are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Latitude must be a finite number in [-90.0, 90.0].
    #[error("latitude must be between -90 and 90")]
    InvalidLatitude,
    /// Longitude must be a finite number in [-180.0, 180.0].
    #[error("longitude must be between -180 and 180")]
    InvalidLongitude,
    /// Zoom level must be in [0, 22].
    #[error("zoom level must be between 0 and 22")]
    InvalidZoom,
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        Self::new_for_field(value, "value")
    }

    /// Same as [`Self::new`] but with field-specific error context.
    pub fn new_for_field<S: Into<String>>(
        value: S,
        field: &'static str,
    ) -> Result<Self, TypeConstraintError> {
        trim_and_require_non_empty(value, field).map(Self)
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new_for_field(value, $field)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

non_empty_string_newtype!(
    EventId,
    "Unique event identifier assigned at finalization.",
    "event id"
);
impl EventId {
    /// Renders a millisecond timestamp as an id. Decimal digits are never
    /// empty, so no constraint check is needed.
    pub(crate) fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }
}

non_empty_string_newtype!(
    EventTitle,
    "Event title enforcing non-empty values.",
    "title"
);
non_empty_string_newtype!(
    EventDescription,
    "Event description enforcing non-empty values.",
    "description"
);
non_empty_string_newtype!(
    EventDate,
    "Calendar date string as entered by the user.",
    "date"
);
non_empty_string_newtype!(
    EventTime,
    "Time-of-day string as entered by the user.",
    "time"
);
non_empty_string_newtype!(
    OrganizerName,
    "Event organizer enforcing non-empty values.",
    "organizer"
);
non_empty_string_newtype!(
    ContactInfo,
    "Organizer contact information enforcing non-empty values.",
    "contact"
);

/// Latitude in decimal degrees, restricted to the inclusive range [-90.0, 90.0].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Latitude(f64);

impl Latitude {
    /// Constructs a validated latitude.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && (-90.0..=90.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidLatitude)
        }
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for Latitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Latitude {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Latitude> for f64 {
    fn from(value: Latitude) -> Self {
        value.0
    }
}

impl PartialEq<f64> for Latitude {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Latitude> for f64 {
    fn eq(&self, other: &Latitude) -> bool {
        *self == other.0
    }
}

/// Longitude in decimal degrees, restricted to the inclusive range [-180.0, 180.0].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Longitude(f64);

impl Longitude {
    /// Constructs a validated longitude.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && (-180.0..=180.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidLongitude)
        }
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for Longitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Longitude {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Longitude> for f64 {
    fn from(value: Longitude) -> Self {
        value.0
    }
}

impl PartialEq<f64> for Longitude {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Longitude> for f64 {
    fn eq(&self, other: &Longitude) -> bool {
        *self == other.0
    }
}

/// Map zoom level restricted to the inclusive range [0, 22].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    /// Constructs a validated zoom level.
    pub fn new(value: u8) -> Result<Self, TypeConstraintError> {
        if value <= 22 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidZoom)
        }
    }

    /// Returns the raw `u8` value.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Display for ZoomLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ZoomLevel {
    type Error = TypeConstraintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ZoomLevel> for u8 {
    fn from(value: ZoomLevel) -> Self {
        value.0
    }
}

/// Closed set of event categories known to the catalog.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Music,
    Tech,
    Volunteering,
    Market,
    Art,
    Sports,
    Education,
}

impl EventCategory {
    /// Every category, in the order the filter controls render them.
    pub const ALL: [EventCategory; 7] = [
        Self::Music,
        Self::Tech,
        Self::Volunteering,
        Self::Market,
        Self::Art,
        Self::Sports,
        Self::Education,
    ];

    /// String representation used on the wire and in CSS class names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Music => "Music",
            Self::Tech => "Tech",
            Self::Volunteering => "Volunteering",
            Self::Market => "Market",
            Self::Art => "Art",
            Self::Sports => "Sports",
            Self::Education => "Education",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Music => 0,
            Self::Tech => 1,
            Self::Volunteering => 2,
            Self::Market => 3,
            Self::Art => 4,
            Self::Sports => 5,
            Self::Education => 6,
        }
    }
}

impl Display for EventCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for EventCategory {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Music" => Ok(Self::Music),
            "Tech" => Ok(Self::Tech),
            "Volunteering" => Ok(Self::Volunteering),
            "Market" => Ok(Self::Market),
            "Art" => Ok(Self::Art),
            "Sports" => Ok(Self::Sports),
            "Education" => Ok(Self::Education),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown category: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for EventCategory {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<EventCategory> for String {
    fn from(value: EventCategory) -> Self {
        value.as_str().to_string()
    }
}
