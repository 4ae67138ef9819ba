//! Static presentation tables for markers and map tiles.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::types::{EventCategory, TypeConstraintError};

/// Marker color and glyph assigned to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub glyph: &'static str,
}

impl MarkerStyle {
    /// Neutral pin used when presentation is requested for data outside the
    /// closed category set (string-keyed callers only; domain values cannot
    /// reach it).
    pub const FALLBACK: MarkerStyle = MarkerStyle {
        color: "#333333",
        glyph: "📌",
    };

    /// Fixed category-to-presentation table.
    pub const fn for_category(category: EventCategory) -> MarkerStyle {
        match category {
            EventCategory::Music => MarkerStyle {
                color: "#FF6B6B",
                glyph: "🎵",
            },
            EventCategory::Tech => MarkerStyle {
                color: "#38BDF8",
                glyph: "💻",
            },
            EventCategory::Volunteering => MarkerStyle {
                color: "#4CAF50",
                glyph: "🤝",
            },
            EventCategory::Market => MarkerStyle {
                color: "#FACC15",
                glyph: "🛍️",
            },
            EventCategory::Art => MarkerStyle {
                color: "#9C27B0",
                glyph: "🎨",
            },
            EventCategory::Sports => MarkerStyle {
                color: "#FF9800",
                glyph: "🏆",
            },
            EventCategory::Education => MarkerStyle {
                color: "#3F51B5",
                glyph: "📚",
            },
        }
    }

    /// Looks up a style by raw category name, falling back to the neutral pin.
    pub fn for_category_name(name: &str) -> MarkerStyle {
        match EventCategory::try_from(name) {
            Ok(category) => Self::for_category(category),
            Err(_) => Self::FALLBACK,
        }
    }
}

/// Two-valued map tile mode.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MapStyle {
    #[default]
    Standard,
    Satellite,
}

impl MapStyle {
    /// Tile source template for the host map surface.
    pub const fn tile_url(self) -> &'static str {
        match self {
            Self::Standard => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
        }
    }

    /// Attribution string matching the tile source.
    pub const fn attribution(self) -> &'static str {
        match self {
            Self::Standard => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
            Self::Satellite => {
                "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community"
            }
        }
    }

    /// Cosmetic CSS filter applied to rendered tiles.
    pub const fn tile_filter(self) -> &'static str {
        match self {
            Self::Standard => "none",
            Self::Satellite => "contrast(1.1) saturate(1.1)",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Satellite => "satellite",
        }
    }
}

impl Display for MapStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for MapStyle {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "standard" => Ok(Self::Standard),
            "satellite" => Ok(Self::Satellite),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown map style: {other}"
            ))),
        }
    }
}
