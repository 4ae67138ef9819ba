//! Runtime configuration for the embedding application.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::geo::GeoPoint;
use crate::domain::types::{TypeConstraintError, ZoomLevel};

/// Configuration options specific to the map explorer.
///
/// Defaults reproduce the original deployment: Lower Manhattan at zoom 13,
/// and the same zoom for the "find nearby" recentering.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: u8,
    pub nearby_zoom: u8,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 40.7128,
            default_center_lng: -74.0060,
            default_zoom: 13,
            nearby_zoom: 13,
        }
    }
}

impl ExplorerConfig {
    /// Loads configuration from an optional `map_explorer` file plus
    /// `MAP_EXPLORER_`-prefixed environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("map_explorer").required(false))
            .add_source(Environment::with_prefix("MAP_EXPLORER").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Validated initial viewport center.
    pub fn center(&self) -> Result<GeoPoint, TypeConstraintError> {
        GeoPoint::new(self.default_center_lat, self.default_center_lng)
    }

    /// Validated initial zoom level.
    pub fn initial_zoom(&self) -> Result<ZoomLevel, TypeConstraintError> {
        ZoomLevel::new(self.default_zoom)
    }

    /// Validated zoom used when recentering on the user's position.
    pub fn nearby(&self) -> Result<ZoomLevel, TypeConstraintError> {
        ZoomLevel::new(self.nearby_zoom)
    }
}
