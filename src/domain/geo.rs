use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::types::{Latitude, Longitude, TypeConstraintError};

/// A validated geographic coordinate pair.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: Latitude,
    pub lng: Longitude,
}

impl GeoPoint {
    /// Builds a point from raw coordinates, validating both axes.
    pub fn new(lat: f64, lng: f64) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            lat: Latitude::new(lat)?,
            lng: Longitude::new(lng)?,
        })
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = TypeConstraintError;

    fn try_from((lat, lng): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lat, lng)
    }
}
