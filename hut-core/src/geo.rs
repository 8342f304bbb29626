//! Geofence check for the mission game.
//!
//! Distances use a flat-degree approximation: the Euclidean distance between
//! two coordinates in degrees, scaled by 111.32 km per degree. It ignores the
//! longitude shrink with latitude, which is fine for a radius of a hundred
//! metres around one shop.
use serde::{Deserialize, Serialize};

pub const KM_PER_DEGREE: f64 = 111.32;

/// Geolocation query settings: low accuracy, short timeout, no cached fixes.
pub const POSITION_TIMEOUT_MS: u32 = 3000;
pub const POSITION_MAX_AGE_MS: u32 = 0;
pub const HIGH_ACCURACY: bool = false;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn flat_distance_km(self, other: Self) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        dlat.hypot(dlng) * KM_PER_DEGREE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeofenceStatus {
    Inside,
    Far,
    PermissionDenied,
    NoSupport,
}

impl GeofenceStatus {
    #[must_use]
    pub const fn is_inside(self) -> bool {
        matches!(self, Self::Inside)
    }

    /// Translation key of the message shown when this status blocks a claim.
    #[must_use]
    pub const fn message_key(self) -> Option<&'static str> {
        match self {
            Self::Inside => None,
            Self::Far => Some("mission.errors.far"),
            Self::PermissionDenied => Some("mission.errors.permission_denied"),
            Self::NoSupport => Some("mission.errors.no_support"),
        }
    }
}

/// Why a position could not be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFailure {
    /// The browser has no geolocation API.
    Unsupported,
    PermissionDenied,
    Unavailable,
    Timeout,
}

impl LocationFailure {
    /// Map a `GeolocationPositionError.code`.
    #[must_use]
    pub const fn from_error_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::Unavailable,
        }
    }
}

impl From<LocationFailure> for GeofenceStatus {
    fn from(failure: LocationFailure) -> Self {
        match failure {
            LocationFailure::PermissionDenied => Self::PermissionDenied,
            LocationFailure::Unsupported
            | LocationFailure::Unavailable
            | LocationFailure::Timeout => Self::NoSupport,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geofence {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl Geofence {
    #[must_use]
    pub const fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.center.flat_distance_km(point) <= self.radius_km
    }

    #[must_use]
    pub fn classify(&self, point: GeoPoint) -> GeofenceStatus {
        if self.contains(point) {
            GeofenceStatus::Inside
        } else {
            GeofenceStatus::Far
        }
    }

    /// Classify the outcome of a position query.
    #[must_use]
    pub fn classify_result(&self, result: Result<GeoPoint, LocationFailure>) -> GeofenceStatus {
        match result {
            Ok(point) => self.classify(point),
            Err(failure) => failure.into(),
        }
    }
}
