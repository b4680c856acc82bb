#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic helpers for events and spots.
//!
//! Answers two questions for the registration flow and the map views:
//! how far apart two points are, and whether a spot lies inside an event's
//! boundary radius. Distances use the Haversine formula on a sphere (no
//! ellipsoid correction).

use serde::{Deserialize, Serialize};

pub mod presets;

pub use presets::{RADIUS_PRESETS, RadiusPreset};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A WGS84 coordinate pair in decimal degrees.
///
/// Range validity (latitude in `[-90, 90]`, longitude in `[-180, 180]`) is
/// the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        calculate_distance_meters(self.lat, self.lng, other.lat, other.lng)
    }
}

/// An event's allowed registration area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boundary {
    /// Map center of the event.
    pub center: Coordinate,
    /// Maximum distance from `center` in meters. `None` means no boundary
    /// is enforced.
    pub radius_meters: Option<f64>,
}

impl Boundary {
    #[must_use]
    pub const fn new(center: Coordinate, radius_meters: Option<f64>) -> Self {
        Self {
            center,
            radius_meters,
        }
    }

    /// Returns `true` when `point` may be registered: always when no radius
    /// is set, otherwise when it lies within the radius (inclusive).
    #[must_use]
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.radius_meters.is_none_or(|radius| {
            is_within_boundary(
                point.lat,
                point.lng,
                self.center.lat,
                self.center.lng,
                radius,
            )
        })
    }

    /// Distance from the center to `point` in meters.
    #[must_use]
    pub fn distance_from_center(&self, point: &Coordinate) -> f64 {
        self.center.distance_to(point)
    }
}

/// Haversine great-circle distance between two lat/lng points in meters.
#[must_use]
pub fn calculate_distance_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let lat1_r = lat1.to_radians();
    let lat2_r = lat2.to_radians();

    // Rounding can push `a` just past 1.0 for near-antipodal points.
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1_r.cos() * lat2_r.cos() * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Returns `true` when the spot is at most `radius_meters` away from the
/// center. A spot exactly on the radius is inside.
#[must_use]
pub fn is_within_boundary(
    spot_lat: f64,
    spot_lng: f64,
    center_lat: f64,
    center_lng: f64,
    radius_meters: f64,
) -> bool {
    calculate_distance_meters(center_lat, center_lng, spot_lat, spot_lng) <= radius_meters
}

/// Formats a distance for display using German conventions.
///
/// Below 1000 m: whole meters (`"999 m"`). From 1000 m: kilometers with one
/// decimal and a comma separator (`"1,5 km"`).
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        // `+ 0.0` turns a rounded `-0.0` into `0.0`.
        return format!("{:.0} m", meters.round() + 0.0);
    }

    // Round half up on tenths of a kilometer before formatting, since `{:.1}`
    // rounds ties to even.
    let km = (meters / 100.0).round() / 10.0;
    format!("{km:.1} km").replace('.', ",")
}
