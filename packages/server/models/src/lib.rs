#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the QuartierSpots server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the library types to allow independent evolution of the API
//! contract.

use quartier_spots_address::NormalizedAddress;
use quartier_spots_geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable message, suitable for a form validation hint.
    pub error: String,
}

/// Address fragments as typed into a form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAddressInput {
    /// Street name.
    pub street: Option<String>,
    /// House number.
    pub house_number: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
    /// City.
    pub city: Option<String>,
}

/// A normalized address as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNormalizedAddress {
    /// Street name.
    pub street: Option<String>,
    /// House number.
    pub house_number: Option<String>,
    /// Five-digit postal code.
    pub zip: Option<String>,
    /// City.
    pub city: Option<String>,
    /// `"{street} {houseNumber}, {zip} {city}"`.
    pub one_line: String,
}

impl From<NormalizedAddress> for ApiNormalizedAddress {
    fn from(address: NormalizedAddress) -> Self {
        let one_line = address.one_line();
        Self {
            street: address.street,
            house_number: address.house_number,
            zip: address.zip,
            city: address.city,
            one_line,
        }
    }
}

/// Geocoding result for a normalized address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGeocodeResult {
    /// The normalized address that was looked up.
    pub address: ApiNormalizedAddress,
    /// Resolved location.
    pub location: Coordinate,
    /// Address as reported by the geocoder.
    pub matched_address: Option<String>,
}

/// Query parameters for the slug endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SlugQueryParams {
    /// Display name to derive the slug from.
    pub name: String,
}

/// Slug endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSlug {
    /// Generated slug; empty when the name has no usable characters.
    pub slug: String,
}

/// Query parameters for the distance endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceQueryParams {
    /// Start latitude.
    pub from_lat: f64,
    /// Start longitude.
    pub from_lng: f64,
    /// End latitude.
    pub to_lat: f64,
    /// End longitude.
    pub to_lng: f64,
}

/// Distance endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDistance {
    /// Great-circle distance in meters.
    pub meters: f64,
    /// Display form (e.g. `"1,5 km"`).
    pub formatted: String,
}

/// Boundary check request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryCheckRequest {
    /// Location of the spot.
    pub spot: Coordinate,
    /// Event map center.
    pub center: Coordinate,
    /// Boundary radius; `None` means unrestricted.
    pub radius_meters: Option<f64>,
}

/// Boundary check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBoundaryCheck {
    /// Whether the spot may be registered.
    pub within: bool,
    /// Distance from the center in meters.
    pub distance_meters: f64,
    /// Display form of the distance.
    pub formatted: String,
}

/// Query parameters for the terminology endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermsQueryParams {
    /// Singular override.
    pub singular: Option<String>,
    /// Plural override.
    pub plural: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_address_includes_one_line() {
        let address = NormalizedAddress {
            street: Some("Hauptstraße".into()),
            house_number: Some("42A".into()),
            zip: Some("00931".into()),
            city: Some("Nürnberg".into()),
        };
        let json = serde_json::to_value(ApiNormalizedAddress::from(address)).unwrap();
        assert_eq!(json["oneLine"], "Hauptstraße 42A, 00931 Nürnberg");
        assert_eq!(json["houseNumber"], "42A");
    }

    #[test]
    fn distance_params_are_camel_case() {
        let params: DistanceQueryParams = serde_json::from_value(serde_json::json!({
            "fromLat": 49.45, "fromLng": 11.07, "toLat": 49.01, "toLng": 12.10
        }))
        .unwrap();
        assert!((params.to_lng - 12.10).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_request_radius_is_optional() {
        let request: BoundaryCheckRequest = serde_json::from_value(serde_json::json!({
            "spot": { "lat": 49.45, "lng": 11.07 },
            "center": { "lat": 49.45, "lng": 11.08 }
        }))
        .unwrap();
        assert!(request.radius_meters.is_none());
    }
}
