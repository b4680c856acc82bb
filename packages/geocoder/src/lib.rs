#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geocoding for spot registration.
//!
//! Converts a normalized one-line address (`"Hauptstraße 42A, 90402
//! Nürnberg"`) into coordinates. The [`Geocoder`] trait is the seam the
//! registration workflow depends on; [`nominatim::NominatimGeocoder`] is the
//! production implementation, configured from the embedded
//! `services/nominatim.toml` (see [`service`]).

pub mod nominatim;
pub mod service;

use quartier_spots_geo::Coordinate;
use thiserror::Error;

/// A geocoding result.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    /// Resolved location (WGS84).
    pub location: Coordinate,
    /// The matched/canonical address returned by the provider.
    pub matched_address: Option<String>,
}

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,
}

/// Resolves free-form address queries to coordinates.
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Geocodes `query`. Returns `Ok(None)` when the provider found no
    /// match.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the provider could not be queried.
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedAddress>, GeocodeError>;
}
