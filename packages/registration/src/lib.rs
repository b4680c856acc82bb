#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Rules between the participant-facing forms and the data store.
//!
//! - [`spots`]: normalize, geocode, and boundary-check a submitted spot
//! - [`deletion`]: verify a deletion request by exact address match
//! - [`slugs`]: claim a unique slug for a new tenant or event
//!
//! Nothing here persists anything; callers store the returned values.

pub mod deletion;
pub mod slugs;
pub mod spots;

use quartier_spots_address::{NormalizedAddress, normalize_address};
use quartier_spots_geocoder::GeocodeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use deletion::{address_matches, request_deletion};
pub use slugs::claim_slug;
pub use spots::{SpotDraft, SpotSubmission, check_boundary, register_spot};

/// Raw address fragments as typed into a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFragments {
    /// Street name.
    pub street: Option<String>,
    /// House number.
    pub house_number: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
    /// City.
    pub city: Option<String>,
}

impl AddressFragments {
    /// Normalizes all fragments.
    #[must_use]
    pub fn normalize(&self) -> NormalizedAddress {
        normalize_address(
            self.street.as_deref(),
            self.house_number.as_deref(),
            self.zip.as_deref(),
            self.city.as_deref(),
        )
    }
}

/// Errors from the registration workflow.
///
/// The `Display` forms are German because they are shown as form
/// validation messages.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Street or city is missing.
    #[error("Bitte Straße und Ort angeben")]
    IncompleteAddress,

    /// The geocoder found no location for the address.
    #[error("Adresse nicht gefunden: {query}")]
    AddressNotFound {
        /// The one-line address that was looked up.
        query: String,
    },

    /// The location lies outside the event's boundary radius.
    #[error("{label} ({distance} vom Mittelpunkt, erlaubt sind {radius})")]
    OutsideBoundary {
        /// The event's "outside boundary" phrase.
        label: String,
        /// Formatted distance from the event center.
        distance: String,
        /// Formatted boundary radius.
        radius: String,
    },

    /// The spot belongs to a different event.
    #[error("Der Eintrag gehört nicht zu dieser Veranstaltung")]
    SpotNotInEvent,

    /// The submitted address does not match the spot's stored address.
    #[error("Die Adresse stimmt nicht mit dem Eintrag überein")]
    AddressMismatch,

    /// The name produces no usable slug.
    #[error("Aus '{name}' lässt sich keine URL erzeugen")]
    EmptySlug {
        /// The name the slug was generated from.
        name: String,
    },

    /// The geocoder failed.
    #[error("Geocoding fehlgeschlagen: {0}")]
    Geocode(#[from] GeocodeError),
}
