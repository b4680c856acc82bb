//! Spot registration.
//!
//! A submission goes through the same steps the registration form shows:
//!
//! 1. Normalize the address fragments
//! 2. Geocode the one-line address
//! 3. Check the location against the event boundary
//!
//! The result is a [`SpotDraft`] ready to be stored.

use quartier_spots_address::NormalizedAddress;
use quartier_spots_geo::{Coordinate, format_distance};
use quartier_spots_geocoder::Geocoder;
use quartier_spots_models::Event;
use serde::{Deserialize, Serialize};

use crate::{AddressFragments, RegistrationError};

/// A spot as submitted through the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotSubmission {
    /// Address as typed.
    pub address: AddressFragments,
    /// Contact person.
    pub contact_name: Option<String>,
    /// Contact email.
    pub contact_email: Option<String>,
    /// What is on offer.
    pub description: Option<String>,
}

/// A validated spot, not yet stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotDraft {
    /// Normalized address.
    pub address: NormalizedAddress,
    /// Geocoded location.
    pub location: Coordinate,
    /// Address as reported by the geocoder.
    pub matched_address: Option<String>,
    /// Distance from the event's map center in meters.
    pub distance_from_center_meters: f64,
    /// Contact person.
    pub contact_name: Option<String>,
    /// Contact email.
    pub contact_email: Option<String>,
    /// What is on offer.
    pub description: Option<String>,
}

/// Checks `location` against the event's boundary.
///
/// Returns the distance from the event center in meters.
///
/// # Errors
///
/// Returns [`RegistrationError::OutsideBoundary`] if the event has a radius
/// and `location` lies beyond it.
pub fn check_boundary(event: &Event, location: &Coordinate) -> Result<f64, RegistrationError> {
    let boundary = event.boundary();
    let distance = boundary.distance_from_center(location);

    if boundary.contains(location) {
        return Ok(distance);
    }

    let radius = boundary.radius_meters.unwrap_or_default();
    log::warn!(
        "Location {},{} is {distance:.0} m from the center of event {}, limit is {radius:.0} m",
        location.lat,
        location.lng,
        event.slug,
    );

    Err(RegistrationError::OutsideBoundary {
        label: event.terms().outside_boundary,
        distance: format_distance(distance),
        radius: format_distance(radius),
    })
}

/// Validates a submission for `event` and resolves its location.
///
/// # Errors
///
/// * [`RegistrationError::IncompleteAddress`] if street or city is missing
/// * [`RegistrationError::AddressNotFound`] if the geocoder has no match
/// * [`RegistrationError::OutsideBoundary`] if the location is outside the
///   event boundary
/// * [`RegistrationError::Geocode`] if the geocoder fails
pub async fn register_spot<G: Geocoder + ?Sized>(
    geocoder: &G,
    event: &Event,
    submission: &SpotSubmission,
) -> Result<SpotDraft, RegistrationError> {
    let address = submission.address.normalize();
    if !address.is_complete() {
        return Err(RegistrationError::IncompleteAddress);
    }

    let query = address.one_line();
    log::debug!("Geocoding spot address for event {}: {query}", event.slug);

    let Some(geocoded) = geocoder.geocode(&query).await? else {
        return Err(RegistrationError::AddressNotFound { query });
    };

    let distance = check_boundary(event, &geocoded.location)?;

    Ok(SpotDraft {
        address,
        location: geocoded.location,
        matched_address: geocoded.matched_address,
        distance_from_center_meters: distance,
        contact_name: submission.contact_name.clone(),
        contact_email: submission.contact_email.clone(),
        description: submission.description.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use quartier_spots_geocoder::{GeocodeError, GeocodedAddress};
    use uuid::Uuid;

    use super::*;

    const CENTER: Coordinate = Coordinate::new(49.4521, 11.0767);

    /// Returns a fixed location and records every query.
    struct FixedGeocoder {
        location: Option<Coordinate>,
        queries: Mutex<Vec<String>>,
    }

    impl FixedGeocoder {
        fn new(location: Option<Coordinate>) -> Self {
            Self {
                location,
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl Geocoder for FixedGeocoder {
        async fn geocode(&self, query: &str) -> Result<Option<GeocodedAddress>, GeocodeError> {
            self.queries.lock().unwrap().push(query.to_string());
            Ok(self.location.map(|location| GeocodedAddress {
                location,
                matched_address: Some(format!("{query}, Deutschland")),
            }))
        }
    }

    struct FailingGeocoder;

    #[async_trait::async_trait]
    impl Geocoder for FailingGeocoder {
        async fn geocode(&self, _query: &str) -> Result<Option<GeocodedAddress>, GeocodeError> {
            Err(GeocodeError::RateLimited)
        }
    }

    fn event(radius: Option<f64>) -> Event {
        Event {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            title: "Markt am Plärrer".into(),
            slug: "markt-am-plaerrer".into(),
            starts_on: None,
            map_center: CENTER,
            boundary_radius_meters: radius,
            spot_singular: Some("Stand".into()),
            spot_plural: Some("Stände".into()),
        }
    }

    fn submission() -> SpotSubmission {
        SpotSubmission {
            address: AddressFragments {
                street: Some("hauptstr".into()),
                house_number: Some("42 a".into()),
                zip: Some("90402".into()),
                city: Some("nürnberg".into()),
            },
            contact_name: Some("Erika Mustermann".into()),
            contact_email: None,
            description: Some("Bücher und Platten".into()),
        }
    }

    #[tokio::test]
    async fn registers_spot_inside_boundary() {
        let near = Coordinate::new(49.4540, 11.0790);
        let geocoder = FixedGeocoder::new(Some(near));

        let draft = register_spot(&geocoder, &event(Some(1_000.0)), &submission())
            .await
            .unwrap();

        assert_eq!(draft.location, near);
        assert_eq!(draft.address.street.as_deref(), Some("Hauptstraße"));
        assert!(draft.distance_from_center_meters < 1_000.0);
        assert_eq!(draft.description.as_deref(), Some("Bücher und Platten"));
        assert_eq!(
            geocoder.queries.lock().unwrap().as_slice(),
            ["Hauptstraße 42A, 90402 Nürnberg"]
        );
    }

    #[tokio::test]
    async fn rejects_spot_outside_boundary() {
        let far = Coordinate::new(49.0134, 12.1016);
        let geocoder = FixedGeocoder::new(Some(far));

        let err = register_spot(&geocoder, &event(Some(2_000.0)), &submission())
            .await
            .unwrap_err();

        match err {
            RegistrationError::OutsideBoundary {
                label,
                distance,
                radius,
            } => {
                assert_eq!(label, "Stand liegt außerhalb des erlaubten Bereichs");
                assert!(distance.ends_with(" km"));
                assert_eq!(radius, "2,0 km");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn no_radius_accepts_any_location() {
        let far = Coordinate::new(52.5200, 13.4050);
        let geocoder = FixedGeocoder::new(Some(far));

        let draft = register_spot(&geocoder, &event(None), &submission())
            .await
            .unwrap();
        assert!(draft.distance_from_center_meters > 100_000.0);
    }

    #[tokio::test]
    async fn unknown_address_is_reported() {
        let geocoder = FixedGeocoder::new(None);

        let err = register_spot(&geocoder, &event(None), &submission())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::AddressNotFound { query } if query == "Hauptstraße 42A, 90402 Nürnberg"
        ));
    }

    #[tokio::test]
    async fn incomplete_address_skips_geocoding() {
        let geocoder = FixedGeocoder::new(Some(CENTER));
        let mut submission = submission();
        submission.address.city = Some("   ".into());

        let err = register_spot(&geocoder, &event(None), &submission)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrationError::IncompleteAddress));
        assert!(geocoder.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn geocoder_failure_propagates() {
        let err = register_spot(&FailingGeocoder, &event(None), &submission())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::Geocode(GeocodeError::RateLimited)
        ));
    }

    #[test]
    fn boundary_check_returns_distance() {
        let distance = check_boundary(&event(Some(500.0)), &CENTER).unwrap();
        assert!(distance.abs() < f64::EPSILON);
    }
}
