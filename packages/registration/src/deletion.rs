//! Deletion request verification.
//!
//! Participants have no account, so a deletion request is accepted only when
//! the submitted address matches the stored spot address exactly after
//! normalization. Organizers then approve or reject it.

use chrono::{DateTime, Utc};
use quartier_spots_address::NormalizedAddress;
use quartier_spots_models::{DeletionRequest, Event, Spot};

use crate::{AddressFragments, RegistrationError};

/// Fields compared for an exact match; empty strings count as absent.
fn match_key(address: &NormalizedAddress) -> [Option<&str>; 4] {
    [
        address.street.as_deref(),
        address.house_number.as_deref(),
        address.zip.as_deref(),
        address.city.as_deref(),
    ]
    .map(|part| part.filter(|s| !s.is_empty()))
}

/// Returns `true` when `submitted` normalizes to the spot's stored address.
#[must_use]
pub fn address_matches(spot: &Spot, submitted: &AddressFragments) -> bool {
    let normalized = submitted.normalize();
    match_key(&normalized) == match_key(&spot.address)
}

/// Files a pending deletion request for `spot`, owned by the event's
/// tenant.
///
/// # Errors
///
/// Returns [`RegistrationError::SpotNotInEvent`] if `spot` belongs to another
/// event, or [`RegistrationError::AddressMismatch`] if `submitted` does not
/// match the spot's address.
pub fn request_deletion(
    event: &Event,
    spot: &Spot,
    submitted: &AddressFragments,
    reason: Option<String>,
    now: DateTime<Utc>,
) -> Result<DeletionRequest, RegistrationError> {
    if spot.event_id != event.id {
        log::warn!("Spot {} is not part of event {}", spot.id, event.id);
        return Err(RegistrationError::SpotNotInEvent);
    }
    if !address_matches(spot, submitted) {
        log::warn!("Deletion request for spot {} with non-matching address", spot.id);
        return Err(RegistrationError::AddressMismatch);
    }

    let reason = reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty());
    let request = DeletionRequest::new(event.tenant_id, spot.id, reason, now);
    log::info!("Deletion request {} filed for spot {}", request.id, spot.id);

    Ok(request)
}
