#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Records persisted by the QuartierSpots data store.
//!
//! Tenants own events and members, events own spots, and participants file
//! deletion requests against their own spots. The store itself is external;
//! these types are the shapes exchanged with it, plus the moderation rules
//! that apply to deletion requests.

use chrono::{DateTime, NaiveDate, Utc};
use quartier_spots_address::NormalizedAddress;
use quartier_spots_geo::{Boundary, Coordinate};
use quartier_spots_terminology::{SpotTerms, get_spot_terms};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;
use uuid::Uuid;

/// An organizing entity (club, association) that owns events and members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Unique tenant ID.
    pub id: Uuid,
    /// Display name (e.g. `"Bürgerverein Südstadt"`).
    pub name: String,
    /// URL slug, generated once from the name.
    pub slug: String,
    /// When the tenant was created.
    pub created_at: DateTime<Utc>,
}

/// A member's role within a tenant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MemberRole {
    /// Created the tenant; full control.
    Owner,
    /// Manages events and moderates deletion requests.
    Admin,
    /// Can view the tenant's events.
    Member,
}

impl MemberRole {
    /// Whether this role may approve or reject deletion requests.
    #[must_use]
    pub const fn can_moderate(self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }

    /// Whether this role may add, remove, or re-role members.
    #[must_use]
    pub const fn can_manage_members(self) -> bool {
        matches!(self, Self::Owner)
    }
}

/// A user's membership in a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    /// Tenant the membership belongs to.
    pub tenant_id: Uuid,
    /// Authenticated user ID.
    pub user_id: Uuid,
    /// Role within the tenant.
    pub role: MemberRole,
}

/// A scheduled flea market owned by a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event ID.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Display title (e.g. `"Hofflohmarkt Südstadt 2025"`).
    pub title: String,
    /// URL slug, unique within the tenant.
    pub slug: String,
    /// Event date, if scheduled.
    pub starts_on: Option<NaiveDate>,
    /// Initial map center and boundary center.
    pub map_center: Coordinate,
    /// Registration radius around `map_center`; `None` allows any location.
    pub boundary_radius_meters: Option<f64>,
    /// Singular override for "Spot".
    pub spot_singular: Option<String>,
    /// Plural override for "Spots".
    pub spot_plural: Option<String>,
}

impl Event {
    /// The area in which spots may be registered.
    #[must_use]
    pub const fn boundary(&self) -> Boundary {
        Boundary::new(self.map_center, self.boundary_radius_meters)
    }

    /// The display strings for this event's spot terminology.
    #[must_use]
    pub fn terms(&self) -> SpotTerms {
        get_spot_terms(self.spot_singular.as_deref(), self.spot_plural.as_deref())
    }
}

/// A registered sale location within an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    /// Unique spot ID.
    pub id: Uuid,
    /// Event the spot belongs to.
    pub event_id: Uuid,
    /// Normalized address, also the key for deletion verification.
    pub address: NormalizedAddress,
    /// Geocoded location.
    pub location: Coordinate,
    /// Contact person shown on the map.
    pub contact_name: Option<String>,
    /// Contact email, never shown publicly.
    pub contact_email: Option<String>,
    /// What is on offer.
    pub description: Option<String>,
    /// Storage path of the uploaded image.
    pub image_path: Option<String>,
    /// When the spot was registered.
    pub created_at: DateTime<Utc>,
}

/// Moderation state of a deletion request.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeletionRequestStatus {
    /// Waiting for an organizer.
    Pending,
    /// Approved; the spot is to be removed.
    Approved,
    /// Rejected; the spot stays.
    Rejected,
}

/// Errors from moderating a deletion request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModerationError {
    /// The moderator's role does not allow moderation.
    #[error("Role '{role}' may not moderate deletion requests")]
    NotPermitted {
        /// The moderator's role.
        role: MemberRole,
    },

    /// The moderator belongs to a different tenant than the event.
    #[error("Moderator belongs to tenant {moderator_tenant}, not {tenant}")]
    WrongTenant {
        /// Tenant owning the request.
        tenant: Uuid,
        /// Tenant of the moderator's membership.
        moderator_tenant: Uuid,
    },

    /// The request was already approved or rejected.
    #[error("Deletion request is already {status}")]
    AlreadyResolved {
        /// The current status.
        status: DeletionRequestStatus,
    },
}

/// A participant's request to remove their own spot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionRequest {
    /// Unique request ID.
    pub id: Uuid,
    /// Tenant owning the spot's event; only its members may moderate.
    pub tenant_id: Uuid,
    /// Spot to delete.
    pub spot_id: Uuid,
    /// Free-text reason given by the participant.
    pub reason: Option<String>,
    /// Moderation state.
    pub status: DeletionRequestStatus,
    /// When the request was filed.
    pub created_at: DateTime<Utc>,
    /// When an organizer approved or rejected it.
    pub resolved_at: Option<DateTime<Utc>>,
    /// Organizer who resolved it.
    pub resolved_by: Option<Uuid>,
}

impl DeletionRequest {
    /// Creates a pending request for `spot_id` in an event of `tenant_id`.
    #[must_use]
    pub fn new(
        tenant_id: Uuid,
        spot_id: Uuid,
        reason: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            spot_id,
            reason,
            status: DeletionRequestStatus::Pending,
            created_at,
            resolved_at: None,
            resolved_by: None,
        }
    }

    /// Approves the request.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::WrongTenant`] if the moderator belongs to
    /// another tenant, [`ModerationError::NotPermitted`] if the moderator's
    /// role cannot moderate, or [`ModerationError::AlreadyResolved`] if the
    /// request is no longer pending.
    pub fn approve(
        &mut self,
        moderator: &Membership,
        at: DateTime<Utc>,
    ) -> Result<(), ModerationError> {
        self.resolve(DeletionRequestStatus::Approved, moderator, at)
    }

    /// Rejects the request.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::WrongTenant`] if the moderator belongs to
    /// another tenant, [`ModerationError::NotPermitted`] if the moderator's
    /// role cannot moderate, or [`ModerationError::AlreadyResolved`] if the
    /// request is no longer pending.
    pub fn reject(
        &mut self,
        moderator: &Membership,
        at: DateTime<Utc>,
    ) -> Result<(), ModerationError> {
        self.resolve(DeletionRequestStatus::Rejected, moderator, at)
    }

    /// Whether the request still awaits a decision.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == DeletionRequestStatus::Pending
    }

    fn resolve(
        &mut self,
        status: DeletionRequestStatus,
        moderator: &Membership,
        at: DateTime<Utc>,
    ) -> Result<(), ModerationError> {
        if moderator.tenant_id != self.tenant_id {
            return Err(ModerationError::WrongTenant {
                tenant: self.tenant_id,
                moderator_tenant: moderator.tenant_id,
            });
        }
        if !moderator.role.can_moderate() {
            return Err(ModerationError::NotPermitted {
                role: moderator.role,
            });
        }
        if !self.is_pending() {
            return Err(ModerationError::AlreadyResolved {
                status: self.status,
            });
        }

        self.status = status;
        self.resolved_at = Some(at);
        self.resolved_by = Some(moderator.user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TENANT: Uuid = Uuid::from_u128(0x5eed);

    fn membership(role: MemberRole) -> Membership {
        Membership {
            tenant_id: TENANT,
            user_id: Uuid::new_v4(),
            role,
        }
    }

    fn pending_request(reason: Option<String>, at: DateTime<Utc>) -> DeletionRequest {
        DeletionRequest::new(TENANT, Uuid::new_v4(), reason, at)
    }

    fn event() -> Event {
        Event {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            title: "Hofflohmarkt Südstadt".to_string(),
            slug: "hofflohmarkt-suedstadt".to_string(),
            starts_on: NaiveDate::from_ymd_opt(2025, 5, 17),
            map_center: Coordinate::new(49.4521, 11.0767),
            boundary_radius_meters: Some(2_000.0),
            spot_singular: None,
            spot_plural: None,
        }
    }

    #[test]
    fn roles_that_moderate() {
        assert!(MemberRole::Owner.can_moderate());
        assert!(MemberRole::Admin.can_moderate());
        assert!(!MemberRole::Member.can_moderate());
        assert!(MemberRole::Owner.can_manage_members());
        assert!(!MemberRole::Admin.can_manage_members());
    }

    #[test]
    fn role_string_forms() {
        assert_eq!(MemberRole::Admin.to_string(), "admin");
        assert_eq!("owner".parse::<MemberRole>().unwrap(), MemberRole::Owner);
        assert!("superuser".parse::<MemberRole>().is_err());
    }

    #[test]
    fn new_request_is_pending() {
        let request = pending_request(None, Utc::now());
        assert!(request.is_pending());
        assert!(request.resolved_at.is_none());
    }

    #[test]
    fn admin_approves_request() {
        let admin = membership(MemberRole::Admin);
        let now = Utc::now();
        let mut request = pending_request(Some("Umzug".into()), now);

        request.approve(&admin, now).unwrap();

        assert_eq!(request.status, DeletionRequestStatus::Approved);
        assert_eq!(request.resolved_by, Some(admin.user_id));
        assert_eq!(request.resolved_at, Some(now));
    }

    #[test]
    fn member_may_not_moderate() {
        let mut request = pending_request(None, Utc::now());
        let err = request
            .reject(&membership(MemberRole::Member), Utc::now())
            .unwrap_err();

        assert_eq!(
            err,
            ModerationError::NotPermitted {
                role: MemberRole::Member
            }
        );
        assert!(request.is_pending());
    }

    #[test]
    fn admin_of_other_tenant_may_not_moderate() {
        let other = Membership {
            tenant_id: Uuid::new_v4(),
            ..membership(MemberRole::Admin)
        };
        let mut request = pending_request(None, Utc::now());

        let err = request.approve(&other, Utc::now()).unwrap_err();

        assert_eq!(
            err,
            ModerationError::WrongTenant {
                tenant: TENANT,
                moderator_tenant: other.tenant_id,
            }
        );
        assert!(request.is_pending());
        assert!(request.resolved_by.is_none());
    }

    #[test]
    fn resolved_request_cannot_change() {
        let owner = membership(MemberRole::Owner);
        let mut request = pending_request(None, Utc::now());
        request.reject(&owner, Utc::now()).unwrap();

        let err = request.approve(&owner, Utc::now()).unwrap_err();
        assert_eq!(
            err,
            ModerationError::AlreadyResolved {
                status: DeletionRequestStatus::Rejected
            }
        );
        assert_eq!(err.to_string(), "Deletion request is already rejected");
    }

    #[test]
    fn event_terms_use_override() {
        let mut event = event();
        assert_eq!(event.terms().all_spots, "Alle Spots");

        event.spot_singular = Some("Stand".into());
        event.spot_plural = Some("Stände".into());
        assert_eq!(event.terms().all_spots, "Alle Stände");
    }

    #[test]
    fn event_boundary_uses_center_and_radius() {
        let event = event();
        let boundary = event.boundary();
        assert_eq!(boundary.center, event.map_center);
        assert_eq!(boundary.radius_meters, Some(2_000.0));
        assert!(boundary.contains(&Coordinate::new(49.4530, 11.0780)));
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_value(DeletionRequestStatus::Pending).unwrap();
        assert_eq!(json, "pending");
    }
}
