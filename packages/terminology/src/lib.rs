#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spot terminology.
//!
//! Organizers can rename the generic "Spot" per event (a market calls them
//! "Stand"/"Stände", a rally "Station"/"Stationen"). Every label in the
//! registration, list, map, admin, and contact views is derived here from
//! the singular and plural nouns, so the UI never hardcodes the word.

pub mod presets;

use serde::{Deserialize, Serialize};

pub use presets::{TerminologyPreset, all_presets, find_preset};

/// Default singular noun.
pub const DEFAULT_SINGULAR: &str = "Spot";

/// Default plural noun.
pub const DEFAULT_PLURAL: &str = "Spots";

/// Display strings derived from a singular/plural pair.
///
/// Every field is a pure function of the two nouns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotTerms {
    /// Singular noun (e.g. `"Stand"`).
    pub singular: String,
    /// Plural noun (e.g. `"Stände"`).
    pub plural: String,

    // Lists and overviews
    /// `"Alle {plural}"`
    pub all_spots: String,
    /// `"Noch keine {plural} vorhanden"`
    pub no_spots: String,
    /// `"Anzahl {plural}"`
    pub spot_count: String,

    // Registration
    /// `"{singular} anmelden"`
    pub register_spot: String,
    /// `"{singular} hinzufügen"`
    pub add_spot: String,
    /// `"{singular} speichern"`
    pub save_spot: String,

    // Deletion
    /// `"{singular} löschen"`
    pub delete_spot: String,
    /// `"Löschung für {singular} beantragen"`
    pub request_deletion: String,
    /// `"Löschanfragen für {plural}"`
    pub deletion_requests: String,

    // Map
    /// `"{plural} auf der Karte"`
    pub spots_on_map: String,
    /// `"{singular} liegt außerhalb des erlaubten Bereichs"`
    pub outside_boundary: String,

    // Admin
    /// `"{plural} verwalten"`
    pub manage_spots: String,
    /// `"{plural}-Übersicht"`
    pub spot_overview: String,

    // Contact form
    /// `"Frage zu {singular}"`
    pub contact_about_spot: String,
}

impl SpotTerms {
    /// Builds the phrase set for the given nouns.
    #[must_use]
    pub fn new(singular: &str, plural: &str) -> Self {
        Self {
            singular: singular.to_string(),
            plural: plural.to_string(),
            all_spots: format!("Alle {plural}"),
            no_spots: format!("Noch keine {plural} vorhanden"),
            spot_count: format!("Anzahl {plural}"),
            register_spot: format!("{singular} anmelden"),
            add_spot: format!("{singular} hinzufügen"),
            save_spot: format!("{singular} speichern"),
            delete_spot: format!("{singular} löschen"),
            request_deletion: format!("Löschung für {singular} beantragen"),
            deletion_requests: format!("Löschanfragen für {plural}"),
            spots_on_map: format!("{plural} auf der Karte"),
            outside_boundary: format!("{singular} liegt außerhalb des erlaubten Bereichs"),
            manage_spots: format!("{plural} verwalten"),
            spot_overview: format!("{plural}-Übersicht"),
            contact_about_spot: format!("Frage zu {singular}"),
        }
    }
}

impl Default for SpotTerms {
    fn default() -> Self {
        Self::new(DEFAULT_SINGULAR, DEFAULT_PLURAL)
    }
}

/// Resolves the phrase set for an optional terminology override.
///
/// Overrides are trimmed. A missing or blank noun falls back to `"Spot"` /
/// `"Spots"`. Each noun falls back independently.
#[must_use]
pub fn get_spot_terms(singular: Option<&str>, plural: Option<&str>) -> SpotTerms {
    SpotTerms::new(
        non_blank(singular).unwrap_or(DEFAULT_SINGULAR),
        non_blank(plural).unwrap_or(DEFAULT_PLURAL),
    )
}

fn non_blank(noun: Option<&str>) -> Option<&str> {
    noun.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_spot() {
        let terms = get_spot_terms(None, None);
        assert_eq!(terms.singular, "Spot");
        assert_eq!(terms.all_spots, "Alle Spots");
        assert_eq!(terms, SpotTerms::default());
    }

    #[test]
    fn substitutes_custom_nouns() {
        let terms = get_spot_terms(Some("Stand"), Some("Stände"));
        assert_eq!(terms.all_spots, "Alle Stände");
        assert_eq!(terms.register_spot, "Stand anmelden");
        assert_eq!(terms.deletion_requests, "Löschanfragen für Stände");
        assert_eq!(terms.spot_overview, "Stände-Übersicht");
        assert_eq!(terms.contact_about_spot, "Frage zu Stand");
    }

    #[test]
    fn blank_override_falls_back() {
        let terms = get_spot_terms(Some("  "), Some(""));
        assert_eq!(terms, SpotTerms::default());
    }

    #[test]
    fn nouns_fall_back_independently() {
        let terms = get_spot_terms(Some("Bühne"), None);
        assert_eq!(terms.delete_spot, "Bühne löschen");
        assert_eq!(terms.manage_spots, "Spots verwalten");
    }

    #[test]
    fn trims_override() {
        let terms = get_spot_terms(Some(" Station "), Some(" Stationen"));
        assert_eq!(terms.spots_on_map, "Stationen auf der Karte");
        assert_eq!(terms.singular, "Station");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(SpotTerms::default()).unwrap();
        assert_eq!(json["allSpots"], "Alle Spots");
        assert_eq!(json["outsideBoundary"], "Spot liegt außerhalb des erlaubten Bereichs");
        assert_eq!(json.as_object().unwrap().len(), 16);
    }
}
