//! Compile-time table of recommended spot names per event type.
//!
//! The table lives in `presets/terminology.toml` and is embedded at
//! compile time; [`all_presets`] parses it.

use serde::{Deserialize, Serialize};

use crate::SpotTerms;

/// A recommended singular/plural pair for one kind of event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminologyPreset {
    /// Unique identifier (e.g. `"stand"`).
    pub id: String,
    /// Kind of event this pair suits (e.g. `"Markt"`).
    pub event_type: String,
    /// Singular noun.
    pub singular: String,
    /// Plural noun.
    pub plural: String,
}

impl TerminologyPreset {
    /// The phrase set for this preset.
    #[must_use]
    pub fn terms(&self) -> SpotTerms {
        SpotTerms::new(&self.singular, &self.plural)
    }
}

#[derive(Deserialize)]
struct PresetFile {
    presets: Vec<TerminologyPreset>,
}

const PRESETS_TOML: &str = include_str!("../presets/terminology.toml");

#[cfg(test)]
const EXPECTED_PRESET_COUNT: usize = 7;

/// Returns all terminology presets in display order.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (the file is compiled in, so
/// this is caught by the tests below).
#[must_use]
pub fn all_presets() -> Vec<TerminologyPreset> {
    toml::de::from_str::<PresetFile>(PRESETS_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse terminology presets: {e}"))
        .presets
}

/// Looks up a preset by id.
#[must_use]
pub fn find_preset(id: &str) -> Option<TerminologyPreset> {
    all_presets().into_iter().find(|p| p.id == id)
}
