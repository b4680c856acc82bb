//! Boundary radius choices offered to organizers.

use serde::Serialize;

/// A selectable boundary radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusPreset {
    /// Radius in meters.
    pub meters: u32,
    /// Display label (e.g. `"2 km"`).
    pub label: &'static str,
}

impl RadiusPreset {
    /// Radius in meters as used by [`crate::Boundary`].
    #[must_use]
    pub fn radius_meters(&self) -> f64 {
        f64::from(self.meters)
    }
}

/// Radius presets in ascending order.
pub const RADIUS_PRESETS: &[RadiusPreset] = &[
    RadiusPreset {
        meters: 500,
        label: "500 m",
    },
    RadiusPreset {
        meters: 1_000,
        label: "1 km",
    },
    RadiusPreset {
        meters: 2_000,
        label: "2 km",
    },
    RadiusPreset {
        meters: 5_000,
        label: "5 km",
    },
    RadiusPreset {
        meters: 10_000,
        label: "10 km",
    },
];
