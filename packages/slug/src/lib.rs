#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! URL slugs for tenants and events.
//!
//! Slugs appear in public links (`/verein-am-markt/flohmarkt-2025`), so they
//! are lowercase ASCII with single hyphens between words. German umlauts are
//! transliterated instead of dropped, so `"Südstadt"` becomes `"suedstadt"`
//! rather than `"s-dstadt"`.
//!
//! Collisions between equal slugs and empty slugs are left to the caller
//! that stores them.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for runs of characters that may not appear in a slug.
static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Lowercase German characters and their ASCII transliterations.
const TRANSLITERATIONS: &[(char, &str)] = &[('ä', "ae"), ('ö', "oe"), ('ü', "ue"), ('ß', "ss")];

/// Generates a URL-safe slug from a display name.
///
/// 1. Lowercase
/// 2. Transliterate `ä`, `ö`, `ü`, `ß`
/// 3. Replace every run of characters outside `[a-z0-9]` with one hyphen
/// 4. Trim leading and trailing hyphens
///
/// Empty or all-punctuation input yields an empty string.
///
/// Examples:
/// - `"Müller & Söhne GmbH"` -> `"mueller-soehne-gmbh"`
/// - `"Flohmarkt 2025!"` -> `"flohmarkt-2025"`
#[must_use]
pub fn generate_slug(name: &str) -> String {
    let lower = name.to_lowercase();

    let mut transliterated = String::with_capacity(lower.len());
    for c in lower.chars() {
        match TRANSLITERATIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => transliterated.push_str(to),
            None => transliterated.push(c),
        }
    }

    NON_SLUG_RE
        .replace_all(&transliterated, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name() {
        assert_eq!(generate_slug("Flohmarkt"), "flohmarkt");
    }

    #[test]
    fn transliterates_umlauts() {
        assert_eq!(generate_slug("Müller & Söhne GmbH"), "mueller-soehne-gmbh");
        assert_eq!(generate_slug("Große Straße"), "grosse-strasse");
    }

    #[test]
    fn transliterates_uppercase_umlauts() {
        assert_eq!(generate_slug("ÄRGER ÜBER ÖL"), "aerger-ueber-oel");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(generate_slug("Hof--Flohmarkt   2025 !!"), "hof-flohmarkt-2025");
    }

    #[test]
    fn trims_edge_hyphens() {
        assert_eq!(generate_slug("  -- Südstadt --  "), "suedstadt");
    }

    #[test]
    fn other_accents_become_separators() {
        assert_eq!(generate_slug("Café Noir"), "caf-noir");
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("&&& ???"), "");
    }

    #[test]
    fn slug_is_idempotent() {
        for name in [
            "Müller & Söhne GmbH",
            "Flohmarkt 2025!",
            "  -- Südstadt --  ",
            "a-b-c",
            "",
        ] {
            let once = generate_slug(name);
            assert_eq!(generate_slug(&once), once, "input: {name:?}");
        }
    }
}
