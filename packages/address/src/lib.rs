#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Address normalization for spot registration.
//!
//! Participants type their addresses in many shapes:
//! - Abbreviated street suffixes: `"hauptstr."`, `"Hauptstr"`
//! - Swiss/ASCII spelling: `"Blumenstrasse"`
//! - Inconsistent casing: `"NÜRNBERG"`, `"nürnberg"`
//! - Short or decorated postal codes: `"931"`, `"D-93051"`
//! - Spaced house number suffixes: `"42 a"`
//!
//! Every fragment is normalized independently into a canonical form. The
//! result is both the geocoding query and the stored key for the
//! exact-match lookup in the spot deletion flow, so every normalizer here
//! is deterministic and idempotent. Nothing is validated: an address that
//! does not exist still normalizes, and the geocoder decides.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Canonical German street suffix.
const STRASSE: &str = "straße";

/// Regex for the ASCII spelling `"strasse"` anywhere in a street name.
static STRASSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)strasse").expect("valid regex"));

/// Regex for an abbreviated `"str"` / `"str."` at the end of the input.
static TRAILING_STR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)str\.?$").expect("valid regex"));

/// Regex for a single letter suffix after the house number digits, with or
/// without whitespace in between. Matches: `"42a"`, `"42 a"`, `"7 B"`.
static HOUSE_NUMBER_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)\s*([A-Za-z])$").expect("valid regex"));

/// A postal address after normalization.
///
/// Absent fragments stay absent; present fragments hold their canonical
/// form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAddress {
    /// Street name (e.g. `"Hauptstraße"`).
    pub street: Option<String>,
    /// House number including any letter suffix (e.g. `"42A"`).
    pub house_number: Option<String>,
    /// Five-digit postal code (e.g. `"93051"`).
    pub zip: Option<String>,
    /// City name (e.g. `"Nürnberg"`).
    pub city: Option<String>,
}

impl NormalizedAddress {
    /// Formats the address on one line as `"{street} {house_number}, {zip}
    /// {city}"`.
    ///
    /// Absent or empty fragments are skipped along with their separators,
    /// so `"Hauptstraße, Nürnberg"` is produced when house number and zip
    /// are missing.
    #[must_use]
    pub fn one_line(&self) -> String {
        let street_line = join_present(
            &[self.street.as_deref(), self.house_number.as_deref()],
            " ",
        );
        let locality = join_present(&[self.zip.as_deref(), self.city.as_deref()], " ");

        join_present(&[Some(street_line.as_str()), Some(locality.as_str())], ", ")
    }

    /// Returns `true` when both street and city are present and non-empty,
    /// the minimum needed for geocoding.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !is_absent(self.street.as_deref()) && !is_absent(self.city.as_deref())
    }
}

impl std::fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.one_line())
    }
}

fn is_absent(part: Option<&str>) -> bool {
    part.is_none_or(str::is_empty)
}

fn join_present(parts: &[Option<&str>], separator: &str) -> String {
    parts
        .iter()
        .filter_map(|p| p.filter(|s| !s.is_empty()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Runs `normalize` unless `input` is empty, in which case the input is
/// returned unchanged.
fn unless_empty(input: &str, normalize: impl FnOnce(&str) -> String) -> String {
    if input.is_empty() {
        return String::new();
    }
    normalize(input)
}

/// Uppercases `c` when its uppercase form is a single character.
///
/// `'ß'` uppercases to `"SS"`, which would change the word on every pass,
/// so such characters are kept as they are.
fn upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Lowercases a word and uppercases its first character.
fn capitalize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return lower;
    };

    let mut out = String::with_capacity(lower.len());
    out.push(upper_single(first));
    out.extend(chars);
    out
}

/// Uppercases the first alphabetic character of `word`.
fn capitalize_first_letter(word: &str) -> String {
    let mut done = false;
    word.chars()
        .map(|c| {
            if !done && c.is_alphabetic() {
                done = true;
                upper_single(c)
            } else {
                c
            }
        })
        .collect()
}

fn capitalize_words(input: &str) -> Vec<String> {
    input.split_whitespace().map(capitalize_word).collect()
}

/// Normalizes a street name.
///
/// 1. Trim
/// 2. Rewrite `"strasse"` and a trailing `"str"` / `"str."` to `"straße"`
///    (case-insensitive)
/// 3. Capitalize each word, keeping an inner `"straße"` suffix lowercase
/// 4. Force the leading letter of a final `"…straße"` token to uppercase
///
/// Empty input is returned unchanged.
#[must_use]
pub fn normalize_street_name(street: &str) -> String {
    unless_empty(street, |street| {
        let trimmed = street.trim();
        let expanded = STRASSE_RE.replace_all(trimmed, STRASSE);
        let expanded = TRAILING_STR_RE.replace(&expanded, STRASSE);

        let mut words = capitalize_words(&expanded);

        if let Some(last) = words.last_mut()
            && last.ends_with(STRASSE)
        {
            *last = capitalize_first_letter(last);
        }

        words.join(" ")
    })
}

/// Normalizes a city name by trimming and capitalizing each
/// whitespace-separated word.
#[must_use]
pub fn normalize_city_name(city: &str) -> String {
    unless_empty(city, |city| capitalize_words(city.trim()).join(" "))
}

/// Normalizes a German postal code.
///
/// Strips every non-digit character. One to five remaining digits are
/// left-padded with zeros to five digits; anything else (no digits, or more
/// than five) is returned as stripped, without truncation.
#[must_use]
pub fn normalize_zip(zip: &str) -> String {
    unless_empty(zip, |zip| {
        let digits: String = zip.chars().filter(char::is_ascii_digit).collect();

        if (1..=5).contains(&digits.len()) {
            format!("{digits:0>5}")
        } else {
            digits
        }
    })
}

/// Normalizes a house number.
///
/// Trims, joins a letter suffix to its digits (`"42 a"` → `"42a"`), and
/// uppercases that single letter (`"42a"` → `"42A"`). Ranges and other
/// shapes (`"12-14"`, `"3/1"`) pass through trimmed.
#[must_use]
pub fn normalize_house_number(house_number: &str) -> String {
    unless_empty(house_number, |house_number| {
        HOUSE_NUMBER_SUFFIX_RE
            .replace(house_number.trim(), |caps: &Captures<'_>| {
                format!("{}{}", &caps[1], caps[2].to_uppercase())
            })
            .into_owned()
    })
}

/// Normalizes all four address fragments.
///
/// Absent fragments stay `None`.
#[must_use]
pub fn normalize_address(
    street: Option<&str>,
    house_number: Option<&str>,
    zip: Option<&str>,
    city: Option<&str>,
) -> NormalizedAddress {
    NormalizedAddress {
        street: street.map(normalize_street_name),
        house_number: house_number.map(normalize_house_number),
        zip: zip.map(normalize_zip),
        city: city.map(normalize_city_name),
    }
}
