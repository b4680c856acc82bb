//! Slug claiming for new tenants and events.

use quartier_spots_slug::generate_slug;

use crate::RegistrationError;

/// Generates a slug for `name` that `is_taken` reports as free.
///
/// On collision, `-2`, `-3`, … is appended until a free slug is found.
///
/// # Errors
///
/// Returns [`RegistrationError::EmptySlug`] if `name` contains no
/// characters usable in a slug.
pub fn claim_slug(name: &str, is_taken: impl Fn(&str) -> bool) -> Result<String, RegistrationError> {
    let base = generate_slug(name);
    if base.is_empty() {
        return Err(RegistrationError::EmptySlug {
            name: name.to_string(),
        });
    }

    if !is_taken(&base) {
        return Ok(base);
    }

    let slug = (2_u32..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or(base);

    log::debug!("Slug for '{name}' collided, using '{slug}'");
    Ok(slug)
}
