//! Slug derivation for ads and locations.

/// Maximum length of a generated slug.
pub const MAX_SLUG_LEN: usize = 64;

/// Turns a human title into a lowercase, dash-separated slug.
///
/// Non-alphanumeric runs collapse into a single dash. Returns `None` when
/// nothing usable is left.
pub fn slugify(input: &str) -> Option<String> {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }

        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }

    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() { None } else { Some(slug) }
}

/// Checks that a caller-supplied slug is already in canonical form.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
