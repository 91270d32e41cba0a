//! Slug derivation
//!
//! Turns a free-text project name into a URL-safe identifier used for the
//! repository path and the deploy subdomain.

/// Derive a slug from a project name.
///
/// Lower-cases the input, drops everything outside `[a-z0-9]`, whitespace and
/// `-`, then folds every run of whitespace and/or hyphens into a single `-`.
/// Leading and trailing hyphens are stripped. Total and idempotent.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch == '-' || ch.is_whitespace() {
            pending_separator = true;
        }
    }

    slug
}

/// Whether a slug meets the minimum length for generation.
pub fn is_valid_slug(slug: &str, min_len: usize) -> bool {
    slug.len() >= min_len
}
