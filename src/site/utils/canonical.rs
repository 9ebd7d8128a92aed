//! Canonical slug derivation for entity names.
//!
//! The same name always yields the same slug, which makes anchors stable
//! between generation runs.

/// Derive a canonical slug from a name.
///
/// 1. Drop every character outside `A-Z a-z 0-9 space - +`
/// 2. Collapse each run of spaces into one underscore
/// 3. Replace `_-_` with `-`
/// 4. Lowercase
pub fn canonical_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space_run = false;

    for c in name.chars() {
        if c == ' ' {
            if !in_space_run {
                slug.push('_');
                in_space_run = true;
            }
            continue;
        }
        if c.is_ascii_alphanumeric() || c == '-' || c == '+' {
            slug.push(c);
            in_space_run = false;
        }
    }

    slug.replace("_-_", "-").to_lowercase()
}
