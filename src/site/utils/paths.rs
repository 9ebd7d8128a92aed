//! Relative links between site locations.

use super::shortcut::is_absolute_url;

/// Compute the link from a page in directory `current` to site path `target`.
///
/// Absolute URLs are returned unchanged. Otherwise the shared leading
/// segments are dropped (the target always keeps its last segment) and one
/// `..` is prepended per remaining segment of `current`. An empty `current`
/// is the site root.
///
/// # Examples
/// ```
/// use osgl_site_index::site::utils::relative_url;
///
/// assert_eq!(relative_url("games", "developers/index.html"), "../developers/index.html");
/// assert_eq!(relative_url("", "games/index.html"), "games/index.html");
/// assert_eq!(relative_url("a/b", "a/b/c.html"), "c.html");
/// ```
pub fn relative_url(current: &str, target: &str) -> String {
    if is_absolute_url(target) {
        return target.to_string();
    }

    let current_segments: Vec<&str> = if current.is_empty() {
        Vec::new()
    } else {
        current.split('/').collect()
    };
    let target_segments: Vec<&str> = target.split('/').collect();

    let mut current = current_segments.as_slice();
    let mut target = target_segments.as_slice();
    while !current.is_empty() && target.len() > 1 && current[0] == target[0] {
        current = &current[1..];
        target = &target[1..];
    }

    let mut segments = vec![".."; current.len()];
    segments.extend_from_slice(target);
    segments.join("/")
}
