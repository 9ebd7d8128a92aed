//! Short display labels for URLs.
//!
//! Well-known hosting services get an abbreviation, everything else served
//! over http(s) loses its scheme. The original URL stays the href.

/// Known URL prefixes and their abbreviations, checked in order.
static SHORTCUTS: &[(&str, &str)] = &[
    ("https://gitlab.com/", "GL"),
    ("https://github.com/", "GH"),
    ("https://sourceforge.net/projects/", "SF"),
    ("https://web.archive.org/web/", "Archive"),
    ("https://en.wikipedia.org/wiki/", "WP"),
];

/// URL schemes treated as absolute.
pub static URL_SCHEMES: &[&str] = &["http://", "https://"];

/// Shorten a URL to a display label.
///
/// # Examples
/// ```
/// use osgl_site_index::site::utils::shortcut_url;
///
/// assert_eq!(shortcut_url("https://github.com/OpenTTD/OpenTTD"), "GH: OpenTTD/OpenTTD");
/// assert_eq!(shortcut_url("http://www.openttd.org/"), "www.openttd.org/");
/// assert_eq!(shortcut_url("ftp://example.org"), "ftp://example.org");
/// ```
pub fn shortcut_url(url: &str) -> String {
    for (prefix, abbreviation) in SHORTCUTS {
        if let Some(rest) = url.strip_prefix(prefix) {
            return format!("{}: {}", abbreviation, rest);
        }
    }

    strip_scheme(url).to_string()
}

/// Remove a leading `http://` or `https://`.
pub fn strip_scheme(url: &str) -> &str {
    URL_SCHEMES
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
        .unwrap_or(url)
}

pub fn is_absolute_url(url: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosting_services() {
        assert_eq!(shortcut_url("https://gitlab.com/veloren/veloren"), "GL: veloren/veloren");
        assert_eq!(shortcut_url("https://sourceforge.net/projects/freeciv/"), "SF: freeciv/");
        assert_eq!(
            shortcut_url("https://web.archive.org/web/2010/http://example.org"),
            "Archive: 2010/http://example.org"
        );
        assert_eq!(shortcut_url("https://en.wikipedia.org/wiki/Doom"), "WP: Doom");
    }

    #[test]
    fn test_only_https_prefixes_abbreviated() {
        // http:// GitHub links are not abbreviated, just stripped
        assert_eq!(shortcut_url("http://github.com/a/b"), "github.com/a/b");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(shortcut_url("not a url"), "not a url");
        assert_eq!(shortcut_url(""), "");
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.org"));
        assert!(is_absolute_url("http://example.org"));
        assert!(!is_absolute_url("games/index.html"));
    }
}
