//! Classification Schemes
//!
//! Category lists and lookup tables the generator buckets and links by.
//! Passed explicitly into the generator; there is no global state.
//!
//! Built-in defaults mirror the catalogue's constants. A JSON file can
//! override any subset of keys.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Classification schemes and link tables for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Title shown on every page.
    pub site_title: String,
    /// Platform index categories, in display order.
    pub valid_platforms: Vec<String>,
    /// Code language index categories, in display order.
    pub known_languages: Vec<String>,
    /// Lowercase keywords that make up the genre index.
    pub recommended_keywords: Vec<String>,
    /// License identifier -> canonical license URL.
    pub license_urls: BTreeMap<String, String>,
    /// Fields whose values are URLs and get a shortcut label.
    pub url_fields: Vec<String>,
}

impl ClassificationConfig {
    /// Load configuration from a JSON file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read classification config: {:?}", path))?;

        let config: ClassificationConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse classification config: {:?}", path))?;

        if config.valid_platforms.is_empty() {
            anyhow::bail!("Classification config {:?} lists no valid platforms", path);
        }

        Ok(config)
    }

    pub fn is_url_field(&self, field: &str) -> bool {
        self.url_fields.iter().any(|f| f == field)
    }

    pub fn license_url(&self, license: &str) -> Option<&str> {
        self.license_urls.get(license).map(String::as_str)
    }

    /// Genre categories: recommended keywords with the first letter uppercased.
    pub fn genres(&self) -> Vec<String> {
        self.recommended_keywords.iter().map(|k| capitalize(k)).collect()
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            site_title: "OSGL".to_string(),
            valid_platforms: to_strings(VALID_PLATFORMS),
            known_languages: to_strings(KNOWN_LANGUAGES),
            recommended_keywords: to_strings(RECOMMENDED_KEYWORDS),
            license_urls: LICENSE_URLS
                .iter()
                .map(|(license, url)| (license.to_string(), url.to_string()))
                .collect(),
            url_fields: to_strings(URL_FIELDS),
        }
    }
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ============================================================================
// BUILT-IN TABLES
// ============================================================================

static VALID_PLATFORMS: &[&str] = &["Windows", "Linux", "macOS", "Android", "iOS", "Web"];

static KNOWN_LANGUAGES: &[&str] = &[
    "AGS Script", "ActionScript", "Ada", "AngelScript", "Assembly", "Basic", "Blitz3D", "BlitzMax",
    "C", "C#", "C++", "Clojure", "CoffeeScript", "ColdFusion", "D", "DM", "Dart", "Dia", "Elm",
    "Emacs Lisp", "F#", "GDScript", "Go", "Groovy", "Haskell", "Haxe", "Io", "Java", "JavaScript",
    "Kotlin", "Lisp", "Lua", "MegaGlest Script", "MoonScript", "None", "OCaml", "Objective-C",
    "PHP", "Pascal", "Perl", "Python", "QuakeC", "R", "Ren'Py", "Ruby", "Rust", "Scala", "Scheme",
    "Shell", "Swift", "TorqueScript", "TypeScript", "Vala", "Visual Basic", "XUL", "ZenScript", "ooc",
];

static RECOMMENDED_KEYWORDS: &[&str] = &[
    "action", "arcade", "adventure", "visual novel", "sports", "platform", "puzzle", "role playing",
    "simulation", "strategy", "cards", "board", "music", "educational", "tool", "game engine",
    "framework", "library", "remake",
];

static LICENSE_URLS: &[(&str, &str)] = &[
    ("GPL-2.0", "https://www.gnu.org/licenses/old-licenses/gpl-2.0.html"),
    ("GPL-3.0", "https://www.gnu.org/licenses/gpl-3.0.html"),
    ("AGPL-3.0", "https://www.gnu.org/licenses/agpl-3.0.html"),
    ("LGPL-2.1", "https://www.gnu.org/licenses/old-licenses/lgpl-2.1.html"),
    ("LGPL-3.0", "https://www.gnu.org/licenses/lgpl-3.0.html"),
    ("MIT", "https://opensource.org/licenses/MIT"),
    ("Apache-2.0", "https://www.apache.org/licenses/LICENSE-2.0"),
    ("MPL-2.0", "https://www.mozilla.org/en-US/MPL/2.0/"),
    ("BSD-2-Clause", "https://opensource.org/licenses/BSD-2-Clause"),
    ("BSD-3-Clause", "https://opensource.org/licenses/BSD-3-Clause"),
    ("Zlib", "https://opensource.org/licenses/Zlib"),
    ("CC0", "https://creativecommons.org/publicdomain/zero/1.0/"),
    ("CC-BY-SA-4.0", "https://creativecommons.org/licenses/by-sa/4.0/"),
];

static URL_FIELDS: &[&str] = &["Home", "Media", "Play", "Download", "Code repository"];
