//! Field and value mapping between osgameclones and the catalogue.

/// osgameclones field -> catalogue field(s) it is compared against.
pub static FIELD_MAPPING: &[(&str, &[&str])] = &[
    ("name", &["Title"]),
    ("type", &["Keywords"]),
    ("originals", &["Keywords"]),
    ("repo", &["Code repository"]),
    ("url", &["Home"]),
    ("development", &["State"]),
    ("status", &["State"]),
    ("multiplayer", &["Keywords"]),
    ("lang", &["Code language"]),
    ("framework", &["Code dependencies"]),
    ("license", &["Code license", "Assets license"]),
    ("content", &["Keywords"]),
];

/// osgameclones license identifiers that differ from ours.
pub static LICENSE_MAP: &[(&str, &str)] = &[
    ("GPL2", "GPL-2.0"),
    ("GPL3", "GPL-3.0"),
    ("AGPL3", "AGPL-3.0"),
    ("LGPL3", "LGPL-3.0"),
    ("LGPL2", "LGPL-2.1"),
    ("MPL", "MPL-2.0"),
];

/// osgameclones names that differ from ours (external -> ours).
pub static NAME_ALIASES: &[(&str, &str)] = &[];

/// Fields whose distinct values are listed in the report.
pub static ENUM_FIELDS: &[&str] = &[
    "development",
    "multiplayer",
    "type",
    "lang",
    "license",
    "status",
    "framework",
    "content",
];

pub fn map_license(license: &str) -> &str {
    LICENSE_MAP
        .iter()
        .find(|(external, _)| *external == license)
        .map_or(license, |(_, ours)| *ours)
}

/// Catalogue fields an osgameclones field maps to.
pub fn mapped_fields(field: &str) -> Option<&'static [&'static str]> {
    FIELD_MAPPING
        .iter()
        .find(|(external, _)| *external == field)
        .map(|(_, ours)| *ours)
}
