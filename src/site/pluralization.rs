//! Display names of entity fields with singular/plural selection.
//!
//! The table is closed: a field without an entry is a configuration gap and
//! fails the run.

use crate::error::{CatalogueError, Result};

/// Every field that can be shown as a named group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    AssetsLicense,
    Contact,
    CodeLanguage,
    CodeLicense,
    CodeRepository,
    CodeDependency,
    Developer,
    Download,
    Inspiration,
    Game,
    Home,
    Keywords,
    Media,
    Organization,
    Platform,
    Play,
}

impl DisplayField {
    /// Look up a field by its catalogue name.
    ///
    /// `Inspirations` and `Code dependencies` are the plural spellings the
    /// dataset uses for these fields; they are folded onto their singular
    /// display names before the lookup.
    pub fn from_raw(name: &str) -> Result<Self> {
        let field = match name {
            "Assets license" => DisplayField::AssetsLicense,
            "Contact" => DisplayField::Contact,
            "Code language" => DisplayField::CodeLanguage,
            "Code license" => DisplayField::CodeLicense,
            "Code repository" => DisplayField::CodeRepository,
            "Code dependency" | "Code dependencies" => DisplayField::CodeDependency,
            "Developer" => DisplayField::Developer,
            "Download" => DisplayField::Download,
            "Inspiration" | "Inspirations" => DisplayField::Inspiration,
            "Game" => DisplayField::Game,
            "Home" => DisplayField::Home,
            "Keywords" => DisplayField::Keywords,
            "Media" => DisplayField::Media,
            "Organization" => DisplayField::Organization,
            "Platform" => DisplayField::Platform,
            "Play" => DisplayField::Play,
            _ => return Err(CatalogueError::UnknownField(name.to_string())),
        };
        Ok(field)
    }

    pub fn singular(&self) -> &'static str {
        match self {
            DisplayField::AssetsLicense => "Assets license",
            DisplayField::Contact => "Contact",
            DisplayField::CodeLanguage => "Code language",
            DisplayField::CodeLicense => "Code license",
            DisplayField::CodeRepository => "Code repository",
            DisplayField::CodeDependency => "Code dependency",
            DisplayField::Developer => "Developer",
            DisplayField::Download => "Download",
            DisplayField::Inspiration => "Inspiration",
            DisplayField::Game => "Game",
            DisplayField::Home => "Home",
            DisplayField::Keywords => "Keywords",
            DisplayField::Media => "Media",
            DisplayField::Organization => "Organization",
            DisplayField::Platform => "Platform",
            DisplayField::Play => "Play",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            DisplayField::AssetsLicense => "Assets licenses",
            DisplayField::Contact => "Contacts",
            DisplayField::CodeLanguage => "Code languages",
            DisplayField::CodeLicense => "Code licenses",
            DisplayField::CodeRepository => "Code repositories",
            DisplayField::CodeDependency => "Code dependencies",
            DisplayField::Developer => "Developers",
            DisplayField::Download => "Downloads",
            DisplayField::Inspiration => "Inspirations",
            DisplayField::Game => "Games",
            DisplayField::Home => "Homes",
            // invariant
            DisplayField::Keywords => "Keywords",
            DisplayField::Media => "Media",
            DisplayField::Play => "Play",
            DisplayField::Organization => "Organizations",
            DisplayField::Platform => "Platforms",
        }
    }

    /// Singular for exactly one entry, plural otherwise (including zero).
    pub fn display_name(&self, amount: usize) -> &'static str {
        if amount == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

/// Display name of a catalogue field for `amount` entries.
pub fn plural_or_singular(name: &str, amount: usize) -> Result<&'static str> {
    DisplayField::from_raw(name).map(|field| field.display_name(amount))
}
