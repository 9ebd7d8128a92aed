//! Field Projector - converts resolved entities to display field groups
//!
//! Each entity page shows an ordered list of named groups of links. The
//! order is fixed per entity type; absent or empty fields are skipped and
//! value comments are dropped.

use crate::config::ClassificationConfig;
use crate::error::Result;
use crate::site::pluralization::DisplayField;
use crate::site::references::{ResolvedDeveloper, ResolvedGame, ResolvedInspiration};
use crate::site::types::{values, FieldGroup, FieldValue, Game, LinkRecord};
use crate::site::utils::shortcut_url;

/// Game fields shown before the free-text note, by catalogue name.
static GAME_FIELDS: &[&str] = &["Home", "Inspirations", "Media", "Download", "Play", "Developer", "Keywords"];

/// Game fields shown below the "Technical info" separator.
static TECHNICAL_FIELDS: &[&str] = &[
    "Platform",
    "Code language",
    "Code license",
    "Code repository",
    "Code dependencies",
    "Assets license",
];

pub const TECHNICAL_INFO: &str = "Technical info";

/// Projects entities into field groups using one classification config.
pub struct FieldProjector<'c> {
    config: &'c ClassificationConfig,
}

impl<'c> FieldProjector<'c> {
    pub fn new(config: &'c ClassificationConfig) -> Self {
        Self { config }
    }

    /// Field groups of a game page.
    ///
    /// Home, Inspiration, Media, Download, Play, Developer, Keywords, the
    /// note, a "Technical info" separator, then Platform, Code language,
    /// Code license, Code repository, Code dependency, Assets license.
    pub fn game(&self, resolved: &ResolvedGame) -> Result<Vec<FieldGroup>> {
        let game = &resolved.record.entity;
        let mut fields = Vec::new();

        for raw in GAME_FIELDS {
            let field = DisplayField::from_raw(raw)?;
            let entries = match field {
                DisplayField::Inspiration => resolved.inspirations.clone(),
                DisplayField::Developer => resolved.developers.clone(),
                _ => self.entries(field, game_field(game, field)),
            };
            if let Some(group) = named_group(field, entries) {
                fields.push(group);
            }
        }

        if let Some(note) = game.note.as_deref().filter(|n| !n.is_empty()) {
            fields.push(FieldGroup::untitled(vec![LinkRecord::text(note)]));
        }

        fields.push(FieldGroup::heading(TECHNICAL_INFO));

        for raw in TECHNICAL_FIELDS {
            let field = DisplayField::from_raw(raw)?;
            let entries = self.entries(field, game_field(game, field));
            if let Some(group) = named_group(field, entries) {
                fields.push(group);
            }
        }

        Ok(fields)
    }

    /// Field groups of an inspiration: media, then the games it inspired.
    pub fn inspiration(&self, resolved: &ResolvedInspiration) -> Result<Vec<FieldGroup>> {
        let inspiration = &resolved.record.entity;
        let mut fields = Vec::new();

        let media: Vec<LinkRecord> = inspiration.media.iter().map(|url| url_link(url)).collect();
        if let Some(group) = named_group(DisplayField::Media, media) {
            fields.push(group);
        }

        let games = DisplayField::Game.display_name(resolved.games.len());
        fields.push(FieldGroup::named(
            format!("Inspired {}", games.to_lowercase()),
            resolved.games.clone(),
        ));

        Ok(fields)
    }

    /// Field groups of a developer: their games, then Home, Contact, Organization.
    pub fn developer(&self, resolved: &ResolvedDeveloper) -> Result<Vec<FieldGroup>> {
        let developer = &resolved.record.entity;
        let mut fields = Vec::new();

        let games = DisplayField::Game.display_name(resolved.games.len());
        fields.push(FieldGroup::named(format!("Open source {}", games), resolved.games.clone()));

        let optional = [
            ("Home", &developer.home),
            ("Contact", &developer.contact),
            ("Organization", &developer.organization),
        ];
        for (raw, entries) in optional {
            let field = DisplayField::from_raw(raw)?;
            let entries = if self.config.is_url_field(field.singular()) {
                entries.iter().map(|url| url_link(url)).collect()
            } else {
                entries.iter().map(LinkRecord::text).collect()
            };
            if let Some(group) = named_group(field, entries) {
                fields.push(group);
            }
        }

        Ok(fields)
    }

    /// Link records for a plain (non cross-reference) game field.
    fn entries(&self, field: DisplayField, raw: &[FieldValue]) -> Vec<LinkRecord> {
        values(raw)
            .map(|value| {
                if field == DisplayField::CodeLicense {
                    LinkRecord::new(value, self.config.license_url(value).unwrap_or_default())
                } else if self.config.is_url_field(field.singular()) {
                    url_link(value)
                } else {
                    LinkRecord::text(value)
                }
            })
            .collect()
    }
}

/// Raw values of a game field. Cross-reference fields are resolved
/// separately and return their unresolved names here.
fn game_field(game: &Game, field: DisplayField) -> &[FieldValue] {
    match field {
        DisplayField::Home => &game.home,
        DisplayField::Inspiration => &game.inspirations,
        DisplayField::Media => &game.media,
        DisplayField::Download => &game.download,
        DisplayField::Play => &game.play,
        DisplayField::Developer => &game.developer,
        DisplayField::Keywords => &game.keywords,
        DisplayField::Platform => &game.platform,
        DisplayField::CodeLanguage => &game.code_language,
        DisplayField::CodeLicense => &game.code_license,
        DisplayField::CodeRepository => &game.code_repository,
        DisplayField::CodeDependency => &game.code_dependencies,
        DisplayField::AssetsLicense => &game.assets_license,
        DisplayField::Contact | DisplayField::Organization | DisplayField::Game => &[],
    }
}

fn url_link(url: &str) -> LinkRecord {
    LinkRecord::new(shortcut_url(url), url)
}

/// A named group, or nothing for an empty field.
fn named_group(field: DisplayField, entries: Vec<LinkRecord>) -> Option<FieldGroup> {
    if entries.is_empty() {
        return None;
    }
    Some(FieldGroup::named(field.display_name(entries.len()), entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::anchors::assign_anchors;
    use crate::site::references::{resolve_developer, resolve_game, resolve_inspiration, LinkMaps};
    use crate::site::types::{Developer, FieldTitle, Inspiration};

    fn names(fields: &[FieldGroup]) -> Vec<Option<&str>> {
        fields.iter().map(FieldGroup::name).collect()
    }

    fn full_game() -> Game {
        Game {
            title: "OpenRA".to_string(),
            home: vec![FieldValue::from("https://www.openra.net/")],
            inspirations: vec![FieldValue::from("Command & Conquer"), FieldValue::from("Red Alert")],
            media: vec![FieldValue::from("https://en.wikipedia.org/wiki/OpenRA")],
            developer: vec![FieldValue::from("Paul Chote")],
            keywords: vec![
                FieldValue::from("strategy"),
                FieldValue::Annotated {
                    value: "remake".to_string(),
                    comment: "of C&C".to_string(),
                },
            ],
            note: Some("Requires original game data.".to_string()),
            platform: vec![FieldValue::from("Windows"), FieldValue::from("Linux")],
            code_language: vec![FieldValue::from("C#")],
            code_license: vec![FieldValue::from("GPL-3.0"), FieldValue::from("Custom")],
            code_repository: vec![FieldValue::from("https://github.com/OpenRA/OpenRA.git")],
            code_dependencies: vec![FieldValue::from("SDL")],
            ..Default::default()
        }
    }

    fn resolve(game: Game) -> ResolvedGame {
        let games = assign_anchors(vec![game]);
        let inspirations = assign_anchors(vec![
            Inspiration {
                name: "Command & Conquer".to_string(),
                ..Default::default()
            },
            Inspiration {
                name: "Red Alert".to_string(),
                ..Default::default()
            },
        ]);
        let developers = assign_anchors(vec![Developer {
            name: "Paul Chote".to_string(),
            ..Default::default()
        }]);
        let maps = LinkMaps::build(&games, &inspirations, &developers);
        resolve_game(games.into_iter().next().unwrap(), &maps).unwrap()
    }

    #[test]
    fn test_game_field_order_and_names() {
        let config = ClassificationConfig::default();
        let fields = FieldProjector::new(&config).game(&resolve(full_game())).unwrap();

        assert_eq!(
            names(&fields),
            vec![
                Some("Home"),
                Some("Inspirations"),
                Some("Media"),
                Some("Developer"),
                Some("Keywords"),
                None,
                Some(TECHNICAL_INFO),
                Some("Platforms"),
                Some("Code language"),
                Some("Code licenses"),
                Some("Code repository"),
                Some("Code dependency"),
            ]
        );
    }

    #[test]
    fn test_game_entry_kinds() {
        let config = ClassificationConfig::default();
        let fields = FieldProjector::new(&config).game(&resolve(full_game())).unwrap();

        // url field: shortcut label, original href
        assert_eq!(fields[0].entries, vec![LinkRecord::new("www.openra.net/", "https://www.openra.net/")]);
        // cross reference
        assert_eq!(fields[1].entries[1], LinkRecord::new("Red Alert", "inspirations/R.html#red_alert"));
        assert_eq!(fields[2].entries[0].name, "WP: OpenRA");
        // comments stripped, plain text
        assert_eq!(fields[4].entries, vec![LinkRecord::text("strategy"), LinkRecord::text("remake")]);
        // note and separator
        assert_eq!(fields[5].title, None);
        assert_eq!(fields[5].entries[0].name, "Requires original game data.");
        assert_eq!(fields[6].title, Some(FieldTitle::Heading(TECHNICAL_INFO.to_string())));
        assert!(fields[6].entries.is_empty());
        // licenses link to known license pages
        assert_eq!(
            fields[9].entries,
            vec![
                LinkRecord::new("GPL-3.0", "https://www.gnu.org/licenses/gpl-3.0.html"),
                LinkRecord::text("Custom"),
            ]
        );
        assert_eq!(fields[10].entries[0].name, "GH: OpenRA/OpenRA.git");
    }

    #[test]
    fn test_minimal_game_has_only_separator() {
        let config = ClassificationConfig::default();
        let game = Game {
            title: "Bare".to_string(),
            note: Some(String::new()),
            ..Default::default()
        };
        let fields = FieldProjector::new(&config).game(&resolve(game)).unwrap();
        assert_eq!(fields, vec![FieldGroup::heading(TECHNICAL_INFO)]);
    }

    #[test]
    fn test_inspiration_fields() {
        let config = ClassificationConfig::default();
        let games = assign_anchors(vec![
            Game { title: "OpenRA".to_string(), ..Default::default() },
            Game { title: "Vanilla Conquer".to_string(), ..Default::default() },
        ]);
        let inspirations = assign_anchors(vec![Inspiration {
            name: "Command & Conquer".to_string(),
            media: vec!["https://en.wikipedia.org/wiki/Command_%26_Conquer".to_string()],
            inspired_entries: vec!["OpenRA".to_string(), "Vanilla Conquer".to_string()],
        }]);
        let maps = LinkMaps::build(&games, &inspirations, &[]);
        let resolved = resolve_inspiration(inspirations.into_iter().next().unwrap(), &maps).unwrap();

        let fields = FieldProjector::new(&config).inspiration(&resolved).unwrap();
        assert_eq!(names(&fields), vec![Some("Media"), Some("Inspired games")]);
        assert_eq!(fields[1].entries[1].href, "games/V.html#vanilla_conquer");
    }

    #[test]
    fn test_developer_fields() {
        let config = ClassificationConfig::default();
        let games = assign_anchors(vec![Game { title: "OpenRA".to_string(), ..Default::default() }]);
        let developers = assign_anchors(vec![Developer {
            name: "Paul Chote".to_string(),
            games: vec!["OpenRA".to_string()],
            home: vec!["https://github.com/pchote".to_string()],
            contact: vec!["pchote@SF".to_string(), "pchote@GH".to_string()],
            organization: Vec::new(),
        }]);
        let maps = LinkMaps::build(&games, &[], &developers);
        let resolved = resolve_developer(developers.into_iter().next().unwrap(), &maps).unwrap();

        let fields = FieldProjector::new(&config).developer(&resolved).unwrap();
        assert_eq!(names(&fields), vec![Some("Open source Game"), Some("Home"), Some("Contacts")]);
        assert_eq!(fields[1].entries[0], LinkRecord::new("GH: pchote", "https://github.com/pchote"));
        assert_eq!(fields[2].entries[0], LinkRecord::text("pchote@SF"));
    }
}
