//! Shared data types for site generation.
//!
//! Data sources:
//! - Games: one record per catalogue entry (`Title`, `Home`, `Code language`, ...)
//! - Inspirations: original games that entries are modelled on (`Name`, `Inspired entries`)
//! - Developers: people and organisations behind entries (`Name`, `Games`)
//!
//! Field names follow the catalogue's own spelling so records deserialize
//! straight from the dataset.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw attribute value, optionally annotated with a comment.
///
/// The catalogue writes e.g. `C++ @ 2 files` style annotations; display
/// only ever needs the value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Plain(String),
    Annotated {
        value: String,
        #[serde(default)]
        comment: String,
    },
}

impl FieldValue {
    /// The value with any comment stripped.
    pub fn value(&self) -> &str {
        match self {
            FieldValue::Plain(value) => value,
            FieldValue::Annotated { value, .. } => value,
        }
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            FieldValue::Plain(_) => None,
            FieldValue::Annotated { comment, .. } => Some(comment),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Plain(value.to_string())
    }
}

/// Strip comments from a list of values.
pub fn values(field: &[FieldValue]) -> impl Iterator<Item = &str> {
    field.iter().map(FieldValue::value)
}

/// The `Building` block of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Building {
    #[serde(rename = "Build system", default)]
    pub build_system: Vec<FieldValue>,
}

/// A catalogue entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Game {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Home")]
    pub home: Vec<FieldValue>,
    #[serde(rename = "Inspirations")]
    pub inspirations: Vec<FieldValue>,
    #[serde(rename = "Media")]
    pub media: Vec<FieldValue>,
    #[serde(rename = "Download")]
    pub download: Vec<FieldValue>,
    #[serde(rename = "Play")]
    pub play: Vec<FieldValue>,
    #[serde(rename = "Developer")]
    pub developer: Vec<FieldValue>,
    #[serde(rename = "Keywords")]
    pub keywords: Vec<FieldValue>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "State")]
    pub state: Vec<String>,
    #[serde(rename = "Platform")]
    pub platform: Vec<FieldValue>,
    #[serde(rename = "Code language")]
    pub code_language: Vec<FieldValue>,
    #[serde(rename = "Code license")]
    pub code_license: Vec<FieldValue>,
    #[serde(rename = "Code repository")]
    pub code_repository: Vec<FieldValue>,
    #[serde(rename = "Code dependencies")]
    pub code_dependencies: Vec<FieldValue>,
    #[serde(rename = "Assets license")]
    pub assets_license: Vec<FieldValue>,
    #[serde(rename = "Building")]
    pub building: Building,
}

impl Game {
    pub fn is_beta(&self) -> bool {
        self.state.iter().any(|s| s == "beta")
    }

    /// Year from an `inactive since YYYY` state, if any.
    pub fn inactive_since(&self) -> Option<u32> {
        self.state
            .iter()
            .find_map(|s| s.strip_prefix("inactive since "))
            .and_then(|year| year.trim().parse().ok())
    }

    pub fn is_inactive(&self) -> bool {
        self.state.iter().any(|s| s.starts_with("inactive since"))
    }

    pub fn is_mature(&self) -> bool {
        self.state.iter().any(|s| s == "mature")
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        values(&self.keywords).any(|k| k == keyword)
    }
}

/// An original game that catalogue entries are inspired by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Inspiration {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Media")]
    pub media: Vec<String>,
    #[serde(rename = "Inspired entries")]
    pub inspired_entries: Vec<String>,
}

/// A developer of one or more catalogue entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Developer {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Games")]
    pub games: Vec<String>,
    #[serde(rename = "Home")]
    pub home: Vec<String>,
    #[serde(rename = "Contact")]
    pub contact: Vec<String>,
    #[serde(rename = "Organization")]
    pub organization: Vec<String>,
}

/// The three entity types of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Game,
    Inspiration,
    Developer,
}

impl EntityKind {
    /// Site directory holding this kind's pages.
    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Game => "games",
            EntityKind::Inspiration => "inspirations",
            EntityKind::Developer => "developers",
        }
    }

    /// Attribute that names an entity of this kind.
    pub fn name_attribute(&self) -> &'static str {
        match self {
            EntityKind::Game => "Title",
            EntityKind::Inspiration | EntityKind::Developer => "Name",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Game => "game",
            EntityKind::Inspiration => "inspiration",
            EntityKind::Developer => "developer",
        };
        f.write_str(label)
    }
}

/// Anything that can be anchored and linked to.
pub trait Entity {
    const KIND: EntityKind;

    /// Value of the name attribute.
    fn name(&self) -> &str;
}

impl Entity for Game {
    const KIND: EntityKind = EntityKind::Game;

    fn name(&self) -> &str {
        &self.title
    }
}

impl Entity for Inspiration {
    const KIND: EntityKind = EntityKind::Inspiration;

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Developer {
    const KIND: EntityKind = EntityKind::Developer;

    fn name(&self) -> &str {
        &self.name
    }
}

/// A resolved reference to an entity page or an external resource.
///
/// `href` is empty for plain text entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    pub name: String,
    pub href: String,
}

impl LinkRecord {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }
}

/// Heading of a field group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldTitle {
    /// Plain separator heading, e.g. "Technical info".
    Heading(String),
    /// Named field, e.g. `{name: "Developers"}`.
    Named { name: String },
}

/// Named, ordered cluster of links shown on an entity's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<FieldTitle>,
    pub entries: Vec<LinkRecord>,
}

impl FieldGroup {
    pub fn named(name: impl Into<String>, entries: Vec<LinkRecord>) -> Self {
        Self {
            title: Some(FieldTitle::Named { name: name.into() }),
            entries,
        }
    }

    pub fn heading(heading: impl Into<String>) -> Self {
        Self {
            title: Some(FieldTitle::Heading(heading.into())),
            entries: Vec::new(),
        }
    }

    pub fn untitled(entries: Vec<LinkRecord>) -> Self {
        Self { title: None, entries }
    }

    /// Display name of a named group.
    pub fn name(&self) -> Option<&str> {
        match &self.title {
            Some(FieldTitle::Named { name }) => Some(name),
            Some(FieldTitle::Heading(heading)) => Some(heading),
            None => None,
        }
    }
}

/// The three raw entity lists of one generation run.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub games: Vec<Game>,
    pub inspirations: Vec<Inspiration>,
    pub developers: Vec<Developer>,
}

impl Catalogue {
    pub fn new(games: Vec<Game>, inspirations: Vec<Inspiration>, developers: Vec<Developer>) -> Self {
        Self {
            games,
            inspirations,
            developers,
        }
    }

    /// Sort every list case-insensitively by its name attribute.
    pub fn sorted(mut self) -> Self {
        sort_by_name(&mut self.games);
        sort_by_name(&mut self.inspirations);
        sort_by_name(&mut self.developers);
        self
    }
}

fn sort_by_name<E: Entity>(entities: &mut [E]) {
    entities.sort_by_cached_key(|e| e.name().to_lowercase());
}
