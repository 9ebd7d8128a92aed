//! View Models for site pages
//!
//! Plain serializable payloads handed to the templating collaborator.
//! All strings are unescaped text; all hrefs are relative to the page they
//! appear on.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::site::types::FieldGroup;
use crate::site::utils::Columns;

/// Index entry tag: a status text for games, a count for inspirations and
/// developers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tag {
    Text(String),
    Count(usize),
}

/// One entry of a categorical index column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub href: String,
    #[serde(rename = "anchor-id")]
    pub anchor_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tag>,
}

/// Index page split into categories and three columns per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalIndex {
    pub title: String,
    pub categories: Vec<String>,
    #[serde(flatten)]
    pub columns: Columns<IndexEntry>,
}

impl CategoricalIndex {
    pub fn number_entries(&self, category: &str) -> Option<usize> {
        self.columns.number_entries.get(category).copied()
    }

    pub fn entries(&self, category: &str) -> Option<&[Vec<IndexEntry>; 3]> {
        self.columns.entries.get(category)
    }
}

/// An entity on its alphabet listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingItem {
    pub name: String,
    #[serde(rename = "anchor-id")]
    pub anchor_id: String,
    pub fields: Vec<FieldGroup>,
}

/// All entities of one type in one alphabet bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub title: String,
    pub items: Vec<ListingItem>,
}

/// Landing page numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    pub number_games: usize,
    pub number_inspirations: usize,
    pub number_developers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsSection {
    pub title: String,
    pub items: Vec<Occurrence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsPage {
    pub title: String,
    pub sections: Vec<StatisticsSection>,
}

/// A page payload with its site location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Output file, e.g. `games/genres.html`.
    pub path: String,
    /// Directory the page's relative links start from.
    pub directory: String,
    pub content: T,
}

/// Pages under `games/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamePages {
    pub listings: Vec<Page<Listing>>,
    pub alphabetical: Page<CategoricalIndex>,
    pub genres: Page<CategoricalIndex>,
    pub languages: Page<CategoricalIndex>,
    pub platforms: Page<CategoricalIndex>,
}

/// Pages under `inspirations/` or `developers/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityPages {
    pub listings: Vec<Page<Listing>>,
    pub alphabetical: Page<CategoricalIndex>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteMeta {
    pub title: String,
    #[serde(rename = "creation-date")]
    pub creation_date: DateTime<Utc>,
}

/// Everything one generation run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitePayload {
    pub meta: SiteMeta,
    pub index: Page<IndexPage>,
    pub statistics: Page<StatisticsPage>,
    pub games: GamePages,
    pub inspirations: EntityPages,
    pub developers: EntityPages,
}

impl SitePayload {
    /// Output paths of all pages, in generation order.
    pub fn page_paths(&self) -> Vec<&str> {
        let mut paths = vec![self.index.path.as_str(), self.statistics.path.as_str()];
        paths.extend(self.games.listings.iter().map(|p| p.path.as_str()));
        paths.extend(
            [&self.games.alphabetical, &self.games.genres, &self.games.languages, &self.games.platforms]
                .into_iter()
                .map(|p| p.path.as_str()),
        );
        for pages in [&self.inspirations, &self.developers] {
            paths.push(pages.alphabetical.path.as_str());
            paths.extend(pages.listings.iter().map(|p| p.path.as_str()));
        }
        paths
    }
}
