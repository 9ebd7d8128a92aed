//! Site Generator
//!
//! Main entry point for turning a catalogue into page payloads.
//! Runs the stages in their only legal order (anchors, references, fields),
//! then buckets each entity list under its classification schemes and
//! splits every bucket into three columns.
//!
//! Public API (consumed by the generate_site_index binary):
//! - SiteGenerator::new(config) -> Self
//! - SiteGenerator::generate(catalogue) -> Result<SitePayload, CatalogueError>

use chrono::Utc;

use crate::config::ClassificationConfig;
use crate::error::Result;
use crate::site::anchors::extended_alphabet;
use crate::site::pipeline::{AnchoredCatalogue, Projected, ProjectedCatalogue, Resolved};
use crate::site::references::{ResolvedDeveloper, ResolvedGame, ResolvedInspiration};
use crate::site::statistics;
use crate::site::types::{values, Catalogue, Entity, EntityKind, FieldGroup, LinkRecord};
use crate::site::utils::{divide_in_columns, relative_url, sort_into_categories, uncategorized, Categorized};
use crate::site::view_models::{
    CategoricalIndex, EntityPages, GamePages, IndexEntry, IndexPage, Listing, ListingItem, Page, SiteMeta,
    SitePayload, StatisticsPage, Tag,
};

/// Overflow category of the platform index.
pub const UNSPECIFIED_PLATFORM: &str = "Unspecified";

/// Site generator - turns one catalogue into one set of page payloads.
pub struct SiteGenerator {
    config: ClassificationConfig,
}

impl SiteGenerator {
    pub fn new(config: ClassificationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    /// Generate all page payloads for a catalogue.
    ///
    /// Fails on the first unresolved reference or unknown field; nothing is
    /// returned for a failed run.
    pub fn generate(&self, catalogue: Catalogue) -> Result<SitePayload> {
        tracing::info!(
            "Generating site for {} games, {} inspirations, {} developers",
            catalogue.games.len(),
            catalogue.inspirations.len(),
            catalogue.developers.len()
        );

        let anchored = AnchoredCatalogue::new(catalogue);
        let resolved = anchored.resolve()?;
        let projected = resolved.project(&self.config)?;

        let index = Page {
            path: "index.html".to_string(),
            directory: String::new(),
            content: IndexPage {
                number_games: projected.games().len(),
                number_inspirations: projected.inspirations().len(),
                number_developers: projected.developers().len(),
            },
        };

        let statistics = Page {
            path: "statistics.html".to_string(),
            directory: String::new(),
            content: StatisticsPage {
                title: "Statistics".to_string(),
                sections: vec![statistics::build_systems(projected.games().iter().map(|g| g.entity()))],
            },
        };

        let payload = SitePayload {
            meta: SiteMeta {
                title: self.config.site_title.clone(),
                creation_date: Utc::now(),
            },
            index,
            statistics,
            games: self.game_pages(&projected),
            inspirations: entity_pages(projected.inspirations(), inspiration_index, |letter| {
                format!("Inspirations ({})", letter)
            }),
            developers: entity_pages(projected.developers(), developer_index, |letter| {
                format!("Developers ({})", letter)
            }),
        };

        tracing::info!("Generated {} pages", payload.page_paths().len());
        Ok(payload)
    }

    fn game_pages(&self, projected: &ProjectedCatalogue) -> GamePages {
        let games = projected.games();
        let context = PageContext::new(EntityKind::Game);

        let by_alphabet = by_alphabet(games);
        let listings = listings(&by_alphabet, &context, |letter| format!("Games starting with {}", letter));
        let alphabetical = context.index(&by_alphabet, "index.html", "Games alphabetical index", game_index);

        let genres = self.config.genres();
        let genre_fits = |game: &Projected<ResolvedGame>, genre: &str| game.entity().has_keyword(&genre.to_lowercase());
        warn_uncategorized("genre", uncategorized(games, &genres, genre_fits).len());
        let by_genre = sort_into_categories(games, &genres, genre_fits, None);
        let genres = context.index(&by_genre, "genres.html", "Games by genre", game_index);

        let languages = &self.config.known_languages;
        let language_fits =
            |game: &Projected<ResolvedGame>, language: &str| values(&game.entity().code_language).any(|l| l == language);
        warn_uncategorized("code language", uncategorized(games, languages, language_fits).len());
        let by_language = sort_into_categories(games, languages, language_fits, None);
        let languages = context.index(&by_language, "languages.html", "Games by language", game_index);

        let by_platform = sort_into_categories(
            games,
            &self.config.valid_platforms,
            |game, platform| values(&game.entity().platform).any(|p| p == platform),
            Some(UNSPECIFIED_PLATFORM),
        );
        let platforms = context.index(&by_platform, "platforms.html", "Games by platform", game_index);

        GamePages {
            listings,
            alphabetical,
            genres,
            languages,
            platforms,
        }
    }
}

/// Alphabetical listings and index of inspirations or developers.
fn entity_pages<R: Resolved>(
    items: &[Projected<R>],
    transform: fn(&PageContext, &Projected<R>) -> IndexEntry,
    listing_title: impl Fn(&str) -> String,
) -> EntityPages {
    let context = PageContext::new(<R::Entity as Entity>::KIND);
    let by_alphabet = by_alphabet(items);

    let listings = listings(&by_alphabet, &context, listing_title);
    let title = match <R::Entity as Entity>::KIND {
        EntityKind::Inspiration => "Inspirations alphabetical index",
        EntityKind::Developer => "Developers alphabetical index",
        EntityKind::Game => "Games alphabetical index",
    };
    let alphabetical = context.index(&by_alphabet, "index.html", title, transform);

    EntityPages { listings, alphabetical }
}

fn by_alphabet<R: Resolved>(items: &[Projected<R>]) -> Categorized<'_, Projected<R>> {
    sort_into_categories(
        items,
        &extended_alphabet(),
        |item, letter| letter.chars().eq(std::iter::once(item.anchor().letter)),
        None,
    )
}

fn listings<R: Resolved>(
    by_alphabet: &Categorized<'_, Projected<R>>,
    context: &PageContext,
    title: impl Fn(&str) -> String,
) -> Vec<Page<Listing>> {
    by_alphabet
        .iter()
        .map(|(letter, items)| {
            let items = items
                .iter()
                .map(|item| ListingItem {
                    name: item.name().to_string(),
                    anchor_id: item.anchor().id.clone(),
                    fields: context.fields(&item.fields),
                })
                .collect();
            context.page(format!("{}.html", letter), Listing { title: title(letter), items })
        })
        .collect()
}

fn warn_uncategorized(scheme: &str, count: usize) {
    if count > 0 {
        tracing::warn!("{} games match no {} and appear on no {} index", count, scheme, scheme);
    }
}

/// Location of a page; rewrites site paths relative to it.
pub struct PageContext {
    kind: EntityKind,
}

impl PageContext {
    pub fn new(kind: EntityKind) -> Self {
        Self { kind }
    }

    pub fn directory(&self) -> &'static str {
        self.kind.path()
    }

    /// Relative link to a site path; empty hrefs (plain text) stay empty.
    pub fn link(&self, href: &str) -> String {
        if href.is_empty() {
            return String::new();
        }
        relative_url(self.directory(), href)
    }

    pub fn fields(&self, fields: &[FieldGroup]) -> Vec<FieldGroup> {
        fields
            .iter()
            .map(|group| FieldGroup {
                title: group.title.clone(),
                entries: group
                    .entries
                    .iter()
                    .map(|entry| LinkRecord::new(entry.name.clone(), self.link(&entry.href)))
                    .collect(),
            })
            .collect()
    }

    fn page<T>(&self, file: String, content: T) -> Page<T> {
        Page {
            path: format!("{}/{}", self.directory(), file),
            directory: self.directory().to_string(),
            content,
        }
    }

    fn index<R: Resolved>(
        &self,
        categorized: &Categorized<'_, Projected<R>>,
        file: &str,
        title: &str,
        transform: fn(&PageContext, &Projected<R>) -> IndexEntry,
    ) -> Page<CategoricalIndex> {
        let columns = divide_in_columns(categorized, |item| transform(self, item));
        tracing::debug!(
            "{}: {} categories, {} entries",
            title,
            categorized.len(),
            columns.number_entries.values().sum::<usize>()
        );

        self.page(
            file.to_string(),
            CategoricalIndex {
                title: title.to_string(),
                categories: categorized.categories(),
                columns,
            },
        )
    }

    fn entry<R: Resolved>(&self, item: &Projected<R>, tags: Option<Tag>) -> IndexEntry {
        IndexEntry {
            name: item.name().to_string(),
            href: self.link(&item.anchor().href),
            anchor_id: item.anchor().id.clone(),
            tags,
        }
    }
}

/// Game index entry, tagged `beta` and/or `inactive since YYYY`.
fn game_index(context: &PageContext, game: &Projected<ResolvedGame>) -> IndexEntry {
    let entity = game.entity();
    let mut tags = Vec::new();
    if entity.is_beta() {
        tags.push("beta".to_string());
    }
    if let Some(year) = entity.inactive_since() {
        tags.push(format!("inactive since {}", year));
    }

    let tags = (!tags.is_empty()).then(|| Tag::Text(tags.join(", ")));
    context.entry(game, tags)
}

/// Inspiration index entry, tagged with the number of inspired games if > 1.
fn inspiration_index(context: &PageContext, inspiration: &Projected<ResolvedInspiration>) -> IndexEntry {
    context.entry(inspiration, count_tag(inspiration.entity().inspired_entries.len()))
}

/// Developer index entry, tagged with the number of games if > 1.
fn developer_index(context: &PageContext, developer: &Projected<ResolvedDeveloper>) -> IndexEntry {
    context.entry(developer, count_tag(developer.entity().games.len()))
}

fn count_tag(n: usize) -> Option<Tag> {
    (n > 1).then_some(Tag::Count(n))
}
