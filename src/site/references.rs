//! Reference resolution between games, inspirations and developers.
//!
//! Name -> href tables are built from anchored lists, so anchors always
//! exist before any reference is resolved. Every referenced name must exist
//! in its target list; a dangling reference fails the whole run.

use rustc_hash::FxHashMap;

use crate::error::{CatalogueError, Result};
use crate::site::anchors::Anchored;
use crate::site::types::{values, Developer, Entity, EntityKind, Game, Inspiration, LinkRecord};

/// Name -> href lookup over one anchored entity list.
#[derive(Debug, Clone)]
pub struct LinkMap {
    kind: EntityKind,
    hrefs: FxHashMap<String, String>,
}

impl LinkMap {
    pub fn build<E: Entity>(entities: &[Anchored<E>]) -> Self {
        let hrefs = entities
            .iter()
            .map(|e| (e.name().to_string(), e.anchor.href.clone()))
            .collect();
        Self { kind: E::KIND, hrefs }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn href(&self, name: &str) -> Option<&str> {
        self.hrefs.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }

    /// Resolve one referenced name made by `referenced_by`.
    pub fn link(&self, name: &str, referenced_by: &str) -> Result<LinkRecord> {
        self.href(name)
            .map(|href| LinkRecord::new(name, href))
            .ok_or_else(|| CatalogueError::UnresolvedReference {
                kind: self.kind,
                name: name.to_string(),
                referenced_by: referenced_by.to_string(),
            })
    }

    /// Resolve all referenced names, failing on the first unknown one.
    pub fn links<'n>(&self, names: impl IntoIterator<Item = &'n str>, referenced_by: &str) -> Result<Vec<LinkRecord>> {
        names
            .into_iter()
            .map(|name| self.link(name, referenced_by))
            .collect()
    }
}

/// Lookup tables for all three entity lists.
#[derive(Debug, Clone)]
pub struct LinkMaps {
    pub games: LinkMap,
    pub inspirations: LinkMap,
    pub developers: LinkMap,
}

impl LinkMaps {
    pub fn build(
        games: &[Anchored<Game>],
        inspirations: &[Anchored<Inspiration>],
        developers: &[Anchored<Developer>],
    ) -> Self {
        Self {
            games: LinkMap::build(games),
            inspirations: LinkMap::build(inspirations),
            developers: LinkMap::build(developers),
        }
    }
}

/// A game with its inspiration and developer references resolved.
#[derive(Debug, Clone)]
pub struct ResolvedGame {
    pub record: Anchored<Game>,
    pub inspirations: Vec<LinkRecord>,
    pub developers: Vec<LinkRecord>,
}

/// An inspiration with links to the games it inspired.
#[derive(Debug, Clone)]
pub struct ResolvedInspiration {
    pub record: Anchored<Inspiration>,
    pub games: Vec<LinkRecord>,
}

/// A developer with links to their games.
#[derive(Debug, Clone)]
pub struct ResolvedDeveloper {
    pub record: Anchored<Developer>,
    pub games: Vec<LinkRecord>,
}

pub fn resolve_game(game: Anchored<Game>, maps: &LinkMaps) -> Result<ResolvedGame> {
    let title = game.entity.title.as_str();
    let inspirations = maps.inspirations.links(values(&game.entity.inspirations), title)?;
    let developers = maps.developers.links(values(&game.entity.developer), title)?;
    Ok(ResolvedGame {
        record: game,
        inspirations,
        developers,
    })
}

pub fn resolve_inspiration(inspiration: Anchored<Inspiration>, maps: &LinkMaps) -> Result<ResolvedInspiration> {
    let games = maps.games.links(
        inspiration.entity.inspired_entries.iter().map(String::as_str),
        &inspiration.entity.name,
    )?;
    Ok(ResolvedInspiration {
        record: inspiration,
        games,
    })
}

pub fn resolve_developer(developer: Anchored<Developer>, maps: &LinkMaps) -> Result<ResolvedDeveloper> {
    let games = maps
        .games
        .links(developer.entity.games.iter().map(String::as_str), &developer.entity.name)?;
    Ok(ResolvedDeveloper {
        record: developer,
        games,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::anchors::assign_anchors;
    use crate::site::types::FieldValue;

    fn fixtures() -> (Vec<Anchored<Game>>, Vec<Anchored<Inspiration>>, Vec<Anchored<Developer>>) {
        let games = assign_anchors(vec![Game {
            title: "OpenRA".to_string(),
            inspirations: vec![FieldValue::from("Command & Conquer")],
            developer: vec![FieldValue::Annotated {
                value: "Paul Chote".to_string(),
                comment: "maintainer".to_string(),
            }],
            ..Default::default()
        }]);
        let inspirations = assign_anchors(vec![Inspiration {
            name: "Command & Conquer".to_string(),
            inspired_entries: vec!["OpenRA".to_string()],
            ..Default::default()
        }]);
        let developers = assign_anchors(vec![Developer {
            name: "Paul Chote".to_string(),
            games: vec!["OpenRA".to_string()],
            ..Default::default()
        }]);
        (games, inspirations, developers)
    }

    #[test]
    fn test_link_map_lookup() {
        let (games, inspirations, developers) = fixtures();
        let maps = LinkMaps::build(&games, &inspirations, &developers);

        assert_eq!(maps.games.len(), 1);
        assert_eq!(maps.inspirations.href("Command & Conquer"), Some("inspirations/C.html#command_conquer"));
        assert_eq!(maps.developers.kind(), EntityKind::Developer);
    }

    #[test]
    fn test_resolve_game_strips_comments() {
        let (games, inspirations, developers) = fixtures();
        let maps = LinkMaps::build(&games, &inspirations, &developers);

        let resolved = resolve_game(games.into_iter().next().unwrap(), &maps).unwrap();
        assert_eq!(
            resolved.developers,
            vec![LinkRecord::new("Paul Chote", "developers/P.html#paul_chote")]
        );
        assert_eq!(resolved.inspirations[0].name, "Command & Conquer");
    }

    #[test]
    fn test_resolve_back_links() {
        let (games, inspirations, developers) = fixtures();
        let maps = LinkMaps::build(&games, &inspirations, &developers);

        let developer = resolve_developer(developers.into_iter().next().unwrap(), &maps).unwrap();
        assert_eq!(developer.games, vec![LinkRecord::new("OpenRA", "games/O.html#openra")]);

        let inspiration = resolve_inspiration(inspirations.into_iter().next().unwrap(), &maps).unwrap();
        assert_eq!(inspiration.games, vec![LinkRecord::new("OpenRA", "games/O.html#openra")]);
    }

    #[test]
    fn test_unknown_developer_is_fatal() {
        let (_, inspirations, developers) = fixtures();
        let games = assign_anchors(vec![Game {
            title: "Zombie Run".to_string(),
            developer: vec![FieldValue::from("Jane Doe")],
            ..Default::default()
        }]);
        let maps = LinkMaps::build(&games, &inspirations, &developers);

        let err = resolve_game(games.into_iter().next().unwrap(), &maps).unwrap_err();
        assert_eq!(
            err,
            CatalogueError::UnresolvedReference {
                kind: EntityKind::Developer,
                name: "Jane Doe".to_string(),
                referenced_by: "Zombie Run".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_game_in_inspiration_is_fatal() {
        let (games, _, developers) = fixtures();
        let inspirations = assign_anchors(vec![Inspiration {
            name: "Dune II".to_string(),
            inspired_entries: vec!["Dune Legacy".to_string()],
            ..Default::default()
        }]);
        let maps = LinkMaps::build(&games, &inspirations, &developers);

        let err = resolve_inspiration(inspirations.into_iter().next().unwrap(), &maps).unwrap_err();
        assert!(matches!(err, CatalogueError::UnresolvedReference { kind: EntityKind::Game, .. }));
    }
}
