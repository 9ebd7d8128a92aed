//! Generation stages.
//!
//! `Catalogue` -> `AnchoredCatalogue` -> `ResolvedCatalogue` ->
//! `ProjectedCatalogue`. Each stage can only be built from the previous one,
//! so references are never resolved before anchors exist and fields are
//! never projected from unresolved records.

use crate::config::ClassificationConfig;
use crate::error::Result;
use crate::site::anchors::{assign_anchors, Anchor, Anchored};
use crate::site::fields::FieldProjector;
use crate::site::references::{
    resolve_developer, resolve_game, resolve_inspiration, LinkMaps, ResolvedDeveloper, ResolvedGame,
    ResolvedInspiration,
};
use crate::site::types::{Catalogue, Developer, Entity, FieldGroup, Game, Inspiration};

/// A resolved record of some entity type.
pub trait Resolved {
    type Entity: Entity;

    fn record(&self) -> &Anchored<Self::Entity>;
}

impl Resolved for ResolvedGame {
    type Entity = Game;

    fn record(&self) -> &Anchored<Game> {
        &self.record
    }
}

impl Resolved for ResolvedInspiration {
    type Entity = Inspiration;

    fn record(&self) -> &Anchored<Inspiration> {
        &self.record
    }
}

impl Resolved for ResolvedDeveloper {
    type Entity = Developer;

    fn record(&self) -> &Anchored<Developer> {
        &self.record
    }
}

/// Stage 1: every entity carries its anchor, bucket letter and href.
#[derive(Debug, Clone)]
pub struct AnchoredCatalogue {
    games: Vec<Anchored<Game>>,
    inspirations: Vec<Anchored<Inspiration>>,
    developers: Vec<Anchored<Developer>>,
}

impl AnchoredCatalogue {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            games: assign_anchors(catalogue.games),
            inspirations: assign_anchors(catalogue.inspirations),
            developers: assign_anchors(catalogue.developers),
        }
    }

    pub fn games(&self) -> &[Anchored<Game>] {
        &self.games
    }

    pub fn inspirations(&self) -> &[Anchored<Inspiration>] {
        &self.inspirations
    }

    pub fn developers(&self) -> &[Anchored<Developer>] {
        &self.developers
    }

    /// Resolve all cross references; the first dangling one aborts.
    pub fn resolve(self) -> Result<ResolvedCatalogue> {
        let maps = LinkMaps::build(&self.games, &self.inspirations, &self.developers);

        let games = self
            .games
            .into_iter()
            .map(|game| resolve_game(game, &maps))
            .collect::<Result<Vec<_>>>()?;
        let inspirations = self
            .inspirations
            .into_iter()
            .map(|inspiration| resolve_inspiration(inspiration, &maps))
            .collect::<Result<Vec<_>>>()?;
        let developers = self
            .developers
            .into_iter()
            .map(|developer| resolve_developer(developer, &maps))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Resolved references for {} games, {} inspirations, {} developers",
            games.len(),
            inspirations.len(),
            developers.len()
        );

        Ok(ResolvedCatalogue {
            maps,
            games,
            inspirations,
            developers,
        })
    }
}

/// Stage 2: cross references are link records.
#[derive(Debug, Clone)]
pub struct ResolvedCatalogue {
    maps: LinkMaps,
    games: Vec<ResolvedGame>,
    inspirations: Vec<ResolvedInspiration>,
    developers: Vec<ResolvedDeveloper>,
}

impl ResolvedCatalogue {
    pub fn link_maps(&self) -> &LinkMaps {
        &self.maps
    }

    pub fn games(&self) -> &[ResolvedGame] {
        &self.games
    }

    pub fn inspirations(&self) -> &[ResolvedInspiration] {
        &self.inspirations
    }

    pub fn developers(&self) -> &[ResolvedDeveloper] {
        &self.developers
    }

    /// Compute every record's display field groups.
    pub fn project(self, config: &ClassificationConfig) -> Result<ProjectedCatalogue> {
        let projector = FieldProjector::new(config);

        let games = project_all(self.games, |g| projector.game(g))?;
        let inspirations = project_all(self.inspirations, |i| projector.inspiration(i))?;
        let developers = project_all(self.developers, |d| projector.developer(d))?;

        Ok(ProjectedCatalogue {
            games,
            inspirations,
            developers,
        })
    }
}

fn project_all<R>(records: Vec<R>, project: impl Fn(&R) -> Result<Vec<FieldGroup>>) -> Result<Vec<Projected<R>>> {
    records
        .into_iter()
        .map(|resolved| {
            let fields = project(&resolved)?;
            Ok(Projected { resolved, fields })
        })
        .collect()
}

/// A resolved record with its display field groups.
#[derive(Debug, Clone)]
pub struct Projected<R> {
    pub resolved: R,
    pub fields: Vec<FieldGroup>,
}

impl<R: Resolved> Projected<R> {
    pub fn entity(&self) -> &R::Entity {
        &self.resolved.record().entity
    }

    pub fn anchor(&self) -> &Anchor {
        &self.resolved.record().anchor
    }

    pub fn name(&self) -> &str {
        self.entity().name()
    }
}

/// Stage 3: ready for categorization and column balancing.
#[derive(Debug, Clone)]
pub struct ProjectedCatalogue {
    games: Vec<Projected<ResolvedGame>>,
    inspirations: Vec<Projected<ResolvedInspiration>>,
    developers: Vec<Projected<ResolvedDeveloper>>,
}

impl ProjectedCatalogue {
    pub fn games(&self) -> &[Projected<ResolvedGame>] {
        &self.games
    }

    pub fn inspirations(&self) -> &[Projected<ResolvedInspiration>] {
        &self.inspirations
    }

    pub fn developers(&self) -> &[Projected<ResolvedDeveloper>] {
        &self.developers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogueError;
    use crate::site::types::FieldValue;

    fn catalogue() -> Catalogue {
        Catalogue::new(
            vec![Game {
                title: "Freeciv".to_string(),
                inspirations: vec![FieldValue::from("Civilization")],
                developer: vec![FieldValue::from("Freeciv Team")],
                ..Default::default()
            }],
            vec![Inspiration {
                name: "Civilization".to_string(),
                inspired_entries: vec!["Freeciv".to_string()],
                ..Default::default()
            }],
            vec![Developer {
                name: "Freeciv Team".to_string(),
                games: vec!["Freeciv".to_string()],
                ..Default::default()
            }],
        )
    }

    #[test]
    fn test_stages_in_order() {
        let anchored = AnchoredCatalogue::new(catalogue());
        assert_eq!(anchored.games()[0].anchor.href, "games/F.html#freeciv");

        let resolved = anchored.resolve().unwrap();
        assert_eq!(resolved.link_maps().developers.href("Freeciv Team"), Some("developers/F.html#freeciv_team"));

        let projected = resolved.project(&ClassificationConfig::default()).unwrap();
        let game = &projected.games()[0];
        assert_eq!(game.name(), "Freeciv");
        assert_eq!(game.anchor().letter, 'F');
        assert_eq!(game.fields[0].name(), Some("Inspiration"));
        assert_eq!(projected.developers()[0].fields[0].name(), Some("Open source Game"));
    }

    #[test]
    fn test_dangling_reference_aborts_resolution() {
        let mut catalogue = catalogue();
        catalogue.developers[0].games.push("Freecol".to_string());

        let err = AnchoredCatalogue::new(catalogue).resolve().unwrap_err();
        assert!(matches!(err, CatalogueError::UnresolvedReference { ref name, .. } if name == "Freecol"));
    }
}
