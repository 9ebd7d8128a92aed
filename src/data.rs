//! Data Loading
//!
//! Reads the catalogue from a directory holding `games.json`,
//! `inspirations.json` and `developers.json` (one JSON array each).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::site::types::{Catalogue, Developer, Game, Inspiration};

pub const GAMES_FILE: &str = "games.json";
pub const INSPIRATIONS_FILE: &str = "inspirations.json";
pub const DEVELOPERS_FILE: &str = "developers.json";

/// Load all three entity lists from `dir`, sorted by name.
pub fn load_catalogue(dir: &Path) -> Result<Catalogue> {
    let games: Vec<Game> = load_entities(&dir.join(GAMES_FILE))?;
    let inspirations: Vec<Inspiration> = load_entities(&dir.join(INSPIRATIONS_FILE))?;
    let developers: Vec<Developer> = load_entities(&dir.join(DEVELOPERS_FILE))?;

    tracing::info!(
        "Loaded {} games, {} inspirations, {} developers from {:?}",
        games.len(),
        inspirations.len(),
        developers.len(),
        dir
    );

    Ok(Catalogue::new(games, inspirations, developers).sorted())
}

/// Load one JSON array of entities.
pub fn load_entities<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entity file: {:?}", path))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse entity file: {:?}", path))
}
