//! Catalogue statistics.

use rustc_hash::FxHashMap;

use crate::site::types::{values, Game};
use crate::site::view_models::{Occurrence, StatisticsSection};

/// Build systems used by the games, most frequent first, ties by name
/// (case-insensitive).
pub fn build_systems<'g>(games: impl IntoIterator<Item = &'g Game>) -> StatisticsSection {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for game in games {
        for system in values(&game.building.build_system) {
            *counts.entry(system).or_insert(0) += 1;
        }
    }

    StatisticsSection {
        title: "Build system".to_string(),
        items: sorted_occurrences(counts),
    }
}

fn sorted_occurrences(counts: FxHashMap<&str, usize>) -> Vec<Occurrence> {
    let mut items: Vec<Occurrence> = counts
        .into_iter()
        .map(|(name, count)| Occurrence {
            name: name.to_string(),
            count,
        })
        .collect();
    items.sort_by_cached_key(|o| (std::cmp::Reverse(o.count), o.name.to_lowercase(), o.name.clone()));
    items
}
