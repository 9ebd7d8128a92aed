//! Reconciliation report.

use std::collections::BTreeSet;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::reconcile::compare::{compare, Discrepancy};
use crate::reconcile::entry::ExternalEntry;
use crate::reconcile::mapping::{ENUM_FIELDS, NAME_ALIASES};
use crate::site::types::Game;

/// Discrepancies of one game present in both catalogues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub name: String,
    pub discrepancies: Vec<Discrepancy>,
}

/// Outcome of comparing osgameclones with our games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationReport {
    pub external_count: usize,
    pub our_count: usize,
    pub in_both: usize,
    pub only_external: usize,
    pub only_ours: usize,
    /// Every field that appears on some external entry.
    pub fields: BTreeSet<String>,
    /// Fields that appear on every external entry.
    pub mandatory_fields: BTreeSet<String>,
    /// Distinct values of the enumerated external fields, case-insensitively sorted.
    pub unique_values: Vec<(&'static str, Vec<String>)>,
    /// Matched games with at least one discrepancy, in external order.
    pub entries: Vec<EntryReport>,
}

/// Reconcile with the built-in name aliases.
pub fn reconcile(external: &[ExternalEntry], ours: &[Game]) -> ReconciliationReport {
    reconcile_with_aliases(external, ours, NAME_ALIASES)
}

/// Reconcile after renaming external entries by `aliases` (external -> ours).
pub fn reconcile_with_aliases(
    external: &[ExternalEntry],
    ours: &[Game],
    aliases: &[(&str, &str)],
) -> ReconciliationReport {
    let aliases: FxHashMap<&str, &str> = aliases.iter().copied().collect();
    let name_of = |entry: &ExternalEntry| -> String {
        aliases
            .get(entry.name.as_str())
            .map_or_else(|| entry.name.clone(), |alias| alias.to_string())
    };

    let (fields, mandatory_fields) = field_presence(external);
    let unique_values = ENUM_FIELDS
        .iter()
        .map(|field| (*field, unique_field_values(external, field)))
        .collect();

    let mut games: FxHashMap<&str, &Game> = FxHashMap::default();
    for game in ours {
        games.entry(game.title.as_str()).or_insert(game);
    }

    let external_names: BTreeSet<String> = external.iter().map(name_of).collect();
    let our_names: BTreeSet<&str> = games.keys().copied().collect();
    let in_both = external_names.iter().filter(|n| our_names.contains(n.as_str())).count();

    let mut entries = Vec::new();
    for entry in external {
        let name = name_of(entry);
        let Some(game) = games.get(name.as_str()) else {
            continue;
        };
        let discrepancies = compare(entry, game);
        if !discrepancies.is_empty() {
            entries.push(EntryReport { name, discrepancies });
        }
    }

    tracing::info!(
        "{} in both, {} only in osgameclones, {} only with us, {} with discrepancies",
        in_both,
        external_names.len() - in_both,
        our_names.len() - in_both,
        entries.len()
    );

    ReconciliationReport {
        external_count: external.len(),
        our_count: ours.len(),
        in_both,
        only_external: external_names.len() - in_both,
        only_ours: our_names.len() - in_both,
        fields,
        mandatory_fields,
        unique_values,
        entries,
    }
}

/// All fields seen, and the fields every entry has.
fn field_presence(external: &[ExternalEntry]) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut all = BTreeSet::new();
    let mut mandatory: Option<BTreeSet<String>> = None;

    for entry in external {
        let present = entry.present_fields();
        all.extend(present.iter().cloned());
        mandatory = Some(match mandatory {
            None => present,
            Some(so_far) => so_far.intersection(&present).cloned().collect(),
        });
    }

    (all, mandatory.unwrap_or_default())
}

fn unique_field_values(external: &[ExternalEntry], field: &str) -> Vec<String> {
    let unique: BTreeSet<&str> = external.iter().flat_map(|entry| entry.values(field)).collect();
    let mut values: Vec<String> = unique.into_iter().map(str::to_string).collect();
    values.sort_by_cached_key(|v| v.to_lowercase());
    values
}

impl fmt::Display for ReconciliationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} entries in osgameclones", self.external_count)?;
        writeln!(f, "osgc-fields: {}", join(&self.fields))?;
        writeln!(f, "mandatory osgc-fields: {}", join(&self.mandatory_fields))?;
        for (field, values) in &self.unique_values {
            writeln!(f, "osgc-{}: {}", field, values.join(", "))?;
        }
        writeln!(f, "{} entries with us", self.our_count)?;
        writeln!(
            f,
            "{} in both, {} only in osgameclones, {} only with us",
            self.in_both, self.only_external, self.only_ours
        )?;

        for entry in &self.entries {
            writeln!(f)?;
            writeln!(f, "{}", entry.name)?;
            for discrepancy in &entry.discrepancies {
                writeln!(f, " {}", discrepancy)?;
            }
        }
        Ok(())
    }
}

fn join(fields: &BTreeSet<String>) -> String {
    fields.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
