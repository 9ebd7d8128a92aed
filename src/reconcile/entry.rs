//! osgameclones entries.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};

/// A string or a list of strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

/// One game of the osgameclones dataset.
///
/// List fields accept a bare string; fields we do not compare are kept in
/// `other` so the report can still tell which fields every entry has.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExternalEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub game_type: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub originals: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub repo: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub url: Vec<String>,
    #[serde(default)]
    pub development: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub multiplayer: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub lang: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub framework: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub license: Vec<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yaml::Value>,
}

impl ExternalEntry {
    /// Values of one of the enumerated fields.
    pub fn values(&self, field: &str) -> Vec<&str> {
        match field {
            "type" => single(&self.game_type),
            "development" => single(&self.development),
            "status" => single(&self.status),
            "content" => single(&self.content),
            "originals" => many(&self.originals),
            "repo" => many(&self.repo),
            "url" => many(&self.url),
            "multiplayer" => many(&self.multiplayer),
            "lang" => many(&self.lang),
            "framework" => many(&self.framework),
            "license" => many(&self.license),
            _ => Vec::new(),
        }
    }

    /// Names of all fields present on this entry.
    pub fn present_fields(&self) -> BTreeSet<String> {
        let mut fields: BTreeSet<String> = self.other.keys().cloned().collect();
        fields.insert("name".to_string());
        for field in super::mapping::FIELD_MAPPING.iter().map(|(field, _)| *field) {
            if !self.values(field).is_empty() {
                fields.insert(field.to_string());
            }
        }
        fields
    }
}

fn single(value: &Option<String>) -> Vec<&str> {
    value.as_deref().into_iter().collect()
}

fn many(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

/// Load every `.yaml`/`.yml` file in `dir`, each a list of entries.
///
/// Files are read in name order so the entry order is stable.
pub fn load_external(dir: &Path) -> Result<Vec<ExternalEntry>> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read osgameclones directory: {:?}", dir))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list osgameclones directory: {:?}", dir))?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| matches!(path.extension().and_then(|e| e.to_str()), Some("yaml" | "yml")))
        .collect();
    files.sort();

    let mut entries = Vec::new();
    for path in &files {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read osgameclones file: {:?}", path))?;
        let file_entries: Vec<ExternalEntry> = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse osgameclones file: {:?}", path))?;
        entries.extend(file_entries);
    }

    tracing::info!("{} entries in osgameclones ({} files)", entries.len(), files.len());
    Ok(entries)
}
