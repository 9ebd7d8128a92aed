//! Site Generator Module
//!
//! Turns a catalogue of games, inspirations and developers into the page
//! payloads of the static site.
//!
//! ## Stages
//! 1. Anchors - slug, alphabet bucket and listing href per entity
//! 2. References - cross references become link records, dangling ones abort
//! 3. Fields - display field groups per entity
//! 4. Pages - alphabetical, genre, language and platform indexes in three columns

pub mod types;
pub mod anchors;
pub mod references;
pub mod pluralization;
pub mod fields;
pub mod pipeline;
pub mod statistics;
pub mod view_models;
pub mod generator;
pub mod utils;

pub use generator::SiteGenerator;
pub use types::{Catalogue, Developer, EntityKind, FieldGroup, FieldValue, Game, Inspiration, LinkRecord};
pub use view_models::SitePayload;
