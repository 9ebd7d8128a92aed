//! OSGL Site Index
//!
//! Index and listing payloads for the open source game list website, plus
//! a reconciliation report against the osgameclones catalogue.
//!
//! - `site/`: anchors, reference resolution, field projection, page payloads
//! - `reconcile/`: cross-catalogue matching and field comparison
//! - `data`: catalogue loading from JSON
//! - `config`: classification tables (platforms, languages, genres, licenses)

pub mod config;
pub mod data;
pub mod error;
pub mod reconcile;
pub mod site;

// Re-export commonly used types
pub use config::ClassificationConfig;
pub use data::load_catalogue;
pub use error::{CatalogueError, Result};
pub use reconcile::{reconcile, ReconciliationReport};
pub use site::{Catalogue, SiteGenerator, SitePayload};
