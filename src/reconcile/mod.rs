//! Reconciliation Module
//!
//! Read-only diff of our games against the osgameclones dataset. Entries
//! are matched by exact name (after aliasing) and compared field by field
//! through a fixed mapping table; nothing is written back to either side.

pub mod mapping;
pub mod entry;
pub mod compare;
pub mod report;

pub use compare::{compare, Discrepancy};
pub use entry::{load_external, ExternalEntry};
pub use mapping::{map_license, FIELD_MAPPING, LICENSE_MAP};
pub use report::{reconcile, reconcile_with_aliases, EntryReport, ReconciliationReport};
