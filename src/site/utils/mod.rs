//! Utility modules for site generation.

pub mod canonical;
pub mod categorization;
pub mod columns;
pub mod paths;
pub mod shortcut;

pub use canonical::canonical_name;
pub use categorization::{sort_into_categories, uncategorized, Categorized};
pub use columns::{divide_in_columns, split_in_three, Columns, COLUMNS};
pub use paths::relative_url;
pub use shortcut::{is_absolute_url, shortcut_url, strip_scheme};
