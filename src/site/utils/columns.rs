//! Three-column layout of categorized index entries.

use std::collections::BTreeMap;

use serde::Serialize;

use super::categorization::Categorized;

/// Number of columns on every categorical index page.
pub const COLUMNS: usize = 3;

/// Per-category counts and column split of transformed entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Columns<U> {
    pub number_entries: BTreeMap<String, usize>,
    pub entries: BTreeMap<String, [Vec<U>; COLUMNS]>,
}

/// Transform every bucket element-wise and split it into three columns.
pub fn divide_in_columns<T, U>(categorized: &Categorized<'_, T>, transform: impl Fn(&T) -> U) -> Columns<U> {
    let mut number_entries = BTreeMap::new();
    let mut entries = BTreeMap::new();

    for (category, items) in categorized.iter() {
        number_entries.insert(category.to_string(), items.len());
        let transformed = items.iter().map(|item| transform(*item)).collect();
        entries.insert(category.to_string(), split_in_three(transformed));
    }

    Columns { number_entries, entries }
}

/// Split a list at `ceil(n/3)` and `ceil(2n/3)`.
///
/// Front-loaded: n=1 gives `[[a], [], []]`, n=2 gives `[[a], [b], []]`,
/// n=7 gives lengths `[3, 2, 2]`.
pub fn split_in_three<U>(mut items: Vec<U>) -> [Vec<U>; COLUMNS] {
    let n = items.len();
    let first = n.div_ceil(3);
    let second = (2 * n).div_ceil(3);

    let third_column = items.split_off(second);
    let second_column = items.split_off(first);
    [items, second_column, third_column]
}
