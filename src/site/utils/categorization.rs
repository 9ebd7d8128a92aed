//! Sorting entities into named category buckets.
//!
//! A classification scheme is an ordered list of category labels plus a
//! membership predicate. Membership is not exclusive: one game can sit in
//! several genre buckets at once.

/// Buckets of items keyed by category, in category order.
#[derive(Debug, Clone)]
pub struct Categorized<'a, T> {
    buckets: Vec<(String, Vec<&'a T>)>,
}

impl<'a, T> Categorized<'a, T> {
    /// Category labels in scheme order (overflow label last, if any).
    pub fn categories(&self) -> Vec<String> {
        self.buckets.iter().map(|(category, _)| category.clone()).collect()
    }

    pub fn get(&self, category: &str) -> Option<&[&'a T]> {
        self.buckets
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a T])> {
        self.buckets
            .iter()
            .map(|(category, items)| (category.as_str(), items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Sort items into category buckets.
///
/// Each category's bucket holds every item for which `fits(item, category)`
/// holds, in input order. With `unknown_category` set, one more bucket under
/// that label collects the items that fit no category. Without it those
/// items simply appear in no bucket.
pub fn sort_into_categories<'a, T, C: AsRef<str>>(
    items: &'a [T],
    categories: &[C],
    fits: impl Fn(&T, &str) -> bool,
    unknown_category: Option<&str>,
) -> Categorized<'a, T> {
    let mut buckets: Vec<(String, Vec<&'a T>)> = categories
        .iter()
        .map(|category| {
            let category = category.as_ref();
            let bucket = items.iter().filter(|item| fits(*item, category)).collect();
            (category.to_string(), bucket)
        })
        .collect();

    if let Some(unknown) = unknown_category {
        buckets.push((unknown.to_string(), uncategorized(items, categories, &fits)));
    }

    Categorized { buckets }
}

/// Items that fit none of the categories.
pub fn uncategorized<'a, T, C: AsRef<str>>(
    items: &'a [T],
    categories: &[C],
    fits: impl Fn(&T, &str) -> bool,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| !categories.iter().any(|c| fits(*item, c.as_ref())))
        .collect()
}
