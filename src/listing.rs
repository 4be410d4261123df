// src/listing.rs

use crate::constants::ALL_CATEGORY;
use crate::models::{CatalogEntry, SortDirection, SortField};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// --- Filter ---

/// Keeps entries whose category matches exactly. "All" keeps everything;
/// an unknown category yields an empty listing.
pub fn filter<'a>(catalog: &'a [CatalogEntry], category: &str) -> Vec<&'a CatalogEntry> {
    if category == ALL_CATEGORY {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|e| e.category == category).collect()
}

// --- Sorter ---

/// Returns a new ordering of `entries`; the input is left untouched.
/// `slice::sort_by` is stable, so equal keys keep their input order in
/// both directions.
pub fn sort<'a>(
    entries: &[&'a CatalogEntry],
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a CatalogEntry> {
    let mut out = entries.to_vec();
    out.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    out
}

fn compare(a: &CatalogEntry, b: &CatalogEntry, field: SortField) -> Ordering {
    match field {
        SortField::Name => locale_cmp(&a.name, &b.name),
        SortField::Difficulty => a.difficulty_rank().cmp(&b.difficulty_rank()),
        SortField::Category => {
            locale_cmp(&a.category, &b.category).then_with(|| locale_cmp(&a.name, &b.name))
        }
    }
}

/// Collation-style ordering: base letters first (accents and case
/// ignored), then accents, then lowercase before uppercase, then the exact
/// string.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

// `false` (lowercase) orders before `true` (uppercase)
fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}
