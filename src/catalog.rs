// src/catalog.rs

use crate::constants::ALL_CATEGORY;
use crate::error::Result;
use crate::models::{CatalogEntry, Slide, ViewKind};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashSet;

// Seed shape for the embedded catalogs
#[derive(Deserialize)]
struct JsonCatalog {
    #[serde(default)]
    categories: Vec<String>,
    entries: Vec<CatalogEntry>,
}

/// Immutable, ordered source list for one listing view.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    categories: Vec<String>,
}

impl Catalog {
    /// Builds a catalog. An empty category list is derived from the entries
    /// in first-appearance order; "All" is always the first category.
    pub fn new(entries: Vec<CatalogEntry>, categories: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let entries: Vec<CatalogEntry> = entries
            .into_iter()
            .filter(|e| {
                let fresh = seen.insert(e.id);
                if !fresh {
                    warn!("Dropping duplicate catalog id {} ({})", e.id, e.name);
                }
                fresh
            })
            .collect();

        let source = if categories.is_empty() {
            entries.iter().map(|e| e.category.clone()).collect()
        } else {
            categories
        };

        let mut ordered = vec![ALL_CATEGORY.to_string()];
        for c in source {
            if !ordered.contains(&c) {
                ordered.push(c);
            }
        }

        Catalog {
            entries,
            categories: ordered,
        }
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let parsed: JsonCatalog = serde_json::from_str(data)?;
        debug!("Parsed catalog with {} entries", parsed.entries.len());
        Ok(Catalog::new(parsed.entries, parsed.categories))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries per category, in category-bar order, "All" excluded.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        self.categories
            .iter()
            .filter(|c| c.as_str() != ALL_CATEGORY)
            .map(|c| {
                let n = self.entries.iter().filter(|e| &e.category == c).count();
                (c.clone(), n)
            })
            .collect()
    }
}

/// Sample catalog shipped with each listing view.
pub fn builtin(view: ViewKind) -> Result<Catalog> {
    let data = match view {
        ViewKind::DataStructures => include_str!("data/data_structures.json"),
        ViewKind::Problems => include_str!("data/problems.json"),
    };
    Catalog::from_json(data)
}

pub fn builtin_slides() -> Result<Vec<Slide>> {
    let slides: Vec<Slide> = serde_json::from_str(include_str!("data/slides.json"))?;
    Ok(slides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Section};

    fn entry(id: i64, name: &str, category: &str) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.to_string(),
            category: category.to_string(),
            difficulty: None,
            section: Section::DataStructures,
        }
    }

    #[test]
    fn builtin_data_structures_catalog_loads() {
        let catalog = builtin(ViewKind::DataStructures).unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.categories()[0], "All");
        assert!(catalog.categories().iter().any(|c| c == "Queues"));
        let two_sum = catalog.entries().iter().find(|e| e.id == 6).unwrap();
        assert_eq!(two_sum.difficulty, Some(Difficulty::Easy));
    }

    #[test]
    fn builtin_problems_catalog_carries_sections() {
        let catalog = builtin(ViewKind::Problems).unwrap();
        assert_eq!(catalog.len(), 12);
        let p = catalog.entries().iter().find(|e| e.id == 4).unwrap();
        assert_eq!(p.link(), "/competitiveprogramming/problem/4");
        assert!(p.difficulty.is_none());
    }

    #[test]
    fn categories_are_derived_when_missing() {
        let catalog = Catalog::new(
            vec![entry(1, "a", "Trees"), entry(2, "b", "Arrays"), entry(3, "c", "Trees")],
            Vec::new(),
        );
        assert_eq!(catalog.categories(), &["All", "Trees", "Arrays"]);
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let catalog = Catalog::new(vec![entry(1, "first", "X"), entry(1, "second", "Y")], Vec::new());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].name, "first");
    }

    #[test]
    fn category_counts_include_empty_categories() {
        let catalog = builtin(ViewKind::DataStructures).unwrap();
        let counts = catalog.category_counts();
        assert_eq!(counts[0], ("Arrays".to_string(), 2));
        assert!(counts.contains(&("Graphs".to_string(), 0)));
        assert!(!counts.iter().any(|(c, _)| c == "All"));
    }

    #[test]
    fn empty_catalog_is_tolerated() {
        let catalog = Catalog::from_json(r#"{"entries": []}"#).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), &["All"]);
    }

    #[test]
    fn slides_load() {
        let slides = builtin_slides().unwrap();
        assert_eq!(slides.len(), 4);
        assert_eq!(slides[0].caption, "Code Your Future");
    }
}
