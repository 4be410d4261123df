// src/toggles.rs

use crate::catalog::Catalog;
use std::collections::BTreeSet;

/// Per-entry boolean flags keyed by catalog id.
///
/// Only ids whose flag is `true` are stored, so an absent id reads as
/// `false` and toggling twice gives back an equal snapshot. Snapshots are
/// values: `toggled` returns a new set and never touches `self`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleSet {
    on: BTreeSet<i64>,
}

impl ToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i64) -> bool {
        self.on.contains(&id)
    }

    pub fn toggled(&self, id: i64) -> Self {
        let mut next = self.clone();
        if !next.on.remove(&id) {
            next.on.insert(id);
        }
        next
    }

    /// Flagged ids that still exist in `catalog`.
    pub fn count_in(&self, catalog: &Catalog) -> usize {
        self.on.iter().filter(|id| catalog.contains(**id)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.on.is_empty()
    }
}

/// The two independent flag kinds tracked per listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    Solved,
    Revisit,
}
