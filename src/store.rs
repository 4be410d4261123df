// src/store.rs

use crate::catalog::Catalog;
use crate::constants::*;
use crate::listing;
use crate::models::{CatalogEntry, SortDirection, SortField, ViewKind};
use crate::toggles::{ToggleKind, ToggleSet};
use log::{debug, info};

// --- View State ---

/// Session-scoped view parameters for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub selected_category: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub solved: ToggleSet,
    pub revisit: ToggleSet,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            selected_category: ALL_CATEGORY.to_string(),
            sort_field: SortField::Name,
            sort_direction: SortDirection::Asc,
            solved: ToggleSet::new(),
            revisit: ToggleSet::new(),
        }
    }
}

impl ViewState {
    fn flags(&self, kind: ToggleKind) -> &ToggleSet {
        match kind {
            ToggleKind::Solved => &self.solved,
            ToggleKind::Revisit => &self.revisit,
        }
    }

    fn flags_mut(&mut self, kind: ToggleKind) -> &mut ToggleSet {
        match kind {
            ToggleKind::Solved => &mut self.solved,
            ToggleKind::Revisit => &mut self.revisit,
        }
    }
}

/// A catalog entry decorated with its toggle state, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub entry: &'a CatalogEntry,
    pub solved: bool,
    pub revisit: bool,
}

impl Row<'_> {
    pub fn link(&self) -> String {
        self.entry.link()
    }

    pub fn solved_glyph(&self) -> &'static str {
        if self.solved {
            GLYPH_SOLVED
        } else {
            GLYPH_UNSOLVED
        }
    }

    pub fn revisit_glyph(&self) -> &'static str {
        if self.revisit {
            GLYPH_REVISIT
        } else {
            GLYPH_NO_REVISIT
        }
    }
}

// --- Catalog Store ---

pub struct CatalogStore {
    view: ViewKind,
    catalog: Catalog,
    state: ViewState,
}

impl CatalogStore {
    pub fn new(view: ViewKind, catalog: Catalog) -> Self {
        CatalogStore {
            view,
            catalog,
            state: ViewState::default(),
        }
    }

    pub fn view(&self) -> ViewKind {
        self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn select_category(&mut self, category: &str) {
        debug!("[{:?}] Category: {} -> {}", self.view, self.state.selected_category, category);
        self.state.selected_category = category.to_string();
    }

    /// Sort header click: the active field flips direction, any other
    /// supported field becomes active ascending. Unsupported fields are ignored.
    pub fn sort_by(&mut self, field: SortField) {
        if !self.view.supports(field) {
            debug!("[{:?}] Ignoring unsupported sort field {:?}", self.view, field);
            return;
        }
        if self.state.sort_field == field {
            self.state.sort_direction = self.state.sort_direction.flipped();
        } else {
            self.state.sort_field = field;
            self.state.sort_direction = SortDirection::Asc;
        }
        debug!(
            "[{:?}] Sort: {:?} {:?}",
            self.view, self.state.sort_field, self.state.sort_direction
        );
    }

    /// Flips one flag for `id`. Ids outside the catalog are ignored.
    pub fn toggle(&mut self, kind: ToggleKind, id: i64) {
        if !self.catalog.contains(id) {
            debug!("[{:?}] Ignoring {:?} toggle for unknown id {}", self.view, kind, id);
            return;
        }
        let next = self.state.flags(kind).toggled(id);
        info!(
            "[{:?}] {:?} for problem {}: {} -> {}",
            self.view,
            kind,
            id,
            !next.get(id),
            next.get(id)
        );
        *self.state.flags_mut(kind) = next;
    }

    pub fn toggle_solved(&mut self, id: i64) {
        self.toggle(ToggleKind::Solved, id);
    }

    pub fn toggle_revisit(&mut self, id: i64) {
        self.toggle(ToggleKind::Revisit, id);
    }

    pub fn is_set(&self, kind: ToggleKind, id: i64) -> bool {
        self.state.flags(kind).get(id)
    }

    pub fn solved_count(&self) -> usize {
        self.state.solved.count_in(&self.catalog)
    }

    pub fn revisit_count(&self) -> usize {
        self.state.revisit.count_in(&self.catalog)
    }

    /// Fresh filter -> sort -> decorate pass over the current view state.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let filtered = listing::filter(self.catalog.entries(), &self.state.selected_category);
        let sorted = listing::sort(&filtered, self.state.sort_field, self.state.sort_direction);
        sorted
            .into_iter()
            .map(|entry| Row {
                entry,
                solved: self.state.solved.get(entry.id),
                revisit: self.state.revisit.get(entry.id),
            })
            .collect()
    }

    /// Arrow shown next to a sort header, if that header is active.
    pub fn sort_indicator(&self, field: SortField) -> Option<&'static str> {
        (self.state.sort_field == field).then(|| self.state.sort_direction.arrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn data_structures() -> CatalogStore {
        CatalogStore::new(
            ViewKind::DataStructures,
            catalog::builtin(ViewKind::DataStructures).unwrap(),
        )
    }

    fn ids(store: &CatalogStore) -> Vec<i64> {
        store.rows().iter().map(|r| r.entry.id).collect()
    }

    #[test]
    fn defaults_are_all_name_ascending() {
        let store = data_structures();
        let state = store.state();
        assert_eq!(state.selected_category, "All");
        assert_eq!(state.sort_field, SortField::Name);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert_eq!(ids(&store), vec![2, 10, 1, 7, 3, 9, 6, 5]);
    }

    #[test]
    fn category_selection_filters_rows() {
        let mut store = data_structures();
        store.select_category("Linked Lists");
        assert_eq!(ids(&store), vec![7, 9]);
        store.select_category("Queues");
        assert!(store.rows().is_empty());
        store.select_category("All");
        assert_eq!(store.rows().len(), 8);
    }

    #[test]
    fn header_click_flips_then_switches() {
        let mut store = data_structures();
        store.sort_by(SortField::Name);
        assert_eq!(store.state().sort_direction, SortDirection::Desc);
        assert_eq!(store.sort_indicator(SortField::Name), Some("↓"));

        store.sort_by(SortField::Difficulty);
        assert_eq!(store.state().sort_field, SortField::Difficulty);
        assert_eq!(store.state().sort_direction, SortDirection::Asc);
        assert_eq!(store.sort_indicator(SortField::Name), None);
        assert_eq!(ids(&store), vec![1, 5, 6, 9, 2, 3, 7, 10]);
    }

    #[test]
    fn unsupported_sort_field_is_ignored() {
        let mut store = data_structures();
        let before = store.state().clone();
        store.sort_by(SortField::Category);
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn solved_and_revisit_are_independent() {
        let mut store = data_structures();
        store.toggle_solved(6);
        assert!(store.is_set(ToggleKind::Solved, 6));
        assert!(!store.is_set(ToggleKind::Revisit, 6));

        store.toggle_revisit(6);
        store.toggle_solved(6);
        assert!(!store.is_set(ToggleKind::Solved, 6));
        assert!(store.is_set(ToggleKind::Revisit, 6));
    }

    #[test]
    fn toggling_unknown_id_is_a_no_op() {
        let mut store = data_structures();
        store.toggle_solved(404);
        assert!(store.state().solved.is_empty());
        assert_eq!(store.solved_count(), 0);
    }

    #[test]
    fn rows_carry_flags_and_glyphs() {
        let mut store = data_structures();
        store.toggle_solved(6);
        store.toggle_revisit(3);
        store.select_category("Arrays");
        let rows = store.rows();
        assert_eq!(rows.len(), 2);
        let merge = &rows[0];
        assert_eq!(merge.entry.id, 3);
        assert!(!merge.solved && merge.revisit);
        assert_eq!(merge.solved_glyph(), "🔄");
        assert_eq!(merge.revisit_glyph(), "✔️");
        let two_sum = &rows[1];
        assert_eq!(two_sum.solved_glyph(), "✅");
        assert_eq!(two_sum.link(), "/datastructures/problem/6");
    }

    #[test]
    fn counts_follow_toggles() {
        let mut store = data_structures();
        store.toggle_solved(1);
        store.toggle_solved(2);
        store.toggle_revisit(2);
        assert_eq!(store.solved_count(), 2);
        assert_eq!(store.revisit_count(), 1);
    }

    #[test]
    fn problems_view_sorts_by_category() {
        let mut store = CatalogStore::new(
            ViewKind::Problems,
            catalog::builtin(ViewKind::Problems).unwrap(),
        );
        store.sort_by(SortField::Category);
        let rows = store.rows();
        assert_eq!(rows[0].entry.category, "Arrays");
        assert_eq!(rows[0].entry.id, 3);
        assert_eq!(rows[1].entry.id, 6);
        store.sort_by(SortField::Difficulty);
        assert_eq!(store.state().sort_field, SortField::Category);
    }

    #[test]
    fn empty_catalog_renders_nothing() {
        let mut store = CatalogStore::new(ViewKind::DataStructures, Catalog::default());
        store.toggle_solved(1);
        assert!(store.rows().is_empty());
        assert_eq!(store.solved_count(), 0);
    }
}
