use std::collections::BTreeSet;

use crate::error::CoreError;

/// The set of paper ids the user has marked for export.
///
/// Every id must reference a paper in the currently displayed list; the
/// stage controller clears the set whenever that list is replaced or
/// discarded. Iteration order is the BTreeSet order, which is stable —
/// the backing service does the packaging, so no particular order is
/// required, only a deterministic one.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns whether the id is
    /// selected afterwards.
    ///
    /// Ids not present in `current_ids` are rejected; the UI only offers
    /// checkboxes for displayed papers, so hitting this is a bug upstream.
    pub fn toggle(&mut self, id: &str, current_ids: &[String]) -> Result<bool, CoreError> {
        if !current_ids.iter().any(|c| c == id) {
            return Err(CoreError::Validation(format!(
                "unknown paper id: {id}"
            )));
        }
        if self.ids.remove(id) {
            Ok(false)
        } else {
            self.ids.insert(id.to_string());
            Ok(true)
        }
    }

    /// Bulk-select every id in `all_ids`.
    pub fn select_all(&mut self, all_ids: &[String]) {
        self.ids = all_ids.iter().cloned().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// True iff every displayed paper is selected. Ids are unique and only
    /// ever come from `all_ids`, so a size comparison suffices.
    pub fn is_all_selected(&self, all_ids: &[String]) -> bool {
        !all_ids.is_empty() && self.ids.len() == all_ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Snapshot of the selected ids in stable order.
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let current = ids(&["p1", "p2", "p3"]);
        let mut sel = SelectionSet::new();

        assert!(sel.toggle("p2", &current).unwrap());
        assert!(sel.contains("p2"));
        assert!(!sel.toggle("p2", &current).unwrap());
        assert!(!sel.contains("p2"));
        assert_eq!(sel.count(), 0);
    }

    #[test]
    fn toggle_rejects_id_outside_current_papers() {
        let current = ids(&["p1"]);
        let mut sel = SelectionSet::new();
        let err = sel.toggle("ghost", &current).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(sel.count(), 0);
    }

    #[test]
    fn select_all_then_is_all_selected_holds() {
        let current = ids(&["p1", "p2", "p3"]);
        let mut sel = SelectionSet::new();
        sel.select_all(&current);
        assert!(sel.is_all_selected(&current));
        assert_eq!(sel.count(), 3);
    }

    #[test]
    fn clear_then_is_all_selected_is_false_on_nonempty_list() {
        let current = ids(&["p1", "p2"]);
        let mut sel = SelectionSet::new();
        sel.select_all(&current);
        sel.clear();
        assert!(!sel.is_all_selected(&current));
        assert!(sel.is_empty());
    }

    #[test]
    fn is_all_selected_is_false_for_empty_list() {
        let sel = SelectionSet::new();
        assert!(!sel.is_all_selected(&[]));
    }

    #[test]
    fn ids_snapshot_is_stable() {
        let current = ids(&["p3", "p1", "p2"]);
        let mut sel = SelectionSet::new();
        sel.toggle("p3", &current).unwrap();
        sel.toggle("p1", &current).unwrap();
        assert_eq!(sel.ids(), ids(&["p1", "p3"]));
    }
}
