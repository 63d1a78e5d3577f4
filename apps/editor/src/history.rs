//! Undo/redo history for the in-memory document.
//!
//! Classic two-stack design: `past` holds everything older than the current
//! snapshot, `future` holds snapshots that were undone and can be redone.
//! Every element is a complete document — never a delta — so navigation is
//! a plain move between stacks.

use std::collections::VecDeque;

/// Generic undo/redo controller over complete document snapshots.
///
/// `present` is always defined; `past` and `future` never overlap. All
/// operations degrade to no-ops at stack boundaries rather than failing.
#[derive(Debug, Clone)]
pub struct HistoryStore<T> {
    past: VecDeque<T>,
    present: T,
    future: VecDeque<T>,
    limit: Option<usize>,
}

impl<T: PartialEq> HistoryStore<T> {
    /// Unbounded history starting from `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: VecDeque::new(),
            limit: None,
        }
    }

    /// History whose `past` is capped at `limit` entries. When the cap is
    /// exceeded the oldest entry is dropped first, so the most recent
    /// `limit` undo steps always survive.
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new(initial)
        }
    }

    /// Records a new edit. The current snapshot moves onto `past` and the
    /// redo branch is cleared. Returns false (and changes nothing) when
    /// `document` equals the current snapshot, which guards against
    /// redundant pushes from re-renders.
    pub fn set(&mut self, document: T) -> bool {
        if document == self.present {
            return false;
        }
        let previous = std::mem::replace(&mut self.present, document);
        self.past.push_back(previous);
        if let Some(limit) = self.limit {
            while self.past.len() > limit {
                self.past.pop_front();
            }
        }
        self.future.clear();
        true
    }

    /// Steps back one edit. Returns false when `past` is empty.
    pub fn undo(&mut self) -> bool {
        match self.past.pop_back() {
            Some(previous) => {
                let undone = std::mem::replace(&mut self.present, previous);
                self.future.push_front(undone);
                true
            }
            None => false,
        }
    }

    /// Steps forward one undone edit. Returns false when `future` is empty.
    pub fn redo(&mut self) -> bool {
        match self.future.pop_front() {
            Some(next) => {
                let redone = std::mem::replace(&mut self.present, next);
                self.past.push_back(redone);
                true
            }
            None => false,
        }
    }

    /// Replaces the current snapshot and discards both stacks. Used when
    /// switching to an entirely different document rather than editing the
    /// current one.
    pub fn reset(&mut self, document: T) {
        self.past.clear();
        self.future.clear();
        self.present = document;
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// The snapshot `undo` would return to, if any.
    pub fn previous(&self) -> Option<&T> {
        self.past.back()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_edits(edits: &[&str]) -> HistoryStore<String> {
        let mut store = HistoryStore::new("v0".to_string());
        for edit in edits {
            store.set(edit.to_string());
        }
        store
    }

    #[test]
    fn test_set_pushes_previous_onto_past() {
        let mut store = HistoryStore::new("v0".to_string());
        assert!(store.set("v1".to_string()));
        assert_eq!(store.present(), "v1");
        assert_eq!(store.previous(), Some(&"v0".to_string()));
        assert!(store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn test_set_equal_value_is_a_no_op() {
        let mut store = store_with_edits(&["v1"]);
        assert!(!store.set("v1".to_string()));
        assert_eq!(store.present(), "v1");
        // No extra undo step was recorded for the redundant push.
        assert!(store.undo());
        assert_eq!(store.present(), "v0");
        assert!(!store.undo());
    }

    #[test]
    fn test_undo_then_redo_restores_present() {
        let mut store = store_with_edits(&["v1", "v2", "v3"]);

        // Symmetry: N undos followed by N redos lands back on the same value.
        for n in 1..=3 {
            for _ in 0..n {
                assert!(store.undo());
            }
            for _ in 0..n {
                assert!(store.redo());
            }
            assert_eq!(store.present(), "v3");
        }
    }

    #[test]
    fn test_undo_on_empty_past_is_a_no_op() {
        let mut store = HistoryStore::new("v0".to_string());
        assert!(!store.undo());
        assert_eq!(store.present(), "v0");
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn test_redo_on_empty_future_is_a_no_op() {
        let mut store = store_with_edits(&["v1"]);
        assert!(!store.redo());
        assert_eq!(store.present(), "v1");
    }

    #[test]
    fn test_new_edit_clears_redo_branch() {
        let mut store = store_with_edits(&["v1", "v2"]);
        store.undo();
        assert!(store.can_redo());

        store.set("v2b".to_string());
        assert!(!store.can_redo());
        assert_eq!(store.present(), "v2b");
        // The undone branch is gone; undo walks the surviving line.
        store.undo();
        assert_eq!(store.present(), "v1");
    }

    #[test]
    fn test_reset_clears_both_stacks() {
        let mut store = store_with_edits(&["v1", "v2"]);
        store.undo();
        assert!(store.can_undo());
        assert!(store.can_redo());

        store.reset("other-doc".to_string());
        assert_eq!(store.present(), "other-doc");
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn test_limit_evicts_oldest_entry_first() {
        let mut store = HistoryStore::with_limit("v0".to_string(), 2);
        store.set("v1".to_string());
        store.set("v2".to_string());
        store.set("v3".to_string());

        // Cap of 2: "v0" was evicted, undo bottoms out at "v1".
        assert!(store.undo());
        assert!(store.undo());
        assert_eq!(store.present(), "v1");
        assert!(!store.undo());
    }

    #[test]
    fn test_unbounded_history_keeps_every_edit() {
        let mut store = HistoryStore::new(0u32);
        for i in 1..=50 {
            store.set(i);
        }
        for _ in 0..50 {
            assert!(store.undo());
        }
        assert_eq!(*store.present(), 0);
        assert!(!store.undo());
    }
}
