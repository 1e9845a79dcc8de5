use crate::app::AppState;
use crate::core::PathModel;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Klon passiert erst beim nächsten `Arc::make_mut()`.
#[derive(Clone)]
pub struct Snapshot {
    pub path: Arc<PathModel>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            path: state.path.clone(),
        }
    }

    /// Stellt den Snapshot wieder her. Ein laufender Drag wird beendet.
    pub fn apply_to(self, state: &mut AppState) {
        state.path = self.path;
        state.editor.clear_drag();
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen fertigen Snapshot ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{regular_polygon_path, ViewWindow};

    fn snapshot_with_segments(count: usize) -> Snapshot {
        let mut state = AppState::new();
        state.path = Arc::new(regular_polygon_path(&ViewWindow::default(), count).unwrap());
        Snapshot::from_state(&state)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_redo_swaps_snapshots() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_segments(3));

        let restored = history
            .pop_undo_with_current(snapshot_with_segments(5))
            .expect("undo vorhanden");
        assert_eq!(restored.path.segment_count(), 3);
        assert!(history.can_redo());

        let redone = history
            .pop_redo_with_current(restored)
            .expect("redo vorhanden");
        assert_eq!(redone.path.segment_count(), 5);
        assert!(history.can_undo());
    }

    #[test]
    fn new_record_clears_redo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_segments(3));
        history.pop_undo_with_current(snapshot_with_segments(4));
        assert!(history.can_redo());
        history.record_snapshot(snapshot_with_segments(6));
        assert!(!history.can_redo());
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut history = EditHistory::new_with_capacity(2);
        for n in 1..=3 {
            history.record_snapshot(snapshot_with_segments(n));
        }
        let last = history.pop_undo_with_current(snapshot_with_segments(9)).unwrap();
        let first = history.pop_undo_with_current(last).unwrap();
        assert_eq!(first.path.segment_count(), 2);
        assert!(!history.can_undo());
    }
}
