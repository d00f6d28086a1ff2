#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// What the surfaces should show after an undo or redo.
#[derive(Clone, Debug, PartialEq)]
pub enum Restore<S> {
    /// Nothing left in history: both surfaces are cleared.
    Blank,
    Snapshot(S),
}

/// Linear undo/redo over whole-surface snapshots.
///
/// `actions` counts every drawing action. `undo` records it as the
/// checkpoint; if it has moved on by the time `redo` runs, new work happened
/// after the undo and the redo entries are dropped.
#[derive(Debug)]
pub struct History<S> {
    undo: Vec<S>,
    redo: Vec<S>,
    actions: u64,
    checkpoint: u64,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            actions: 0,
            checkpoint: 0,
        }
    }
}

impl<S: Clone> History<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_action(&mut self) {
        self.actions += 1;
    }

    pub fn commit(&mut self, snapshot: S) {
        self.undo.push(snapshot);
        self.mark_action();
        log::debug!(
            "history commit undo={} redo={} actions={}",
            self.undo.len(),
            self.redo.len(),
            self.actions
        );
    }

    pub fn undo(&mut self) -> Option<Restore<S>> {
        let latest = self.undo.pop()?;
        self.checkpoint = self.actions;
        self.redo.push(latest);
        log::debug!(
            "history undo undo={} redo={} checkpoint={}",
            self.undo.len(),
            self.redo.len(),
            self.checkpoint
        );
        Some(match self.undo.last() {
            Some(snapshot) => Restore::Snapshot(snapshot.clone()),
            None => Restore::Blank,
        })
    }

    pub fn redo(&mut self) -> Option<Restore<S>> {
        if self.actions > self.checkpoint {
            if !self.redo.is_empty() {
                log::debug!(
                    "history redo invalidated dropped={} actions={} checkpoint={}",
                    self.redo.len(),
                    self.actions,
                    self.checkpoint
                );
            }
            self.redo.clear();
            return None;
        }
        let snapshot = self.redo.pop()?;
        self.undo.push(snapshot.clone());
        log::debug!(
            "history redo undo={} redo={}",
            self.undo.len(),
            self.redo.len()
        );
        Some(Restore::Snapshot(snapshot))
    }

    /// Snapshot the display should currently show.
    pub fn current(&self) -> Option<&S> {
        self.undo.last()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether `redo` would restore something. False once new work has
    /// invalidated the pending entries, even before `redo` drops them.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty() && self.actions <= self.checkpoint
    }

    pub fn actions(&self) -> u64 {
        self.actions
    }
}
