//! Two-stack action log for undo/redo history.

use super::shape::DrawAction;

/// The durable record of what has been drawn in this session.
///
/// Manages the committed stack (actions currently visible, in replay order)
/// and the redo stack (actions removed by undo, restorable until invalidated
/// by a new commit). These are the only mutation paths: actions enter via
/// [`History::push`], move between stacks via [`History::undo`] and
/// [`History::redo`], and leave via [`History::clear`].
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Actions in draw order (first = bottom layer, last = top layer)
    committed: Vec<DrawAction>,
    /// Actions removed by undo, most recently undone last
    undone: Vec<DrawAction>,
}

impl History {
    /// Creates an empty history with no committed or undone actions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a new action on top of the visible stack.
    ///
    /// Any pending redo state is invalidated: committing after one or more
    /// undos discards the undone actions for good.
    pub fn push(&mut self, action: DrawAction) {
        self.committed.push(action);
        self.undone.clear();
    }

    /// Moves the most recent committed action to the redo stack.
    ///
    /// Returns the action that was undone, or `None` if nothing is committed.
    pub fn undo(&mut self) -> Option<&DrawAction> {
        let action = self.committed.pop()?;
        self.undone.push(action);
        self.undone.last()
    }

    /// Moves the most recently undone action back onto the committed stack.
    ///
    /// Returns the restored action, or `None` if the redo stack is empty.
    pub fn redo(&mut self) -> Option<&DrawAction> {
        let action = self.undone.pop()?;
        self.committed.push(action);
        self.committed.last()
    }

    /// Empties both stacks. Clearing is not undoable.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }

    /// The committed actions in replay order.
    pub fn committed(&self) -> &[DrawAction] {
        &self.committed
    }

    /// Number of actions currently restorable by redo.
    pub fn undone_len(&self) -> usize {
        self.undone.len()
    }

    /// Returns true when there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
