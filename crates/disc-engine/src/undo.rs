use disc_types::Material;

use crate::profile::DiscProfile;

/// A reversible change recorded by a design session.
#[derive(Debug, Clone)]
pub enum Command {
    /// Any edit of points or segments, including reset.
    EditProfile {
        before: Box<DiscProfile>,
        after: Box<DiscProfile>,
    },
    ChangeMaterial { before: Material, after: Material },
}

/// Two-stack undo/redo history.
#[derive(Debug, Default)]
pub struct UndoStack {
    undo: Vec<Command>,
    redo: Vec<Command>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new command, clearing the redo stack.
    pub fn push(&mut self, cmd: Command) {
        self.undo.push(cmd);
        self.redo.clear();
    }

    /// Take the most recent command and move it onto the redo stack.
    pub fn undo(&mut self) -> Option<&Command> {
        let cmd = self.undo.pop()?;
        self.redo.push(cmd);
        self.redo.last()
    }

    /// Take the most recently undone command and move it back.
    pub fn redo(&mut self) -> Option<&Command> {
        let cmd = self.redo.pop()?;
        self.undo.push(cmd);
        self.undo.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
