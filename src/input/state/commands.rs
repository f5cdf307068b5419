use log::{debug, error, info};

use crate::draw::render;
use crate::export;
use crate::input::events::Command;

use super::CanvasState;

impl CanvasState {
    /// Dispatches a no-argument command trigger.
    ///
    /// Commands arrive from front-end buttons; each maps to exactly one
    /// engine operation.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Clear => self.clear(),
            Command::Save => self.save(),
            Command::ToggleWidthSlider => {
                let visible = self.style.toggle_slider();
                debug!("Stroke-width slider visible: {visible}");
            }
        }
    }

    /// Removes the most recent committed action and re-renders.
    ///
    /// No-op when nothing is committed. The undone action stays restorable
    /// until a new commit invalidates it.
    pub fn undo(&mut self) {
        if self.history.undo().is_none() {
            return;
        }
        self.render_full();
        self.needs_redraw = true;
    }

    /// Restores the most recently undone action.
    ///
    /// No-op when the redo stack is empty. Rendering takes the append-only
    /// fast path: the restored action is stroked on top of the current
    /// pixels, which replaying the shorter history already produced.
    pub fn redo(&mut self) {
        let Some(action) = self.history.redo() else {
            return;
        };
        if let Some(ctx) = self.surface.context() {
            render::render_action(&ctx, action);
        }
        self.needs_redraw = true;
    }

    /// Empties both history stacks and resets the surface background.
    ///
    /// Clearing is not undoable: the committed sequence is discarded, not
    /// parked on the redo stack.
    pub fn clear(&mut self) {
        self.history.clear();
        self.surface.clear();
        self.needs_redraw = true;
    }

    /// Exports a PNG snapshot of the current surface.
    ///
    /// A failed export is logged and otherwise ignored so drawing stays
    /// usable; the pixel snapshot is independent of the action log.
    pub fn save(&self) {
        match export::save_drawing(&self.surface, &self.export) {
            Ok(path) => info!("Drawing saved to {}", path.display()),
            Err(err) => error!("Failed to save drawing: {err}"),
        }
    }
}
