use crate::draw::{DrawAction, Shape, render};

use super::{CanvasState, GestureState};

impl CanvasState {
    /// Replays the committed history onto a cleared surface.
    ///
    /// This is the canonical redraw used after undo and clear: background
    /// fill, then every committed action in order, each with its own stored
    /// style. Rendering the same history twice produces identical pixels.
    pub fn render_full(&self) {
        let Some(ctx) = self.surface.context() else {
            return;
        };
        render::render_background(&ctx, self.surface.background());
        render::render_actions(&ctx, self.history.committed());
    }

    /// Renders the live preview during an active gesture.
    ///
    /// Replays committed history, then overlays the in-progress stroke or
    /// shape without appending it to the log. Called after every move event.
    /// Freehand overlays borrow the point list to avoid cloning long strokes
    /// on every motion event.
    pub(crate) fn render_preview(&self) {
        let Some(ctx) = self.surface.context() else {
            return;
        };
        render::render_background(&ctx, self.surface.background());
        render::render_actions(&ctx, self.history.committed());

        match &self.gesture {
            GestureState::Freehand {
                points,
                color,
                thick,
            } => {
                render::render_freehand_borrowed(&ctx, points, *color, *thick);
            }
            GestureState::Shape {
                tool,
                start_x,
                start_y,
                end_x,
                end_y,
                color,
                thick,
            } => {
                let action = DrawAction {
                    shape: Self::shape_for(*tool, *start_x, *start_y, *end_x, *end_y),
                    color: *color,
                    thick: *thick,
                    id: None,
                };
                render::render_action(&ctx, &action);
            }
            GestureState::Idle => {}
        }
    }

    /// Returns the action currently being drawn, for front ends that render
    /// their own overlay.
    ///
    /// # Returns
    /// - `Some(DrawAction)` while a gesture is active (freehand clones the
    ///   point list; prefer [`CanvasState::render_preview`] for long strokes)
    /// - `None` while idle
    pub fn provisional_action(&self) -> Option<DrawAction> {
        match &self.gesture {
            GestureState::Idle => None,
            GestureState::Freehand {
                points,
                color,
                thick,
            } => Some(DrawAction {
                shape: Shape::Freehand {
                    points: points.clone(),
                },
                color: *color,
                thick: *thick,
                id: None,
            }),
            GestureState::Shape {
                tool,
                start_x,
                start_y,
                end_x,
                end_y,
                color,
                thick,
            } => Some(DrawAction {
                shape: Self::shape_for(*tool, *start_x, *start_y, *end_x, *end_y),
                color: *color,
                thick: *thick,
                id: None,
            }),
        }
    }
}
