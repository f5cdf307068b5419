use crate::draw::{DrawAction, Shape};
use crate::input::events::MouseButton;
use crate::util;

use super::{CanvasState, GestureState};

impl CanvasState {
    /// Processes a pointer button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Pointer X coordinate
    /// * `y` - Pointer Y coordinate
    ///
    /// # Behavior
    /// Left press while idle starts a gesture with the active tool: freehand
    /// tools open a point list seeded with the press position, shape tools
    /// record the anchor for a provisional shape. The stroke style is
    /// snapshotted here so mid-gesture selections only affect the next
    /// gesture. A press while a gesture is already active is ignored.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }
        if !matches!(self.gesture, GestureState::Idle) {
            return;
        }

        let tool = self.style.tool();
        let (color, thick) = self.style.stroke_style(self.surface.background());

        self.gesture = if tool.is_shape() {
            GestureState::Shape {
                tool,
                start_x: x,
                start_y: y,
                end_x: x,
                end_y: y,
                color,
                thick,
            }
        } else {
            GestureState::Freehand {
                points: vec![(x, y)],
                color,
                thick,
            }
        };
        self.needs_redraw = true;
    }

    /// Processes pointer motion (dragging) events.
    ///
    /// # Arguments
    /// * `x` - Current pointer X coordinate
    /// * `y` - Current pointer Y coordinate
    ///
    /// # Behavior
    /// Appends a point (freehand) or updates the provisional end point
    /// (shape), then renders a live preview: committed history replayed with
    /// the in-progress action overlaid, never mutating history. Motion while
    /// idle is ignored.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        match &mut self.gesture {
            GestureState::Freehand { points, .. } => {
                points.push((x, y));
            }
            GestureState::Shape { end_x, end_y, .. } => {
                *end_x = x;
                *end_y = y;
            }
            GestureState::Idle => return,
        }

        self.render_preview();
        self.needs_redraw = true;
    }

    /// Processes a pointer button release event.
    ///
    /// The release position is folded in as the shape's final end point and
    /// previewed once more, so the surface shows exactly the geometry that
    /// gets committed; then the gesture is finalized.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }
        if matches!(self.gesture, GestureState::Idle) {
            return;
        }
        if let GestureState::Shape { end_x, end_y, .. } = &mut self.gesture {
            *end_x = x;
            *end_y = y;
        }
        self.render_preview();
        self.finish_gesture();
    }

    /// Processes the pointer leaving the surface mid-gesture.
    ///
    /// Abandonment is treated identically to a normal gesture end: whatever
    /// was captured so far is finalized, not discarded.
    pub fn on_mouse_leave(&mut self) {
        self.finish_gesture();
    }

    /// Finalizes the active gesture into a committed action.
    ///
    /// A gesture that captured nothing commits nothing. Committing empties
    /// the redo stack via [`crate::draw::History::push`].
    fn finish_gesture(&mut self) {
        match std::mem::replace(&mut self.gesture, GestureState::Idle) {
            GestureState::Idle => {}
            GestureState::Freehand {
                points,
                color,
                thick,
            } => {
                if points.is_empty() {
                    return;
                }
                self.history.push(DrawAction::freehand(points, color, thick));
                self.needs_redraw = true;
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
                let shape = Self::shape_for(tool, start_x, start_y, end_x, end_y);
                self.history.push(DrawAction::stamped(shape, color, thick));
                self.needs_redraw = true;
            }
        }
    }

    /// Builds the shape geometry for a finished or in-progress gesture.
    pub(super) fn shape_for(
        tool: crate::input::Tool,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
    ) -> Shape {
        use crate::input::Tool;

        match tool {
            Tool::Circle => Shape::Circle {
                x1: start_x,
                y1: start_y,
                x2: end_x,
                y2: end_y,
            },
            Tool::Rect => {
                let (w, h) = util::rect_extents(start_x, start_y, end_x, end_y);
                Shape::Rect {
                    x: start_x,
                    y: start_y,
                    w,
                    h,
                }
            }
            Tool::Triangle => {
                let (w, h) = util::rect_extents(start_x, start_y, end_x, end_y);
                Shape::Triangle {
                    x: start_x,
                    y: start_y,
                    w,
                    h,
                }
            }
            // Freehand tools never reach shape construction
            Tool::Pen | Tool::Eraser => Shape::Freehand {
                points: vec![(start_x, start_y), (end_x, end_y)],
            },
        }
    }
}
