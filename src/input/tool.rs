//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool determines what kind of action one pointer gesture
/// produces. Pen and eraser capture every sampled point; the shape tools
/// capture only the gesture's anchor and end points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    Pen,
    /// Freehand stroke in the background color at double width
    Eraser,
    /// Circle outline - centered on the anchor, radius to the end point
    Circle,
    /// Rectangle outline - from corner to corner
    Rect,
    /// Isosceles triangle outline - inscribed in the gesture box
    Triangle,
}

impl Tool {
    /// Returns true for the two-point shape tools (circle, rect, triangle).
    ///
    /// Freehand tools (pen, eraser) accumulate a point list instead.
    pub fn is_shape(self) -> bool {
        matches!(self, Tool::Circle | Tool::Rect | Tool::Triangle)
    }
}
