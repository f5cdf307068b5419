//! Shape definitions and the committed drawing action.

use super::color::Color;

/// Geometry of a drawable shape, as captured by one pointer gesture.
///
/// Shape variants store exactly the data needed to replay themselves:
/// freehand strokes keep every sampled point, while the two-point shapes keep
/// the gesture's reference points (circle) or the anchor plus signed extents
/// (rectangle, triangle). Replay never depends on surface pixel history.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Freehand drawing - polyline connecting pointer drag points
    Freehand {
        /// Sequence of (x, y) coordinates traced by the pointer
        points: Vec<(i32, i32)>,
    },
    /// Circle centered on the gesture anchor
    Circle {
        /// Anchor X coordinate (circle center)
        x1: i32,
        /// Anchor Y coordinate (circle center)
        y1: i32,
        /// End X coordinate; radius is the distance to the anchor
        x2: i32,
        /// End Y coordinate; radius is the distance to the anchor
        y2: i32,
    },
    /// Axis-aligned rectangle outline
    Rect {
        /// Anchor X coordinate
        x: i32,
        /// Anchor Y coordinate
        y: i32,
        /// Signed width in pixels (end minus anchor; negative flips the box)
        w: i32,
        /// Signed height in pixels (end minus anchor; negative flips the box)
        h: i32,
    },
    /// Isosceles triangle inscribed in the gesture's bounding box
    Triangle {
        /// Anchor X coordinate
        x: i32,
        /// Anchor Y coordinate
        y: i32,
        /// Signed width in pixels (end minus anchor)
        w: i32,
        /// Signed height in pixels (end minus anchor)
        h: i32,
    },
}

/// One immutable, replayable unit of drawing history.
///
/// Style is snapshotted at commit time: the stroke color and width travel
/// with the action so later tool or palette changes never restyle committed
/// content. Eraser strokes snapshot the surface background color at double
/// width and are otherwise ordinary freehand actions.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawAction {
    /// The geometry to replay
    pub shape: Shape,
    /// Stroke color captured when the gesture finished
    pub color: Color,
    /// Stroke width in pixels captured when the gesture finished
    pub thick: f64,
    /// Creation timestamp in milliseconds; stamped for shape gestures,
    /// `None` for freehand strokes. Not required for replay correctness.
    pub id: Option<i64>,
}

impl DrawAction {
    /// Creates a freehand action from sampled gesture points.
    pub fn freehand(points: Vec<(i32, i32)>, color: Color, thick: f64) -> Self {
        Self {
            shape: Shape::Freehand { points },
            color,
            thick,
            id: None,
        }
    }

    /// Creates a shape action stamped with the current wall-clock time.
    pub fn stamped(shape: Shape, color: Color, thick: f64) -> Self {
        Self {
            shape,
            color,
            thick,
            id: Some(chrono::Utc::now().timestamp_millis()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;

    #[test]
    fn freehand_actions_are_not_stamped() {
        let action = DrawAction::freehand(vec![(0, 0), (5, 5)], WHITE, 3.0);
        assert_eq!(action.id, None);
    }

    #[test]
    fn shape_actions_carry_a_timestamp() {
        let action = DrawAction::stamped(
            Shape::Rect {
                x: 0,
                y: 0,
                w: 10,
                h: 10,
            },
            WHITE,
            3.0,
        );
        assert!(action.id.is_some());
    }
}
