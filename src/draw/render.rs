//! Cairo-based replay rendering for drawing actions.

use super::color::Color;
use super::shape::{DrawAction, Shape};
use crate::util;

/// Fills the entire surface with the background color.
///
/// Should be called before replaying actions; the replay itself never clears.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `background` - Surface background fill color
pub fn render_background(ctx: &cairo::Context, background: Color) {
    ctx.set_source_rgba(background.r, background.g, background.b, background.a);
    let _ = ctx.paint(); // Ignore errors - a failed fill leaves prior pixels visible
}

/// Replays a sequence of actions onto a Cairo context in order.
///
/// Actions are drawn in the order they appear (first action = bottom layer).
/// Each action supplies its own stroke color and width; the current tool
/// state plays no part here.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `actions` - Slice of actions to replay
pub fn render_actions(ctx: &cairo::Context, actions: &[DrawAction]) {
    for action in actions {
        render_action(ctx, action);
    }
}

/// Renders a single action to a Cairo context.
///
/// Dispatches on the stored geometry and strokes its outline (shapes are
/// never filled). Shape primitives are recomputed from the stored reference
/// points and extents, so replay is exact regardless of surface state.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `action` - The action to render
pub fn render_action(ctx: &cairo::Context, action: &DrawAction) {
    match &action.shape {
        Shape::Freehand { points } => {
            render_freehand_borrowed(ctx, points, action.color, action.thick);
        }
        Shape::Circle { x1, y1, x2, y2 } => {
            render_circle(ctx, *x1, *y1, *x2, *y2, action.color, action.thick);
        }
        Shape::Rect { x, y, w, h } => {
            render_rect(ctx, *x, *y, *w, *h, action.color, action.thick);
        }
        Shape::Triangle { x, y, w, h } => {
            render_triangle(ctx, *x, *y, *w, *h, action.color, action.thick);
        }
    }
}

/// Render a freehand stroke (polyline through points)
///
/// This function accepts a borrowed slice, avoiding clones for better
/// performance. Use this for rendering the in-progress stroke during live
/// preview to prevent quadratic behavior on long gestures.
pub fn render_freehand_borrowed(
    ctx: &cairo::Context,
    points: &[(i32, i32)],
    color: Color,
    thick: f64,
) {
    if points.is_empty() {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    // Start at first point
    let (x0, y0) = points[0];
    ctx.move_to(x0 as f64, y0 as f64);

    // Draw lines through all points
    for &(x, y) in &points[1..] {
        ctx.line_to(x as f64, y as f64);
    }

    let _ = ctx.stroke();
}

/// Render a circle centered on the anchor point (outline)
fn render_circle(
    ctx: &cairo::Context,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
    thick: f64,
) {
    let radius = util::circle_radius(x1, y1, x2, y2);
    if radius <= 0.0 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);

    ctx.arc(x1 as f64, y1 as f64, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}

/// Render a rectangle (outline)
fn render_rect(ctx: &cairo::Context, x: i32, y: i32, w: i32, h: i32, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    // Stored extents are signed (end minus anchor); normalize only here so
    // the committed data matches the gesture exactly
    let (norm_x, norm_w) = if w >= 0 {
        (x as f64, w as f64)
    } else {
        ((x + w) as f64, (-w) as f64)
    };
    let (norm_y, norm_h) = if h >= 0 {
        (y as f64, h as f64)
    } else {
        ((y + h) as f64, (-h) as f64)
    };

    ctx.rectangle(norm_x, norm_y, norm_w, norm_h);
    let _ = ctx.stroke();
}

/// Render an isosceles triangle inscribed in the gesture box (outline)
fn render_triangle(ctx: &cairo::Context, x: i32, y: i32, w: i32, h: i32, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    let [(ax, ay), (lx, ly), (rx, ry)] = util::triangle_vertices(x, y, w, h);
    ctx.move_to(lx, ly);
    ctx.line_to(ax, ay);
    ctx.line_to(rx, ry);
    ctx.close_path();
    let _ = ctx.stroke();
}
