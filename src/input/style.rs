//! Active tool and stroke style state.

use crate::draw::{Color, color};
use crate::input::tool::Tool;
use log::debug;

/// Stroke width lower bound in pixels.
pub const MIN_THICKNESS: f64 = 1.0;
/// Stroke width upper bound in pixels.
pub const MAX_THICKNESS: f64 = 20.0;

/// Holds the active tool, stroke color, and stroke width.
///
/// Selections take effect on the next gesture only: the style is snapshotted
/// into each [`crate::draw::DrawAction`] when its gesture finishes, so
/// changing tool or color never restyles committed content.
#[derive(Debug, Clone)]
pub struct ToolStyle {
    /// Currently selected tool
    tool: Tool,
    /// Currently selected palette color
    color: Color,
    /// Stroke width in pixels (1-20)
    thick: f64,
    /// Whether the stroke-width slider is visible in the front end
    slider_visible: bool,
}

impl Default for ToolStyle {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            color: color::PALETTE[0],
            thick: 5.0,
            slider_visible: false,
        }
    }
}

impl ToolStyle {
    /// Creates a style controller with explicit initial color and width.
    pub fn new(color: Color, thick: f64) -> Self {
        Self {
            color,
            thick: thick.clamp(MIN_THICKNESS, MAX_THICKNESS),
            ..Self::default()
        }
    }

    /// The currently selected tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Selects the tool used by the next gesture.
    pub fn set_tool(&mut self, tool: Tool) {
        debug!("Tool selected: {tool:?}");
        self.tool = tool;
    }

    /// The currently selected stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Selects the stroke color used by the next gesture.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The configured stroke width in pixels.
    pub fn thickness(&self) -> f64 {
        self.thick
    }

    /// Sets the stroke width, clamped to the 1-20 slider range.
    pub fn set_thickness(&mut self, thick: f64) {
        self.thick = thick.clamp(MIN_THICKNESS, MAX_THICKNESS);
    }

    /// Whether the stroke-width slider is currently visible.
    pub fn slider_visible(&self) -> bool {
        self.slider_visible
    }

    /// Flips the stroke-width slider visibility; returns the new state.
    pub fn toggle_slider(&mut self) -> bool {
        self.slider_visible = !self.slider_visible;
        self.slider_visible
    }

    /// Resolves the stroke style for a gesture starting now.
    ///
    /// The eraser paints with the surface background color at double the
    /// configured width; every other tool uses the selected palette color.
    pub fn stroke_style(&self, background: Color) -> (Color, f64) {
        if self.tool == Tool::Eraser {
            (background, self.thick * 2.0)
        } else {
            (self.color, self.thick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BACKGROUND, RED, WHITE};

    #[test]
    fn default_style_is_white_pen() {
        let style = ToolStyle::default();
        assert_eq!(style.tool(), Tool::Pen);
        assert_eq!(style.color(), WHITE);
        assert_eq!(style.thickness(), 5.0);
        assert!(!style.slider_visible());
    }

    #[test]
    fn thickness_is_clamped_to_slider_range() {
        let mut style = ToolStyle::default();
        style.set_thickness(0.0);
        assert_eq!(style.thickness(), MIN_THICKNESS);
        style.set_thickness(64.0);
        assert_eq!(style.thickness(), MAX_THICKNESS);
    }

    #[test]
    fn eraser_strokes_use_background_at_double_width() {
        let mut style = ToolStyle::new(RED, 4.0);
        style.set_tool(Tool::Eraser);
        assert_eq!(style.stroke_style(BACKGROUND), (BACKGROUND, 8.0));
    }

    #[test]
    fn pen_strokes_use_the_selected_color() {
        let style = ToolStyle::new(RED, 4.0);
        assert_eq!(style.stroke_style(BACKGROUND), (RED, 4.0));
    }

    #[test]
    fn toggle_slider_flips_visibility() {
        let mut style = ToolStyle::default();
        assert!(style.toggle_slider());
        assert!(!style.toggle_slider());
    }
}
