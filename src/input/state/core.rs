//! Drawing state machine and engine state management.

use crate::config::Config;
use crate::draw::{Color, History, Surface, color};
use crate::export::ExportConfig;
use crate::input::{style::ToolStyle, tool::Tool};

/// Current gesture state machine.
///
/// Tracks whether the user is idle or mid-gesture with a freehand or shape
/// tool. State transitions occur on pointer press, motion, and release; at
/// most one gesture is active at a time by construction (press is only
/// accepted while idle).
#[derive(Debug)]
pub enum GestureState {
    /// Not actively drawing - waiting for pointer input
    Idle,
    /// Freehand gesture in progress (pen or eraser held down)
    Freehand {
        /// Accumulated points, seeded with the press position
        points: Vec<(i32, i32)>,
        /// Stroke color snapshotted at gesture start
        color: Color,
        /// Stroke width snapshotted at gesture start
        thick: f64,
    },
    /// Shape gesture in progress (circle/rect/triangle held down)
    Shape {
        /// Which shape tool is being used
        tool: Tool,
        /// Anchor X coordinate (where the pointer was pressed)
        start_x: i32,
        /// Anchor Y coordinate (where the pointer was pressed)
        start_y: i32,
        /// Live end X coordinate, updated on every move
        end_x: i32,
        /// Live end Y coordinate, updated on every move
        end_y: i32,
        /// Stroke color snapshotted at gesture start
        color: Color,
        /// Stroke width snapshotted at gesture start
        thick: f64,
    },
}

/// Main engine state for one drawing surface.
///
/// Owns the raster surface, the action log, the tool/style controller, and
/// the in-progress gesture. All mutation flows through pointer events
/// (`on_mouse_*`) and command triggers (`handle_command`); the action log is
/// never mutated from outside.
pub struct CanvasState {
    /// The raster drawing target
    pub(crate) surface: Surface,
    /// Undo/redo action log
    pub(crate) history: History,
    /// Active tool, stroke color, and stroke width
    pub(crate) style: ToolStyle,
    /// Current gesture state machine
    pub(crate) gesture: GestureState,
    /// Export settings used by the Save command
    pub(crate) export: ExportConfig,
    /// Whether the front end should repaint from the surface
    pub needs_redraw: bool,
}

impl CanvasState {
    /// Creates an engine with default style on a surface of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_defaults(
            width,
            height,
            color::BACKGROUND,
            ToolStyle::default(),
            ExportConfig::default(),
        )
    }

    /// Creates an engine with explicit defaults.
    ///
    /// # Arguments
    /// * `width` - Surface width in pixels
    /// * `height` - Surface height in pixels
    /// * `background` - Surface background fill color
    /// * `style` - Initial tool/style selection
    /// * `export` - Export settings for the Save command
    pub fn with_defaults(
        width: i32,
        height: i32,
        background: Color,
        style: ToolStyle,
        export: ExportConfig,
    ) -> Self {
        Self {
            surface: Surface::new(width, height, background),
            history: History::new(),
            style,
            gesture: GestureState::Idle,
            export,
            needs_redraw: true,
        }
    }

    /// Creates an engine from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.surface.width,
            config.surface.height,
            config.surface.background.to_color(),
            ToolStyle::new(
                config.drawing.default_color.to_color(),
                config.drawing.default_thickness,
            ),
            config.export.to_export_config(),
        )
    }

    /// The raster surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable surface access for pixel snapshots.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// The action log (read-only; mutate via gestures and commands).
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The tool/style controller.
    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    /// Mutable tool/style access (tool, color, and width selection).
    pub fn style_mut(&mut self) -> &mut ToolStyle {
        &mut self.style
    }

    /// Returns true while a gesture is active.
    pub fn is_drawing(&self) -> bool {
        !matches!(self.gesture, GestureState::Idle)
    }

    /// Resizes the surface, preserving already-rendered pixels.
    ///
    /// The raster content is blitted at the origin of the new surface rather
    /// than replayed from history, so it may clip or leave background
    /// margins. The in-progress gesture (if any) is kept; its coordinates
    /// are surface-absolute and the next move event re-previews.
    pub fn resize(&mut self, width: i32, height: i32) {
        log::debug!(
            "Resizing surface {}x{} -> {width}x{height}",
            self.surface.width(),
            self.surface.height()
        );
        self.surface.resize(width, height);
        self.needs_redraw = true;
    }
}
