//! Generic input event types for front-end integration.

/// Mouse button identification.
///
/// Front ends map their native pointer events to these values for unified
/// gesture handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (currently unused)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

/// No-argument command triggers exposed to the front end's buttons.
///
/// Each command maps to a single engine operation; none of them carry
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Remove the most recent committed action
    Undo,
    /// Restore the most recently undone action
    Redo,
    /// Empty both history stacks and reset the surface background
    Clear,
    /// Export a PNG snapshot of the current surface
    Save,
    /// Toggle visibility of the stroke-width slider
    ToggleWidthSlider,
}
