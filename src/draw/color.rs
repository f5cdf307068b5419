//! RGBA color type and the fixed drawing palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color from 8-bit RGB components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Palette Constants
// ============================================================================

/// Predefined white color (#FFFFFF)
pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);

/// Predefined black color (#000000)
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// Predefined mid red color (#FF4D4D)
pub const RED: Color = Color::from_rgb8(0xFF, 0x4D, 0x4D);

/// Predefined parrot green color (#52EB34)
pub const GREEN: Color = Color::from_rgb8(0x52, 0xEB, 0x34);

/// Predefined light yellow color (#EDED15)
pub const YELLOW: Color = Color::from_rgb8(0xED, 0xED, 0x15);

/// Predefined sky blue color (#1081EB)
pub const BLUE: Color = Color::from_rgb8(0x10, 0x81, 0xEB);

/// Predefined light pink color (#EB1076)
pub const PINK: Color = Color::from_rgb8(0xEB, 0x10, 0x76);

/// Predefined light violet color (#9010EB)
pub const VIOLET: Color = Color::from_rgb8(0x90, 0x10, 0xEB);

/// Dark canvas background fill (#1A1A1A)
pub const BACKGROUND: Color = Color::from_rgb8(0x1A, 0x1A, 0x1A);

/// The fixed drawing palette, in selection order.
///
/// The first entry is the default stroke color.
pub const PALETTE: [Color; 8] = [WHITE, BLACK, RED, GREEN, YELLOW, BLUE, PINK, VIOLET];
