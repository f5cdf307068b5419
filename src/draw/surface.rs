//! Raster surface lifecycle: pixel dimensions, background fill, and
//! content-preserving resize.

use super::color::Color;
use super::render;
use log::warn;

/// The raster drawing target.
///
/// Owns an offscreen ARGB32 Cairo image surface together with its pixel
/// dimensions and background fill color. If the surface or a drawing context
/// cannot be acquired, the engine degrades to an inert state: every drawing
/// operation becomes a silent no-op instead of raising, and prior pixels stay
/// visually unchanged.
pub struct Surface {
    /// Backing store; `None` when allocation failed and the surface is inert
    raster: Option<cairo::ImageSurface>,
    width: i32,
    height: i32,
    background: Color,
}

impl Surface {
    /// Creates a surface of the given pixel dimensions, filled with the
    /// background color.
    ///
    /// Allocation failure is logged and produces an inert surface rather
    /// than an error.
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        let raster = match cairo::ImageSurface::create(cairo::Format::ARgb32, width, height) {
            Ok(raster) => Some(raster),
            Err(err) => {
                warn!("Failed to allocate {width}x{height} drawing surface: {err}");
                None
            }
        };

        let surface = Self {
            raster,
            width,
            height,
            background,
        };
        surface.clear();
        surface
    }

    /// Current surface width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Current surface height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The background fill color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Acquires a transient drawing context for one rendering operation.
    ///
    /// Returns `None` (with a logged warning) when the surface is inert or
    /// Cairo refuses a context; callers treat that as a silent no-op.
    pub fn context(&self) -> Option<cairo::Context> {
        let raster = self.raster.as_ref()?;
        match cairo::Context::new(raster) {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                warn!("Drawing context unavailable: {err}");
                None
            }
        }
    }

    /// Resets every pixel to the background fill.
    pub fn clear(&self) {
        if let Some(ctx) = self.context() {
            render::render_background(&ctx, self.background);
        }
    }

    /// Resizes the surface while preserving already-rendered pixels.
    ///
    /// The old raster is blitted at the origin of the freshly allocated
    /// surface, so content clips when shrinking and new margins take the
    /// background fill when growing. Content is never rescaled.
    pub fn resize(&mut self, width: i32, height: i32) {
        let old = self.raster.take();

        let new = match cairo::ImageSurface::create(cairo::Format::ARgb32, width, height) {
            Ok(new) => new,
            Err(err) => {
                warn!("Failed to resize drawing surface to {width}x{height}: {err}");
                self.width = width;
                self.height = height;
                return;
            }
        };

        if let Ok(ctx) = cairo::Context::new(&new) {
            render::render_background(&ctx, self.background);
            if let Some(old) = &old {
                if ctx.set_source_surface(old, 0.0, 0.0).is_ok() {
                    let _ = ctx.paint();
                }
            }
        }

        self.raster = Some(new);
        self.width = width;
        self.height = height;
    }

    /// Copies the current raster into a standalone image surface.
    ///
    /// Used by export so encoding never touches the live surface. Returns
    /// `None` when the surface is inert.
    pub fn snapshot(&self) -> Option<cairo::ImageSurface> {
        let raster = self.raster.as_ref()?;
        let copy = cairo::ImageSurface::create(cairo::Format::ARgb32, self.width, self.height)
            .map_err(|err| warn!("Failed to allocate snapshot surface: {err}"))
            .ok()?;
        let ctx = cairo::Context::new(&copy).ok()?;
        ctx.set_source_surface(raster, 0.0, 0.0).ok()?;
        let _ = ctx.paint();
        drop(ctx);
        Some(copy)
    }

    /// Returns a copy of the raw ARGB32 pixel buffer.
    ///
    /// Rows are `width * 4` bytes; the buffer is the full pixel snapshot used
    /// for determinism checks. Returns `None` when the surface is inert.
    pub fn pixels(&mut self) -> Option<Vec<u8>> {
        let raster = self.raster.as_mut()?;
        raster.flush();
        match raster.data() {
            Ok(data) => Some(data.to_vec()),
            Err(err) => {
                warn!("Pixel data unavailable: {err}");
                None
            }
        }
    }
}
